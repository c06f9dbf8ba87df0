use std::path::Path;

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::toast::DEFAULT_TOAST_MS;

/// Storefront tunables. Every field has a default so a partial (or empty)
/// JSON object is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub toast_duration_ms: u64,
    pub featured_count: usize,
    pub related_count: usize,
    /// Fixed home-page shuffle seed; a clock-derived seed is used when unset.
    pub featured_seed: Option<u64>,
    /// Share message; `{name}` is replaced with the product name.
    pub share_text_template: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            toast_duration_ms: DEFAULT_TOAST_MS as u64,
            featured_count: 14,
            related_count: 4,
            featured_seed: None,
            share_text_template: "ดูสินค้าน่าสนใจ: {name} ที่ตลาดภูมิปัญญา!".into(),
        }
    }
}

impl StoreConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: StoreConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!("Loading store config from {}", path.display());
        let contents = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read {}: {e}", path.display())))?;
        Self::from_json(&contents)
    }

    fn validate(&self) -> Result<()> {
        if self.toast_duration_ms == 0 {
            return Err(Error::Config("toast_duration_ms must be positive".into()));
        }
        if i64::try_from(self.toast_duration_ms).is_err() {
            return Err(Error::Config("toast_duration_ms is too large".into()));
        }
        Ok(())
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::milliseconds(i64::try_from(self.toast_duration_ms).unwrap_or(DEFAULT_TOAST_MS))
    }

    pub fn share_text(&self, product_name: &str) -> String {
        self.share_text_template.replace("{name}", product_name)
    }
}
