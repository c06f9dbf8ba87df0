use serde::{Deserialize, Serialize};

use crate::config::StoreConfig;
use crate::product::Product;
use crate::toast::ToastKind;

/// Payload handed to the platform share sheet or clipboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareRequest {
    pub title: String,
    pub text: String,
    pub url: String,
}

impl ShareRequest {
    pub fn for_product(product: &Product, url: impl Into<String>, config: &StoreConfig) -> Self {
        Self {
            title: product.name.clone(),
            text: config.share_text(&product.name),
            url: url.into(),
        }
    }
}

/// What the platform reported after a share attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShareOutcome {
    /// The native share sheet completed.
    Shared,
    /// No share sheet; the URL went to the clipboard instead.
    Copied,
    Failed(String),
}

impl ShareOutcome {
    /// Toast to show for this outcome, if any: (kind, title, message).
    pub fn notification(&self) -> Option<(ToastKind, &'static str, &'static str)> {
        match self {
            ShareOutcome::Shared => None,
            ShareOutcome::Copied => Some((
                ToastKind::Info,
                "คัดลอกลิงก์แล้ว",
                "คุณสามารถวางลิงก์เพื่อแชร์ได้เลย",
            )),
            ShareOutcome::Failed(_) => Some((
                ToastKind::Error,
                "เกิดข้อผิดพลาด",
                "ไม่สามารถแชร์ได้ในขณะนี้",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::{sample_product, ProductCategory};

    #[test]
    fn request_uses_product_name() {
        let product = sample_product(8, ProductCategory::Decor, "ยะลา", "4,500 ฿");
        let request =
            ShareRequest::for_product(&product, "https://market.example/", &StoreConfig::default());
        assert_eq!(request.title, "Product 8");
        assert!(request.text.contains("Product 8"));
        assert_eq!(request.url, "https://market.example/");
    }

    #[test]
    fn outcomes_map_to_toasts() {
        assert_eq!(ShareOutcome::Shared.notification(), None);
        assert_eq!(ShareOutcome::Copied.notification().unwrap().0, ToastKind::Info);
        assert_eq!(
            ShareOutcome::Failed("denied".into()).notification().unwrap().0,
            ToastKind::Error
        );
    }
}
