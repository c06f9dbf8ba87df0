use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::product::{Product, ProductCategory};

/// Listing sort order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortMode {
    /// Catalog order.
    #[default]
    Default,
    PriceAsc,
    PriceDesc,
}

impl SortMode {
    pub fn all() -> &'static [SortMode] {
        &[SortMode::Default, SortMode::PriceAsc, SortMode::PriceDesc]
    }

    /// Stable key used by the sort `<select>` and the shell.
    pub fn key(&self) -> &'static str {
        match self {
            SortMode::Default => "default",
            SortMode::PriceAsc => "price-asc",
            SortMode::PriceDesc => "price-desc",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortMode::Default => "ค่าเริ่มต้น",
            SortMode::PriceAsc => "ราคา: น้อยไปมาก",
            SortMode::PriceDesc => "ราคา: มากไปน้อย",
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for SortMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortMode::all()
            .iter()
            .copied()
            .find(|mode| mode.key() == s)
            .ok_or_else(|| format!("unknown sort mode '{s}'"))
    }
}

/// Search, facet and sort selections for the listing page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterState {
    pub query: String,
    pub categories: BTreeSet<ProductCategory>,
    pub provinces: BTreeSet<String>,
    pub sort: SortMode,
}

impl FilterState {
    pub fn is_empty(&self) -> bool {
        self.query.is_empty()
            && self.categories.is_empty()
            && self.provinces.is_empty()
            && self.sort == SortMode::Default
    }

    /// Checkbox semantics: add when absent, remove when present.
    pub fn toggle_category(&mut self, category: ProductCategory) {
        if !self.categories.remove(&category) {
            self.categories.insert(category);
        }
    }

    pub fn toggle_province(&mut self, province: &str) {
        if !self.provinces.remove(province) {
            self.provinces.insert(province.to_string());
        }
    }

    /// Whether a product passes every active predicate.
    pub fn accepts(&self, product: &Product) -> bool {
        (self.query.is_empty() || product.matches_query(&self.query))
            && (self.categories.is_empty() || self.categories.contains(&product.category))
            && (self.provinces.is_empty() || self.provinces.contains(&product.province))
    }
}

/// Derive the listing from the catalog: filter, then stable-sort by price.
pub fn apply<'a>(catalog: &'a Catalog, filter: &FilterState) -> Vec<&'a Product> {
    let mut visible: Vec<&Product> = catalog.iter().filter(|p| filter.accepts(p)).collect();

    match filter.sort {
        SortMode::Default => {}
        SortMode::PriceAsc => {
            visible.sort_by(|a, b| compare_prices(a.unit_price(), b.unit_price(), false))
        }
        SortMode::PriceDesc => {
            visible.sort_by(|a, b| compare_prices(a.unit_price(), b.unit_price(), true))
        }
    }
    visible
}

/// Price ordering where unparseable prices always sort last.
///
/// `Vec::sort_by` is stable, so equal keys keep catalog order.
fn compare_prices(a: Option<f64>, b: Option<f64>, descending: bool) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) if descending => b.total_cmp(&a),
        (Some(a), Some(b)) => a.total_cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
