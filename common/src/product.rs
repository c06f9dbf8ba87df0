use std::fmt;

use serde::{Deserialize, Serialize};

use crate::price::parse_price;

/// Catalog product identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u32);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Product category. Serialized as the Thai label shown in the storefront.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ProductCategory {
    #[serde(rename = "ของใช้")]
    Household,
    #[serde(rename = "อาหาร")]
    Food,
    #[serde(rename = "เครื่องแต่งกาย")]
    Apparel,
    #[serde(rename = "ของตกแต่ง")]
    Decor,
    #[serde(rename = "เครื่องประดับ")]
    Jewelry,
}

impl ProductCategory {
    /// Home page tile order.
    pub fn all() -> &'static [ProductCategory] {
        &[
            ProductCategory::Food,
            ProductCategory::Apparel,
            ProductCategory::Household,
            ProductCategory::Decor,
            ProductCategory::Jewelry,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProductCategory::Household => "ของใช้",
            ProductCategory::Food => "อาหาร",
            ProductCategory::Apparel => "เครื่องแต่งกาย",
            ProductCategory::Decor => "ของตกแต่ง",
            ProductCategory::Jewelry => "เครื่องประดับ",
        }
    }

    /// Look up a category by its Thai label.
    pub fn from_label(label: &str) -> Option<ProductCategory> {
        Self::all().iter().copied().find(|c| c.label() == label)
    }
}

impl fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A community product listed in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub producer: String,
    pub category: ProductCategory,
    pub province: String,
    /// One-line teaser shown on cards and in the quick view.
    pub story: String,
    pub long_story: String,
    /// Display price exactly as merchandised, e.g. `"3,800 ฿"` or `"120 ฿ / กก."`.
    pub price: String,
    pub images: Vec<String>,
    pub rating: f64,
    pub review_count: u32,
}

impl Product {
    /// Numeric unit price parsed from the display string.
    pub fn unit_price(&self) -> Option<f64> {
        parse_price(&self.price)
    }

    pub fn primary_image(&self) -> &str {
        self.images.first().map(String::as_str).unwrap_or_default()
    }

    /// Case-insensitive substring match over name, story, category and province.
    pub fn matches_query(&self, query: &str) -> bool {
        let needle = query.to_lowercase();
        [
            self.name.as_str(),
            self.story.as_str(),
            self.category.label(),
            self.province.as_str(),
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
    }
}

#[cfg(test)]
pub(crate) fn sample_product(id: u32, category: ProductCategory, province: &str, price: &str) -> Product {
    Product {
        id: ProductId(id),
        name: format!("Product {id}"),
        producer: "Test Cooperative".into(),
        category,
        province: province.into(),
        story: format!("Story of product {id}"),
        long_story: String::new(),
        price: price.into(),
        images: vec![format!("https://img.example/{id}.jpg")],
        rating: 4.5,
        review_count: 10,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_serializes_as_thai_label() {
        let json = serde_json::to_string(&ProductCategory::Food).unwrap();
        assert_eq!(json, "\"อาหาร\"");
        let back: ProductCategory = serde_json::from_str("\"เครื่องประดับ\"").unwrap();
        assert_eq!(back, ProductCategory::Jewelry);
    }

    #[test]
    fn category_from_label_round_trips_every_variant() {
        for category in ProductCategory::all() {
            assert_eq!(ProductCategory::from_label(category.label()), Some(*category));
        }
        assert_eq!(ProductCategory::from_label("toys"), None);
    }

    #[test]
    fn query_matches_story_and_province_case_insensitively() {
        let mut p = sample_product(1, ProductCategory::Decor, "Yala", "950 ฿");
        p.story = "Carved BAMBOO root sculpture".into();
        assert!(p.matches_query("bamboo"));
        assert!(p.matches_query("yAlA"));
        assert!(p.matches_query("ของตกแต่ง"));
        assert!(!p.matches_query("silk"));
    }

    #[test]
    fn query_ignores_long_story_and_producer() {
        let mut p = sample_product(2, ProductCategory::Food, "Pattani", "80 ฿");
        p.long_story = "secret recipe".into();
        p.producer = "Grandma's kitchen".into();
        assert!(!p.matches_query("recipe"));
        assert!(!p.matches_query("grandma"));
    }
}
