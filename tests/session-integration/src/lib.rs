use std::sync::Arc;

use phumpanya_common::catalog::Catalog;
use phumpanya_common::config::StoreConfig;
use phumpanya_common::product::{Product, ProductCategory, ProductId};
use phumpanya_common::session::{Action, Session};

pub mod harness;

/// Seed used for every featured shuffle in these tests.
pub const TEST_SEED: u64 = 20;

/// The catalog shipped with the storefront.
pub fn builtin_catalog() -> Arc<Catalog> {
    Arc::new(Catalog::builtin().unwrap_or_else(|e| panic!("built-in catalog rejected: {e}")))
}

/// Default config with a fixed featured seed.
pub fn test_config() -> StoreConfig {
    StoreConfig {
        featured_seed: Some(TEST_SEED),
        ..Default::default()
    }
}

/// A session over the built-in catalog.
pub fn make_session() -> Session {
    Session::new(builtin_catalog(), test_config())
}

/// Create a dummy product with the fields the filter and cart look at.
pub fn make_dummy_product(id: u32, category: ProductCategory, province: &str, price: &str) -> Product {
    Product {
        id: ProductId(id),
        name: format!("สินค้า {id}"),
        producer: "กลุ่มทดสอบ".to_string(),
        category,
        province: province.to_string(),
        story: format!("เรื่องสั้นของสินค้า {id}"),
        long_story: format!("เรื่องยาวของสินค้า {id}"),
        price: price.to_string(),
        images: vec![format!("https://example.test/{id}.jpg")],
        rating: 4.5,
        review_count: 10,
    }
}

/// A small catalog built from dummy products.
pub fn make_catalog(products: Vec<Product>) -> Arc<Catalog> {
    Arc::new(Catalog::new(products).unwrap_or_else(|e| panic!("dummy catalog rejected: {e}")))
}

/// Parse a JSON action script, as accepted by the shell's `--script`.
pub fn parse_script(json: &str) -> Vec<Action> {
    serde_json::from_str(json).unwrap_or_else(|e| panic!("bad action script: {e}"))
}

/// Ids of a product list, in order.
pub fn ids<'a>(products: impl IntoIterator<Item = &'a Product>) -> Vec<u32> {
    products.into_iter().map(|p| p.id.0).collect()
}
