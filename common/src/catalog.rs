use std::collections::{BTreeSet, HashSet};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::error::CatalogError;
use crate::product::{Product, ProductCategory, ProductId};

/// The storefront's compiled-in product list.
const CATALOG_JSON: &str = include_str!("../data/catalog.json");

/// Immutable, ordered product catalog.
///
/// Order matters: it is the "default" sort and the tie-break for every
/// other sort.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Validate and wrap a product list.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen.insert(product.id) {
                return Err(CatalogError::DuplicateId(product.id));
            }
            if product.images.is_empty() {
                return Err(CatalogError::MissingImages(product.id));
            }
            if !(0.0..=5.0).contains(&product.rating) {
                return Err(CatalogError::RatingOutOfRange {
                    id: product.id,
                    rating: product.rating,
                });
            }
        }
        Ok(Self { products })
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let products: Vec<Product> = serde_json::from_str(json).map_err(CatalogError::Parse)?;
        Self::new(products)
    }

    /// The catalog shipped with the storefront.
    pub fn builtin() -> Result<Self, CatalogError> {
        let catalog = Self::from_json(CATALOG_JSON)?;
        tracing::debug!(products = catalog.len(), "Loaded built-in catalog");
        Ok(catalog)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Distinct categories present in the catalog, sorted by label.
    pub fn categories(&self) -> Vec<ProductCategory> {
        let mut categories: Vec<ProductCategory> = self
            .products
            .iter()
            .map(|p| p.category)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        categories.sort_by(|a, b| a.label().cmp(b.label()));
        categories
    }

    /// Distinct provinces present in the catalog, sorted.
    pub fn provinces(&self) -> Vec<String> {
        self.products
            .iter()
            .map(|p| p.province.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Up to `limit` other products in the same category, catalog order.
    pub fn related(&self, product: &Product, limit: usize) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.category == product.category && p.id != product.id)
            .take(limit)
            .collect()
    }

    /// A shuffled pick of up to `limit` products for the home page.
    pub fn featured(&self, limit: usize, seed: u64) -> Vec<&Product> {
        let mut picks: Vec<&Product> = self.products.iter().collect();
        let mut rng = StdRng::seed_from_u64(seed);
        picks.shuffle(&mut rng);
        picks.truncate(limit);
        picks
    }
}
