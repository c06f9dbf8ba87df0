use thiserror::Error;

use crate::product::ProductId;

#[derive(Debug, Error)]
pub enum Error {
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("unknown product {0}")]
    UnknownProduct(ProductId),

    #[error("cart quantity must be at least 1")]
    ZeroQuantity,

    #[error("configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Reasons an embedded or supplied catalog document is rejected.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("malformed catalog JSON: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("duplicate product id {0}")]
    DuplicateId(ProductId),

    #[error("product {0} has no images")]
    MissingImages(ProductId),

    #[error("product {id} has rating {rating} outside 0-5")]
    RatingOutOfRange { id: ProductId, rating: f64 },
}

pub type Result<T> = std::result::Result<T, Error>;
