//! Top-level error for callers that drive the whole storefront.

use crate::cart_actor::CartError;
use crate::catalog::CatalogError;
use crate::config::ConfigError;
use crate::order_actor::OrderError;
use crate::search::SearchError;
use crate::storage::StorageError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorefrontError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Cart(#[from] CartError),

    #[error(transparent)]
    Order(#[from] OrderError),

    #[error(transparent)]
    Search(#[from] SearchError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Actor task failed: {0}")]
    TaskFailed(String),
}
