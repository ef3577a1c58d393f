//! CLI command implementations.
//!
//! Commands return the lines to display; `main` writes them through tracing.

pub mod cart;
pub mod catalog;

use hobnail_core::ProductId;
use hobnail_storefront::cart::LimitError;
use hobnail_storefront::catalog::CatalogError;
use hobnail_storefront::config::ConfigError;
use thiserror::Error;

/// Errors a command can fail with.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Limit(#[from] LimitError),

    #[error("product {0} is not in the catalog")]
    UnknownProduct(ProductId),

    #[error("product {0} is not in the cart")]
    NotInCart(ProductId),
}
