//! Integration tests for Hobnail.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p hobnail-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_persistence` - Cart survival across restarts on a real data directory
//! - `catalog_filter` - Selector rules against the bundled demo catalog
//!
//! The helpers below build fixtures shared by both suites.

use std::path::Path;

use hobnail_core::{Price, Product, ProductId};
use hobnail_storefront::cart::{CartStore, FileSlot};

/// Open a cart store over the file slot in `dir`, as the storefront does at
/// startup.
#[must_use]
pub fn open_store(dir: &Path) -> CartStore {
    CartStore::open(FileSlot::in_dir(dir))
}

/// A product with only an id, a price in cents and a category.
#[must_use]
pub fn product(id: i32, cents: i64, category: &str) -> Product {
    Product::new(ProductId::new(id), format!("Product {id}"), Price::from_cents(cents))
        .with_category(category)
}
