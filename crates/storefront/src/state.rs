//! Application state shared across handlers.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::cart::CartStore;
use crate::catalog::Catalog;
use crate::error::AppError;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc`. The cart store sits behind a
/// mutex so that exactly one request mutates it at a time.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    catalog: Catalog,
    cart: Mutex<CartStore>,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Arguments
    ///
    /// * `catalog` - Product catalog
    /// * `cart` - The cart store, already opened over its slot
    #[must_use]
    pub fn new(catalog: Catalog, cart: CartStore) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                catalog,
                cart: Mutex::new(cart),
            }),
        }
    }

    /// Get a reference to the product catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    /// Lock the cart store for reading or a single mutation.
    ///
    /// Do not hold the guard across an `.await`.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Internal` if a previous holder panicked.
    pub fn cart(&self) -> Result<MutexGuard<'_, CartStore>, AppError> {
        self.inner
            .cart
            .lock()
            .map_err(|_| AppError::Internal("cart lock poisoned".to_string()))
    }
}
