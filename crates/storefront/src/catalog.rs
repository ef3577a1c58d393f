//! Catalog provider.
//!
//! The catalog is a static, ordered list of products loaded once at startup,
//! either from a JSON file or from the built-in demo catalog. It is read-only
//! afterwards and cheap to clone.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use hobnail_core::{Product, ProductId, Selector};
use thiserror::Error;
use tracing::info;

const DEMO_CATALOG: &str = include_str!("../data/demo_catalog.json");

/// Errors loading a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("product id {0} appears more than once in the catalog")]
    DuplicateId(ProductId),
}

/// The product catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Arc<Vec<Product>>,
}

impl Catalog {
    /// Build a catalog from products in display order.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::DuplicateId` if two products share an id.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(products.len());
        if let Some(duplicate) = products.iter().find(|p| !seen.insert(p.id)) {
            return Err(CatalogError::DuplicateId(duplicate.id));
        }

        Ok(Self {
            products: Arc::new(products),
        })
    }

    /// Load a catalog from a JSON array of products.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or contains
    /// duplicate ids.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::parse(&raw, path)?;
        info!(path = %path.display(), products = catalog.len(), "Catalog loaded");
        Ok(catalog)
    }

    /// The built-in demo catalog.
    ///
    /// # Errors
    ///
    /// Returns an error only if the bundled catalog is malformed.
    pub fn demo() -> Result<Self, CatalogError> {
        Self::parse(DEMO_CATALOG, Path::new("demo_catalog.json"))
    }

    /// Load from `path` when given, otherwise use the demo catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the chosen catalog cannot be loaded.
    pub fn load_or_demo(path: Option<&Path>) -> Result<Self, CatalogError> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let catalog = Self::demo()?;
                info!(products = catalog.len(), "Using demo catalog");
                Ok(catalog)
            }
        }
    }

    fn parse(raw: &str, path: &Path) -> Result<Self, CatalogError> {
        let products: Vec<Product> =
            serde_json::from_str(raw).map_err(|source| CatalogError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        Self::new(products)
    }

    /// All products in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Products matching `selector`, in catalog order.
    #[must_use]
    pub fn filter(&self, selector: &Selector) -> Vec<&Product> {
        selector.filter(&self.products)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use hobnail_core::Price;

    use super::*;

    fn ids(products: &[&Product]) -> Vec<i32> {
        products.iter().map(|p| p.id.as_i32()).collect()
    }

    #[test]
    fn test_demo_catalog_parses() {
        let catalog = Catalog::demo().unwrap();
        assert!(!catalog.is_empty());
        assert_eq!(
            catalog.get(ProductId::new(1)).unwrap().price,
            Price::from_cents(18999)
        );
    }

    #[test]
    fn test_demo_catalog_selectors() {
        let catalog = Catalog::demo().unwrap();
        assert_eq!(ids(&catalog.filter(&Selector::parse("Work Boots & Shoes"))), vec![1, 2, 3]);
        assert_eq!(ids(&catalog.filter(&Selector::parse("sale-clearance"))), vec![1, 3, 5, 8]);
        assert_eq!(ids(&catalog.filter(&Selector::parse("featured"))), vec![1, 2, 6, 11]);
        assert_eq!(ids(&catalog.filter(&Selector::parse("socks"))), vec![7, 8]);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let product = Product::new(ProductId::new(1), "Boot", Price::from_cents(100));
        let result = Catalog::new(vec![product.clone(), product]);
        assert!(matches!(result, Err(CatalogError::DuplicateId(id)) if id == ProductId::new(1)));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(
            &path,
            r#"[{"id": 7, "name": "Boot", "price": "10.00", "category": "Boots"}]"#,
        )
        .unwrap();

        let catalog = Catalog::load_or_demo(Some(&path)).unwrap();
        assert_eq!(catalog.len(), 1);
        assert!(catalog.get(ProductId::new(7)).is_some());
        assert!(catalog.get(ProductId::new(8)).is_none());
    }

    #[test]
    fn test_load_missing_file() {
        let result = Catalog::load(Path::new("/nonexistent/catalog.json"));
        assert!(matches!(result, Err(CatalogError::Io { .. })));
    }

    #[test]
    fn test_load_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(&path, "[{").unwrap();

        assert!(matches!(Catalog::load(&path), Err(CatalogError::Parse { .. })));
    }
}
