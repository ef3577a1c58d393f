//! Catalog product records.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Price, ProductId};

/// A product as supplied by the catalog provider.
///
/// Products are read-only reference data. The cart never holds a reference to
/// one; it copies the fields it needs into a [`CartEntry`](super::CartEntry)
/// at add time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique catalog key.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Current selling price.
    pub price: Price,
    /// Price before markdown, when the product is discounted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<Price>,
    /// Category label, e.g. `"Work Boots & Shoes"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Part of the sale & clearance promotion.
    #[serde(default)]
    pub on_sale: bool,
    /// Highlighted on the featured shelf.
    #[serde(default)]
    pub featured: bool,
    /// Units available, when the provider tracks stock.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock: Option<u32>,
    /// Offered colors, in display order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub colors: Vec<String>,
    /// Offered sizes, in display order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sizes: Vec<String>,
    /// Primary image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Average review rating out of five.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Product {
    /// Create a product with only the required fields set.
    #[must_use]
    pub fn new(id: ProductId, name: impl Into<String>, price: Price) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            original_price: None,
            category: None,
            on_sale: false,
            featured: false,
            stock: None,
            colors: Vec::new(),
            sizes: Vec::new(),
            image: None,
            rating: None,
            description: None,
        }
    }

    /// Set the category.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set the pre-markdown price.
    #[must_use]
    pub fn with_original_price(mut self, original_price: Price) -> Self {
        self.original_price = Some(original_price);
        self
    }

    /// Mark the product as on sale.
    #[must_use]
    pub fn on_sale(mut self) -> Self {
        self.on_sale = true;
        self
    }

    /// Mark the product as featured.
    #[must_use]
    pub fn featured(mut self) -> Self {
        self.featured = true;
        self
    }

    /// Set the tracked stock level.
    #[must_use]
    pub fn with_stock(mut self, stock: u32) -> Self {
        self.stock = Some(stock);
        self
    }

    /// Whether `color` is one of the offered colors.
    ///
    /// Products that list no colors accept any selection.
    #[must_use]
    pub fn offers_color(&self, color: &str) -> bool {
        self.colors.is_empty() || self.colors.iter().any(|c| c == color)
    }

    /// Whether `size` is one of the offered sizes.
    ///
    /// Products that list no sizes accept any selection.
    #[must_use]
    pub fn offers_size(&self, size: &str) -> bool {
        self.sizes.is_empty() || self.sizes.iter().any(|s| s == size)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_minimal_product() {
        let json = r#"{"id": 3, "name": "Steel Toe Boot", "price": "89.99"}"#;
        let product: Product = serde_json::from_str(json).unwrap();

        assert_eq!(product.id, ProductId::new(3));
        assert_eq!(product.price, Price::from_cents(8999));
        assert!(product.category.is_none());
        assert!(!product.on_sale);
        assert!(!product.featured);
        assert!(product.colors.is_empty());
    }

    #[test]
    fn test_deserialize_camel_case_fields() {
        let json = r#"{
            "id": 4,
            "name": "Moc Toe",
            "price": 120,
            "originalPrice": 150,
            "category": "Work Boots & Shoes",
            "onSale": true,
            "stock": 2,
            "sizes": ["9", "10"]
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();

        assert_eq!(product.original_price, Some(Price::from_cents(15000)));
        assert!(product.on_sale);
        assert_eq!(product.stock, Some(2));
        assert_eq!(product.sizes, vec!["9", "10"]);
    }

    #[test]
    fn test_offers_options() {
        let mut product = Product::new(ProductId::new(1), "Boot", Price::from_cents(100));
        assert!(product.offers_color("Brown"));

        product.colors = vec!["Black".to_string()];
        assert!(product.offers_color("Black"));
        assert!(!product.offers_color("Brown"));
        assert!(product.offers_size("11"));
    }
}
