//! Cart line items.

use core::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use super::{Price, Product, ProductId};

/// Color and size chosen by the shopper when adding a product.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub color: Option<String>,
    pub size: Option<String>,
}

impl Selection {
    /// No color or size chosen.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            color: None,
            size: None,
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    #[must_use]
    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.size = Some(size.into());
        self
    }
}

/// One line item in the cart.
///
/// Product fields are copied when the entry is created, so a later catalog
/// price change never alters what the shopper already has in their cart. The
/// same record shape is written to the persisted slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartEntry {
    /// Catalog key of the captured product. At most one entry per id.
    #[serde(rename = "id")]
    pub product_id: ProductId,
    pub name: String,
    /// Unit price at the moment the product was added.
    pub price: Price,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<Price>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Always at least one; a saved record with zero fails to load.
    pub quantity: NonZeroU32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_size: Option<String>,
}

impl CartEntry {
    /// Capture `product` as a new line item.
    #[must_use]
    pub fn capture(product: &Product, quantity: NonZeroU32, selection: Selection) -> Self {
        Self {
            product_id: product.id,
            name: product.name.clone(),
            price: product.price,
            original_price: product.original_price,
            category: product.category.clone(),
            image: product.image.clone(),
            quantity,
            selected_color: selection.color,
            selected_size: selection.size,
        }
    }

    /// `price × quantity`.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.price.times(self.quantity.get())
    }

    /// `(original_price or price) × quantity`.
    #[must_use]
    pub fn original_line_total(&self) -> Price {
        self.original_price
            .unwrap_or(self.price)
            .times(self.quantity.get())
    }
}
