//! Totals derived from a cart snapshot.
//!
//! Every function here is a pure function of the entries it is given and is
//! recomputed on each call. Carts hold a handful of lines, so nothing is
//! cached.

use serde::Serialize;

use crate::types::{CartEntry, Price};

/// Sum of quantities over all entries.
#[must_use]
pub fn total_items(entries: &[CartEntry]) -> u64 {
    entries.iter().map(|e| u64::from(e.quantity.get())).sum()
}

/// Sum of `price × quantity`.
#[must_use]
pub fn total_price(entries: &[CartEntry]) -> Price {
    entries.iter().map(CartEntry::line_total).sum()
}

/// Sum of `(original_price or price) × quantity`.
#[must_use]
pub fn original_total_price(entries: &[CartEntry]) -> Price {
    entries.iter().map(CartEntry::original_line_total).sum()
}

/// `original_total_price - total_price`, never below zero.
#[must_use]
pub fn total_discount(entries: &[CartEntry]) -> Price {
    original_total_price(entries).saturating_sub(total_price(entries))
}

/// Whether the snapshot has no entries.
#[must_use]
pub const fn is_empty(entries: &[CartEntry]) -> bool {
    entries.is_empty()
}

/// All aggregates for one snapshot, computed together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    pub total_items: u64,
    pub total_price: Price,
    pub original_total_price: Price,
    pub total_discount: Price,
    pub is_empty: bool,
}

impl CartTotals {
    /// Compute every aggregate for `entries`.
    #[must_use]
    pub fn from_entries(entries: &[CartEntry]) -> Self {
        let total_price = total_price(entries);
        let original_total_price = original_total_price(entries);
        Self {
            total_items: total_items(entries),
            total_price,
            original_total_price,
            total_discount: original_total_price.saturating_sub(total_price),
            is_empty: entries.is_empty(),
        }
    }
}
