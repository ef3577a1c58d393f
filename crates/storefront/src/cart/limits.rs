//! Checks the presentation layer runs before mutating the cart.
//!
//! [`CartStore`](super::CartStore) accepts any quantity it is given. Stock
//! bounds and option validity are the caller's job, and both the HTTP routes
//! and the CLI go through these helpers before calling into the store.

use hobnail_core::{Product, Selection};
use thiserror::Error;

/// A requested cart change the shopper is not allowed to make.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LimitError {
    #[error("quantity must be at least 1")]
    ZeroQuantity,

    #[error("only {available} of {product} in stock")]
    OutOfStock { product: String, available: u32 },

    #[error("{product} is not offered in color {color}")]
    UnknownColor { product: String, color: String },

    #[error("{product} is not offered in size {size}")]
    UnknownSize { product: String, size: String },
}

/// Check adding `requested` units on top of `in_cart` already in the cart.
///
/// # Errors
///
/// Returns an error if `requested` is zero or the resulting quantity would
/// exceed the product's tracked stock.
pub fn check_add(product: &Product, in_cart: u32, requested: u32) -> Result<(), LimitError> {
    if requested == 0 {
        return Err(LimitError::ZeroQuantity);
    }
    check_stock(product, in_cart.saturating_add(requested))
}

/// Check replacing the cart quantity with `quantity`.
///
/// Zero is allowed; it removes the entry.
///
/// # Errors
///
/// Returns an error if `quantity` exceeds the product's tracked stock.
pub fn check_set_quantity(product: &Product, quantity: u32) -> Result<(), LimitError> {
    check_stock(product, quantity)
}

/// Check that the chosen color and size are offered.
///
/// # Errors
///
/// Returns an error naming the first option the product does not offer.
pub fn check_selection(product: &Product, selection: &Selection) -> Result<(), LimitError> {
    if let Some(color) = selection.color.as_deref()
        && !product.offers_color(color)
    {
        return Err(LimitError::UnknownColor {
            product: product.name.clone(),
            color: color.to_owned(),
        });
    }
    if let Some(size) = selection.size.as_deref()
        && !product.offers_size(size)
    {
        return Err(LimitError::UnknownSize {
            product: product.name.clone(),
            size: size.to_owned(),
        });
    }
    Ok(())
}

fn check_stock(product: &Product, resulting: u32) -> Result<(), LimitError> {
    match product.stock {
        Some(available) if resulting > available => Err(LimitError::OutOfStock {
            product: product.name.clone(),
            available,
        }),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use hobnail_core::{Price, ProductId};

    use super::*;

    fn boot() -> Product {
        let mut product = Product::new(ProductId::new(1), "Logger Boot", Price::from_cents(18999))
            .with_stock(3);
        product.colors = vec!["Brown".to_string(), "Black".to_string()];
        product.sizes = vec!["9".to_string(), "10".to_string()];
        product
    }

    #[test]
    fn test_check_add_within_stock() {
        assert_eq!(check_add(&boot(), 1, 2), Ok(()));
    }

    #[test]
    fn test_check_add_over_stock() {
        assert_eq!(
            check_add(&boot(), 2, 2),
            Err(LimitError::OutOfStock {
                product: "Logger Boot".to_string(),
                available: 3,
            })
        );
    }

    #[test]
    fn test_check_add_zero() {
        assert_eq!(check_add(&boot(), 0, 0), Err(LimitError::ZeroQuantity));
    }

    #[test]
    fn test_untracked_stock_is_unbounded() {
        let sock = Product::new(ProductId::new(2), "Sock", Price::from_cents(500));
        assert_eq!(check_add(&sock, u32::MAX, 1), Ok(()));
        assert_eq!(check_set_quantity(&sock, 1_000), Ok(()));
    }

    #[test]
    fn test_check_set_quantity() {
        assert_eq!(check_set_quantity(&boot(), 0), Ok(()));
        assert_eq!(check_set_quantity(&boot(), 3), Ok(()));
        assert!(check_set_quantity(&boot(), 4).is_err());
    }

    #[test]
    fn test_check_selection() {
        let boot = boot();
        assert_eq!(check_selection(&boot, &Selection::none()), Ok(()));
        assert_eq!(
            check_selection(&boot, &Selection::none().with_color("Black").with_size("10")),
            Ok(())
        );
        assert!(matches!(
            check_selection(&boot, &Selection::none().with_color("Green")),
            Err(LimitError::UnknownColor { .. })
        ));
        assert!(matches!(
            check_selection(&boot, &Selection::none().with_size("14")),
            Err(LimitError::UnknownSize { .. })
        ));
    }
}
