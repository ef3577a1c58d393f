//! Type-safe price representation using decimal arithmetic.
//!
//! Prices are exact decimals in the store currency's standard unit (dollars,
//! not cents). They serialize as decimal strings so that no float rounding can
//! creep into a saved cart.

use core::fmt;
use core::iter::Sum;
use core::ops::Add;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An amount of money in the store currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// Zero dollars.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a price from a decimal amount.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Create a price from a whole number of cents.
    ///
    /// ```
    /// use hobnail_core::Price;
    ///
    /// assert_eq!(Price::from_cents(1999).to_string(), "$19.99");
    /// ```
    #[must_use]
    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, 2))
    }

    /// Get the underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Price of `quantity` units at this unit price.
    ///
    /// Saturates at the bounds of [`Decimal`] instead of overflowing.
    #[must_use]
    pub fn times(self, quantity: u32) -> Self {
        Self(self.0.saturating_mul(Decimal::from(quantity)))
    }

    /// Subtract `other`, flooring the result at zero.
    #[must_use]
    pub fn saturating_sub(self, other: Self) -> Self {
        if other.0 >= self.0 {
            Self::ZERO
        } else {
            Self(self.0.saturating_sub(other.0))
        }
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}

impl From<Decimal> for Price {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

/// Saturating, like [`Price::times`], so a cart total can never panic.
impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        assert_eq!(Price::from_cents(1000).amount(), Decimal::new(1000, 2));
        assert_eq!(Price::from_cents(5).amount(), Decimal::new(5, 2));
    }

    #[test]
    fn test_display_pads_cents() {
        assert_eq!(Price::from_cents(2000).to_string(), "$20.00");
        assert_eq!(Price::new(Decimal::new(5, 1)).to_string(), "$0.50");
    }

    #[test]
    fn test_times() {
        assert_eq!(Price::from_cents(1000).times(3), Price::from_cents(3000));
        assert_eq!(Price::from_cents(1999).times(0), Price::ZERO);
    }

    #[test]
    fn test_times_saturates_instead_of_overflowing() {
        let huge: Price = serde_json::from_str("\"50000000000000000000000000000\"").unwrap();
        assert_eq!(huge.times(2).amount(), Decimal::MAX);
        assert_eq!(huge.times(1), huge);
    }

    #[test]
    fn test_sum_saturates_instead_of_overflowing() {
        let max = Price::new(Decimal::MAX);
        let total: Price = [max, Price::from_cents(100), max].into_iter().sum();
        assert_eq!(total.amount(), Decimal::MAX);
    }

    #[test]
    fn test_saturating_sub_floors_at_zero() {
        let low = Price::from_cents(500);
        let high = Price::from_cents(800);
        assert_eq!(high.saturating_sub(low), Price::from_cents(300));
        assert_eq!(low.saturating_sub(high), Price::ZERO);
    }

    #[test]
    fn test_sum() {
        let total: Price = [Price::from_cents(150), Price::from_cents(250)]
            .into_iter()
            .sum();
        assert_eq!(total, Price::from_cents(400));
    }

    #[test]
    fn test_serde_as_decimal_string() {
        let json = serde_json::to_string(&Price::from_cents(1250)).unwrap();
        assert_eq!(json, "\"12.50\"");

        let parsed: Price = serde_json::from_str("\"12.50\"").unwrap();
        assert_eq!(parsed, Price::from_cents(1250));

        // Catalog files may carry plain JSON numbers.
        let parsed: Price = serde_json::from_str("12.5").unwrap();
        assert_eq!(parsed.amount(), Decimal::new(125, 1));
    }
}
