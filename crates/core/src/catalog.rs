//! Selector rules that narrow the product catalog.
//!
//! A selector is the category or promotion token from a listing URL, such as
//! `"Black Friday"` or `"work-boots-and-shoes"`. It is lower-cased once and
//! then matched against an ordered rule list; the first rule that recognizes
//! the token decides the predicate:
//!
//! | Order | Selector | Predicate |
//! |---|---|---|
//! | 1 | `sale & clearance`, `sale-clearance` | `on_sale` |
//! | 2 | `featured` | `featured` |
//! | 3 | `cyber days`, `cyber-days` | `on_sale` or `featured` |
//! | 4 | `black friday`, `black-friday` | `on_sale` |
//! | 5 | `work boots & shoes`, `work-boots-and-shoes` | category is exactly [`WORK_BOOTS_CATEGORY`] |
//! | 6 | anything else | category equals the selector, ignoring case |
//!
//! Rule 5 compares the product category case-sensitively even though the
//! selector itself is case-insensitive, so a product filed under
//! `"work boots & shoes"` is not listed by that promotion.

use core::convert::Infallible;
use core::fmt;
use core::str::FromStr;
use std::borrow::Cow;

use crate::types::Product;

/// Category literal the work boots promotion matches against.
pub const WORK_BOOTS_CATEGORY: &str = "Work Boots & Shoes";

/// A parsed category or promotion selector.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Selector {
    SaleClearance,
    Featured,
    CyberDays,
    BlackFriday,
    WorkBootsAndShoes,
    /// Any other token. `name` is lower-cased for matching; `label` keeps the
    /// text as given for display.
    Category { name: String, label: String },
}

impl Selector {
    /// Parse a selector, ignoring case.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let normalized = raw.to_lowercase();
        match normalized.as_str() {
            "sale & clearance" | "sale-clearance" => Self::SaleClearance,
            "featured" => Self::Featured,
            "cyber days" | "cyber-days" => Self::CyberDays,
            "black friday" | "black-friday" => Self::BlackFriday,
            "work boots & shoes" | "work-boots-and-shoes" => Self::WorkBootsAndShoes,
            _ => Self::Category {
                name: normalized,
                label: raw.to_owned(),
            },
        }
    }

    /// Whether `product` belongs in this selector's listing.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Self::SaleClearance | Self::BlackFriday => product.on_sale,
            Self::Featured => product.featured,
            Self::CyberDays => product.on_sale || product.featured,
            Self::WorkBootsAndShoes => product.category.as_deref() == Some(WORK_BOOTS_CATEGORY),
            Self::Category { name, .. } => product
                .category
                .as_deref()
                .is_some_and(|category| category.to_lowercase() == *name),
        }
    }

    /// The matching products, in catalog order.
    #[must_use]
    pub fn filter<'a>(&self, catalog: &'a [Product]) -> Vec<&'a Product> {
        catalog.iter().filter(|p| self.matches(p)).collect()
    }

    /// URL form, e.g. `black-friday`.
    #[must_use]
    pub fn slug(&self) -> Cow<'_, str> {
        match self {
            Self::SaleClearance => Cow::Borrowed("sale-clearance"),
            Self::Featured => Cow::Borrowed("featured"),
            Self::CyberDays => Cow::Borrowed("cyber-days"),
            Self::BlackFriday => Cow::Borrowed("black-friday"),
            Self::WorkBootsAndShoes => Cow::Borrowed("work-boots-and-shoes"),
            Self::Category { name, .. } => Cow::Owned(name.replace(' ', "-")),
        }
    }

    /// Heading for a listing page, e.g. `Black Friday`.
    #[must_use]
    pub fn title(&self) -> Cow<'_, str> {
        match self {
            Self::SaleClearance => Cow::Borrowed("Sale & Clearance"),
            Self::Featured => Cow::Borrowed("Featured"),
            Self::CyberDays => Cow::Borrowed("Cyber Days"),
            Self::BlackFriday => Cow::Borrowed("Black Friday"),
            Self::WorkBootsAndShoes => Cow::Borrowed(WORK_BOOTS_CATEGORY),
            Self::Category { label, .. } => Cow::Borrowed(label),
        }
    }
}

impl FromStr for Selector {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.slug())
    }
}

/// Products of `catalog` matching `selector`, in catalog order.
///
/// Unknown selectors fall through to the category rule and simply match
/// nothing when no category has that name.
#[must_use]
pub fn filter<'a>(selector: &str, catalog: &'a [Product]) -> Vec<&'a Product> {
    Selector::parse(selector).filter(catalog)
}
