//! Hobnail Core - cart and catalog engine without I/O.
//!
//! This crate provides the types and pure algorithms shared by every Hobnail
//! component:
//! - `storefront` - cart store, persistence and the JSON HTTP surface
//! - `cli` - command-line access to the same cart and catalog
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no file access, no
//! HTTP, no global state. Anything that touches a device or a socket lives in
//! the storefront crate.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, prices, products and cart entries
//! - [`aggregate`] - Totals derived from a cart snapshot
//! - [`catalog`] - Selector rules that narrow the product catalog

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod aggregate;
pub mod catalog;
pub mod types;

pub use aggregate::CartTotals;
pub use catalog::Selector;
pub use types::*;
