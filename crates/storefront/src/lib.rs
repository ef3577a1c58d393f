//! Hobnail Storefront library.
//!
//! This crate provides the cart store, its persistence, the catalog provider
//! and the JSON storefront as a library, allowing them to be tested and
//! reused by the CLI.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod routes;
pub mod state;
