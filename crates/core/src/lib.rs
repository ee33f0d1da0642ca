//! icanmake3d Core - Catalog and cart library.
//!
//! This crate provides the in-memory state behind the icanmake3d storefront:
//! - `storefront` - JSON API consumed by the browsing UI
//! - `cli` - Command-line tools for inspecting and validating catalogs
//!
//! # Architecture
//!
//! The core crate performs no I/O. The catalog is immutable once built and
//! answers lookups through prebuilt indexes; a cart is an owned, observable
//! container scoped to a single browsing session.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs and prices
//! - [`catalog`] - Catalog items, categories, validation and queries
//! - [`cart`] - Session cart with synchronous change notifications

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod types;

pub use cart::{Cart, CartEntry, CartEntryView, CartEvent, CartSummary, CartView, SubscriptionId};
pub use catalog::{
    Catalog, CatalogData, CatalogError, CatalogItem, Category, Preview, SortOrder, TechDetails,
    UnknownSortOrder,
};
pub use types::*;
