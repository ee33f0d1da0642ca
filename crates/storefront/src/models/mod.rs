//! Response models for the storefront JSON API.
//!
//! Catalog types serialize directly; these wrappers add the page-level data
//! a view needs alongside them.

pub mod session;

use icanmake3d_core::{CartSummary, CatalogItem, Category, Preview};
use serde::Serialize;

pub use session::keys as session_keys;

/// A category card on the category browser.
#[derive(Debug, Serialize)]
pub struct CategoryCard<'a> {
    #[serde(flatten)]
    pub category: &'a Category,
    pub item_count: usize,
}

/// A category page: the category and everything filed under it.
#[derive(Debug, Serialize)]
pub struct CategoryPage<'a> {
    pub category: &'a Category,
    pub items: Vec<&'a CatalogItem>,
}

/// A store listing page.
#[derive(Debug, Serialize)]
pub struct Listing<'a> {
    pub category: Option<&'a str>,
    pub sort: &'static str,
    pub items: Vec<&'a CatalogItem>,
}

/// A product page.
#[derive(Debug, Serialize)]
pub struct ProductPage<'a> {
    pub product: &'a CatalogItem,
    pub preview: Preview<'a>,
    pub related: Vec<&'a CatalogItem>,
    pub in_cart: bool,
}

/// Cart badge counter.
#[derive(Debug, Serialize)]
pub struct CartCount {
    pub count: usize,
}

/// Membership check for an "Add to cart" / "In cart" button.
#[derive(Debug, Serialize)]
pub struct InCart {
    pub in_cart: bool,
}

/// Result of a cart mutation.
#[derive(Debug, Serialize)]
pub struct CartUpdate {
    /// Whether the mutation changed the cart.
    pub changed: bool,
    #[serde(flatten)]
    pub summary: CartSummary,
}
