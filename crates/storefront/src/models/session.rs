//! Session-related types.
//!
//! The session holds only a pointer to server-side state; the cart itself
//! lives in the [`CartRegistry`](crate::carts::CartRegistry).

/// Session keys for storefront data.
pub mod keys {
    /// Key for storing the shopper's cart ID.
    pub const CART_ID: &str = "cart_id";
}
