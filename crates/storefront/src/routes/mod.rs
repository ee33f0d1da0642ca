//! HTTP route handlers for storefront.
//!
//! Every route returns JSON for the browsing UI. Lookups that find nothing
//! answer 404 with an `{"error": ...}` body so the view can render its
//! "not found" state; listings that match nothing answer 200 with an empty
//! array.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                         - Health check
//!
//! # Catalog
//! GET  /api/products                   - Store listing (?category=&sort=)
//! GET  /api/products/featured          - Featured items
//! GET  /api/products/new               - New items
//! GET  /api/products/{slug}            - Product page data
//! GET  /api/categories                 - Categories with item counts
//! GET  /api/categories/{id}            - Category page data
//!
//! # Cart (session-scoped)
//! GET  /api/cart                       - Cart contents and totals
//! GET  /api/cart/count                 - Cart badge count
//! GET  /api/cart/contains/{item_id}    - Whether an item is in the cart
//! POST /api/cart/add                   - Add item ({"item_id"})
//! POST /api/cart/remove                - Remove item ({"item_id"})
//! POST /api/cart/clear                 - Empty the cart
//! ```

pub mod cart;
pub mod categories;
pub mod products;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index))
        .route("/featured", get(products::featured))
        .route("/new", get(products::new_arrivals))
        .route("/{slug}", get(products::show))
}

/// Create the category routes router.
pub fn category_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(categories::index))
        .route("/{id}", get(categories::show))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/count", get(cart::count))
        .route("/contains/{item_id}", get(cart::contains))
        .route("/add", post(cart::add))
        .route("/remove", post(cart::remove))
        .route("/clear", post(cart::clear))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/api/products", product_routes())
        .nest("/api/categories", category_routes())
        .nest("/api/cart", cart_routes())
}
