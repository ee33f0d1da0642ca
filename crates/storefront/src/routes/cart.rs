//! Cart route handlers.
//!
//! Cart IDs are stored in the session and map to carts held in the
//! [`CartRegistry`](crate::carts::CartRegistry). Read-only routes never
//! create a cart; the first successful add does.

use axum::{
    Json,
    extract::{Path, State},
};
use icanmake3d_core::{Cart, CartId, CartSummary, CartView};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::carts::SharedCart;
use crate::error::{AppError, Result, add_breadcrumb};
use crate::models::{CartCount, CartUpdate, InCart, session_keys};
use crate::state::AppState;

/// Add/remove request body.
#[derive(Debug, Deserialize)]
pub struct CartItemForm {
    pub item_id: String,
}

// =============================================================================
// Session Helpers
// =============================================================================

/// Get the cart ID from the session.
async fn get_cart_id(session: &Session) -> Result<Option<CartId>> {
    Ok(session.get::<CartId>(session_keys::CART_ID).await?)
}

/// Get the session's cart, creating it (and its session entry) if needed.
async fn session_cart(state: &AppState, session: &Session) -> Result<SharedCart> {
    let cart_id = if let Some(cart_id) = get_cart_id(session).await? {
        cart_id
    } else {
        let cart_id = CartId::new();
        session.insert(session_keys::CART_ID, cart_id).await?;
        tracing::debug!(%cart_id, "Created cart");
        cart_id
    };

    Ok(state.carts().get_or_create(cart_id).await)
}

/// Get the session's cart if it has one.
async fn existing_cart(state: &AppState, session: &Session) -> Result<Option<SharedCart>> {
    match get_cart_id(session).await? {
        Some(cart_id) => Ok(state.carts().get(cart_id).await),
        None => Ok(None),
    }
}

/// Whether the session's cart holds `item_id`.
pub(crate) async fn contains_item(
    state: &AppState,
    session: &Session,
    item_id: &str,
) -> Result<bool> {
    Ok(match existing_cart(state, session).await? {
        Some(cart) => cart.lock().await.contains(item_id),
        None => false,
    })
}

/// Apply `mutation` to the session's existing cart, if any.
async fn mutate_existing(
    state: &AppState,
    session: &Session,
    mutation: impl FnOnce(&mut Cart) -> bool,
) -> Result<CartUpdate> {
    let Some(cart) = existing_cart(state, session).await? else {
        return Ok(CartUpdate {
            changed: false,
            summary: empty_summary(),
        });
    };

    let mut cart = cart.lock().await;
    let changed = mutation(&mut cart);
    Ok(CartUpdate {
        changed,
        summary: cart.summary(),
    })
}

// =============================================================================
// Handlers
// =============================================================================

/// Display cart contents.
#[instrument(skip(state, session))]
pub async fn show(State(state): State<AppState>, session: Session) -> Result<Json<CartView>> {
    let view = match existing_cart(&state, &session).await? {
        Some(cart) => cart.lock().await.view(),
        None => CartView::empty(),
    };

    Ok(Json(view))
}

/// Get cart count badge.
#[instrument(skip(state, session))]
pub async fn count(State(state): State<AppState>, session: Session) -> Result<Json<CartCount>> {
    let count = match existing_cart(&state, &session).await? {
        Some(cart) => cart.lock().await.total_items(),
        None => 0,
    };

    Ok(Json(CartCount { count }))
}

/// Check whether an item is in the cart.
#[instrument(skip(state, session))]
pub async fn contains(
    State(state): State<AppState>,
    session: Session,
    Path(item_id): Path<String>,
) -> Result<Json<InCart>> {
    let in_cart = contains_item(&state, &session, &item_id).await?;
    Ok(Json(InCart { in_cart }))
}

/// Add an item to the cart.
///
/// Adding an item that is already in the cart succeeds with
/// `"changed": false`.
#[instrument(skip(state, session))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    Json(form): Json<CartItemForm>,
) -> Result<Json<CartUpdate>> {
    let item = state
        .catalog()
        .shared(&form.item_id)
        .ok_or_else(|| AppError::NotFound(format!("product {}", form.item_id)))?;

    let cart = session_cart(&state, &session).await?;
    let mut cart = cart.lock().await;
    let changed = cart.add(item);

    add_breadcrumb(
        "cart",
        "Added to cart",
        Some(&[("item_id", form.item_id.as_str())]),
    );

    Ok(Json(CartUpdate {
        changed,
        summary: cart.summary(),
    }))
}

/// Remove an item from the cart. Removing an absent item is not an error.
#[instrument(skip(state, session))]
pub async fn remove(
    State(state): State<AppState>,
    session: Session,
    Json(form): Json<CartItemForm>,
) -> Result<Json<CartUpdate>> {
    let update = mutate_existing(&state, &session, |cart| cart.remove(&form.item_id)).await?;
    Ok(Json(update))
}

/// Empty the cart.
#[instrument(skip(state, session))]
pub async fn clear(State(state): State<AppState>, session: Session) -> Result<Json<CartUpdate>> {
    let update = mutate_existing(&state, &session, |cart| {
        let changed = !cart.is_empty();
        cart.clear();
        changed
    })
    .await?;

    Ok(Json(update))
}

/// Summary of an empty cart, for sessions that have no cart yet.
fn empty_summary() -> CartSummary {
    Cart::new().summary()
}
