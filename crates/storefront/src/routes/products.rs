//! Product route handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
};
use icanmake3d_core::SortOrder;
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::models::{Listing, ProductPage};
use crate::routes::cart;
use crate::state::AppState;

/// Number of related items shown on a product page.
const RELATED_LIMIT: usize = 3;

/// Store listing query parameters.
#[derive(Debug, Deserialize)]
pub struct ListingQuery {
    pub category: Option<String>,
    pub sort: Option<String>,
}

/// Display the store listing, optionally filtered and sorted.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<ListingQuery>,
) -> Result<Response> {
    let sort = query
        .sort
        .as_deref()
        .filter(|sort| !sort.is_empty())
        .map(str::parse::<SortOrder>)
        .transpose()
        .map_err(|e| AppError::BadRequest(e.to_string()))?
        .unwrap_or_default();
    let category = query.category.as_deref().filter(|id| !id.is_empty());

    let listing = Listing {
        category,
        sort: sort.as_str(),
        items: state.catalog().browse(category, sort),
    };

    Ok(Json(listing).into_response())
}

/// List featured items.
#[instrument(skip(state))]
pub async fn featured(State(state): State<AppState>) -> Response {
    Json(state.catalog().list_featured()).into_response()
}

/// List items flagged as new.
#[instrument(skip(state))]
pub async fn new_arrivals(State(state): State<AppState>) -> Response {
    Json(state.catalog().list_new()).into_response()
}

/// Display product page data.
#[instrument(skip(state, session))]
pub async fn show(
    State(state): State<AppState>,
    session: Session,
    Path(slug): Path<String>,
) -> Result<Response> {
    let catalog = state.catalog();
    let product = catalog
        .find_by_slug(&slug)
        .ok_or_else(|| AppError::NotFound(format!("product {slug}")))?;

    let in_cart = cart::contains_item(&state, &session, product.id.as_str()).await?;

    let page = ProductPage {
        product,
        preview: product.preview(),
        related: catalog.related(product, RELATED_LIMIT),
        in_cart,
    };

    Ok(Json(page).into_response())
}
