//! Category route handlers.

use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::models::{CategoryCard, CategoryPage};
use crate::state::AppState;

/// List categories with their item counts.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Response {
    let cards: Vec<CategoryCard<'_>> = state
        .catalog()
        .category_counts()
        .into_iter()
        .map(|(category, item_count)| CategoryCard {
            category,
            item_count,
        })
        .collect();

    Json(cards).into_response()
}

/// Show a category and its items.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>, Path(id): Path<String>) -> Result<Response> {
    let catalog = state.catalog();
    let category = catalog
        .find_category(&id)
        .ok_or_else(|| AppError::NotFound(format!("category {id}")))?;

    let page = CategoryPage {
        category,
        items: catalog.list_by_category(&id),
    };

    Ok(Json(page).into_response())
}
