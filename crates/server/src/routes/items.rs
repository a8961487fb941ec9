//! Catalog routes.

use axum::{Json, extract::State, http::StatusCode};
use serde::Deserialize;
use tracing::instrument;

use shopcart_core::Price;

use crate::error::Result;
use crate::models::Item;
use crate::routes::ApiJson;
use crate::services::CatalogService;
use crate::state::AppState;

/// Body of `POST /items`.
///
/// A negative or non-numeric price is rejected while decoding.
#[derive(Debug, Deserialize)]
pub struct CreateItemRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: Price,
}

/// Add an item to the catalog.
///
/// POST /items
///
/// # Errors
///
/// 400 if the name is missing or blank or the price is missing or negative.
#[instrument(skip_all)]
pub async fn create(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CreateItemRequest>,
) -> Result<(StatusCode, Json<Item>)> {
    let item =
        CatalogService::new(state.store()).create_item(&req.name, req.description, req.price)?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// List the catalog.
///
/// GET /items
#[instrument(skip_all)]
pub async fn list(State(state): State<AppState>) -> Json<Vec<Item>> {
    Json(CatalogService::new(state.store()).list_items())
}
