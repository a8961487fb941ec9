//! Cart routes. Both require a bearer token.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use shopcart_core::{CartId, ItemId};

use crate::error::Result;
use crate::middleware::RequireUser;
use crate::models::CartLine;
use crate::routes::ApiJson;
use crate::services::CartService;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartRequest {
    pub item_id: ItemId,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartResponse {
    pub cart_id: CartId,
    pub item_id: ItemId,
}

/// The caller's cart. `cart_id` is 0 when no cart exists yet.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub cart_id: CartId,
    pub items: Vec<CartLine>,
}

/// Add an item to the caller's cart.
///
/// POST /carts
///
/// # Errors
///
/// 400 if `itemId` is missing or 0, 401 without a valid token.
#[instrument(skip_all, fields(user_id = %user.id))]
pub async fn add(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
    ApiJson(req): ApiJson<AddToCartRequest>,
) -> Result<Json<AddToCartResponse>> {
    let line = CartService::new(state.store(), state.config().require_known_items)
        .add_item(&user, req.item_id)?;

    Ok(Json(AddToCartResponse {
        cart_id: line.cart_id,
        item_id: line.item_id,
    }))
}

/// Show the caller's cart.
///
/// GET /carts
#[instrument(skip_all, fields(user_id = %user.id))]
pub async fn show(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
) -> Json<CartResponse> {
    let response = match CartService::new(state.store(), false).fetch(&user) {
        Some((cart, items)) => CartResponse {
            cart_id: cart.id,
            items,
        },
        None => CartResponse {
            cart_id: CartId::new(0),
            items: Vec::new(),
        },
    };

    Json(response)
}
