//! Order routes. Both require a bearer token.

use axum::{Json, extract::State, http::StatusCode};
use serde::Deserialize;
use tracing::instrument;

use shopcart_core::CartId;

use crate::error::Result;
use crate::middleware::RequireUser;
use crate::models::Order;
use crate::routes::ApiJson;
use crate::services::OrderService;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub cart_id: CartId,
}

/// Place an order from one of the caller's carts.
///
/// POST /orders
///
/// The cart is left as is; it can be ordered again.
///
/// # Errors
///
/// 400 if `cartId` is missing or the cart is empty, 404 if the caller owns no
/// such cart, 401 without a valid token.
#[instrument(skip_all, fields(user_id = %user.id))]
pub async fn create(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
    ApiJson(req): ApiJson<CreateOrderRequest>,
) -> Result<(StatusCode, Json<Order>)> {
    let order = OrderService::new(state.store()).create(&user, req.cart_id)?;
    Ok((StatusCode::CREATED, Json(order)))
}

/// The caller's order history.
///
/// GET /orders
#[instrument(skip_all, fields(user_id = %user.id))]
pub async fn history(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
) -> Json<Vec<Order>> {
    Json(OrderService::new(state.store()).history(&user))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::http::{Method, StatusCode};
    use serde_json::{Value, json};

    use crate::routes::test_support::{login, send, test_app};

    async fn add(app: &axum::Router, token: &str, item_id: u64) -> Value {
        let (status, body) = send(
            app,
            Method::POST,
            "/carts",
            Some(token),
            Some(json!({ "itemId": item_id })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        body
    }

    #[tokio::test]
    async fn test_orders_require_token() {
        let (app, _) = test_app();

        let (status, _) = send(&app, Method::GET, "/orders", None, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let (status, _) = send(
            &app,
            Method::POST,
            "/orders",
            None,
            Some(json!({ "cartId": 1 })),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_create_order_copies_cart_lines() {
        let (app, _) = test_app();
        let token = login(&app, "alice").await;
        add(&app, &token, 3).await;
        add(&app, &token, 4).await;
        add(&app, &token, 3).await;

        let (status, order) = send(
            &app,
            Method::POST,
            "/orders",
            Some(&token),
            Some(json!({ "cartId": 1 })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(order["id"], 1);
        assert_eq!(order["userId"], 1);
        assert_eq!(order["cartId"], 1);
        assert!(order.get("createdAt").is_some());

        let items: Vec<u64> = order["orderItems"]
            .as_array()
            .unwrap()
            .iter()
            .map(|line| {
                assert_eq!(line["orderId"], 1);
                line["itemId"].as_u64().unwrap()
            })
            .collect();
        assert_eq!(items, [3, 4, 3]);

        let (status, history) = send(&app, Method::GET, "/orders", Some(&token), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(history, json!([order]));
    }

    #[tokio::test]
    async fn test_cannot_order_from_another_users_cart() {
        let (app, _) = test_app();
        let alice = login(&app, "alice").await;
        let bob = login(&app, "bob").await;
        add(&app, &alice, 1).await;

        let (status, body) = send(
            &app,
            Method::POST,
            "/orders",
            Some(&bob),
            Some(json!({ "cartId": 1 })),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "error": "Cart not found" }));

        let (_, history) = send(&app, Method::GET, "/orders", Some(&bob), None).await;
        assert_eq!(history, json!([]));
    }

    #[tokio::test]
    async fn test_missing_cart_id_is_bad_request() {
        let (app, _) = test_app();
        let token = login(&app, "alice").await;

        for body in [json!({}), json!({ "cartId": 0 })] {
            let (status, _) = send(&app, Method::POST, "/orders", Some(&token), Some(body)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
        }
    }

    #[tokio::test]
    async fn test_unknown_cart_is_not_found() {
        let (app, _) = test_app();
        let token = login(&app, "alice").await;

        let (status, _) = send(
            &app,
            Method::POST,
            "/orders",
            Some(&token),
            Some(json!({ "cartId": 42 })),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_history_is_per_user() {
        let (app, _) = test_app();
        let alice = login(&app, "alice").await;
        let bob = login(&app, "bob").await;
        let alice_cart = add(&app, &alice, 1).await["cartId"].clone();
        let bob_cart = add(&app, &bob, 2).await["cartId"].clone();

        for (token, cart_id) in [(&alice, &alice_cart), (&bob, &bob_cart), (&alice, &alice_cart)] {
            let body = json!({ "cartId": cart_id });
            let (status, _) = send(&app, Method::POST, "/orders", Some(token), Some(body)).await;
            assert_eq!(status, StatusCode::CREATED);
        }

        let (_, history) = send(&app, Method::GET, "/orders", Some(&alice), None).await;
        let ids: Vec<u64> = history
            .as_array()
            .unwrap()
            .iter()
            .map(|order| order["id"].as_u64().unwrap())
            .collect();
        assert_eq!(ids, [1, 3]);
    }
}
