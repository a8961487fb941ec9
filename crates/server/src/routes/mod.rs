//! HTTP route handlers.
//!
//! # Route Structure
//!
//! Every route is mounted under `SHOPCART_API_PREFIX` (empty by default).
//!
//! ```text
//! GET  /health                 - Health check
//!
//! # Users
//! POST /users                  - Register
//! GET  /users                  - List users
//! POST /users/login            - Login, returns a bearer token
//!
//! # Catalog
//! POST /items                  - Create item
//! GET  /items                  - List items
//!
//! # Cart (requires bearer token)
//! POST /carts                  - Add item to the caller's cart
//! GET  /carts                  - Show the caller's cart
//!
//! # Orders (requires bearer token)
//! POST /orders                 - Place an order from a cart
//! GET  /orders                 - The caller's order history
//! ```

pub mod carts;
pub mod health;
pub mod items;
pub mod json;
pub mod orders;
pub mod users;

use axum::{
    Router,
    body::Body,
    http::Request,
    middleware,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::middleware::{cors_middleware, request_id_middleware};
use crate::state::AppState;

pub use json::ApiJson;

/// Create the user routes router.
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(users::register).get(users::list))
        .route("/login", post(users::login))
}

/// Create the catalog routes router.
pub fn item_routes() -> Router<AppState> {
    Router::new().route("/", post(items::create).get(items::list))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new().route("/", post(carts::add).get(carts::show))
}

/// Create the order routes router.
pub fn order_routes() -> Router<AppState> {
    Router::new().route("/", post(orders::create).get(orders::history))
}

/// Create all API routes, unprefixed.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        .nest("/users", user_routes())
        .nest("/items", item_routes())
        .nest("/carts", cart_routes())
        .nest("/orders", order_routes())
}

/// Build the complete application: routes under the configured prefix,
/// middleware, and state.
pub fn app(state: AppState) -> Router {
    let prefix = state.config().api_prefix.clone();
    let api = if prefix.is_empty() {
        routes()
    } else {
        Router::new().nest(&prefix, routes())
    };

    api.layer(middleware::from_fn(cors_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "request",
                method = %request.method(),
                uri = %request.uri(),
                request_id = tracing::field::Empty,
            )
        }))
        .with_state(state)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
pub(crate) mod test_support {
    //! Helpers for driving the router in unit tests.

    use axum::{
        Router,
        body::Body,
        http::{Method, Request, StatusCode, header},
    };
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::config::ServerConfig;
    use crate::db::Store;
    use crate::state::AppState;

    pub fn test_app() -> (Router, Store) {
        let store = Store::new();
        let app = super::app(AppState::new(ServerConfig::default(), store.clone()));
        (app, store)
    }

    pub async fn send(
        app: &Router,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    /// Register and log in, returning the bearer token.
    pub async fn login(app: &Router, username: &str) -> String {
        let creds = serde_json::json!({ "username": username, "password": "pw" });
        let (status, _) = send(app, Method::POST, "/users", None, Some(creds.clone())).await;
        assert_eq!(status, StatusCode::CREATED);
        let (status, body) = send(app, Method::POST, "/users/login", None, Some(creds)).await;
        assert_eq!(status, StatusCode::OK);
        body["token"].as_str().unwrap().to_string()
    }
}
