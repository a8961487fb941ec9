//! Integration tests for the shopcart API server.
//!
//! Each test starts its own server on an ephemeral localhost port with a
//! fresh in-memory store and talks to it over real HTTP.
//!
//! ```bash
//! cargo test -p shopcart-integration-tests
//! ```

#![allow(clippy::unwrap_used, clippy::missing_panics_doc)]

use std::net::SocketAddr;

use reqwest::{Client, StatusCode};
use serde_json::{Value, json};

use shopcart_server::config::ServerConfig;
use shopcart_server::db::Store;
use shopcart_server::routes;
use shopcart_server::state::AppState;

/// A running server and a client pointed at it.
pub struct TestServer {
    pub client: Client,
    pub base_url: String,
    pub store: Store,
}

impl TestServer {
    /// Start a server with default configuration.
    pub async fn start() -> Self {
        Self::with_config(ServerConfig::default()).await
    }

    /// Start a server with the given configuration. Host and port are ignored.
    pub async fn with_config(config: ServerConfig) -> Self {
        let store = Store::new();
        let prefix = config.api_prefix.clone();
        let app = routes::app(AppState::new(config, store.clone()));

        let listener = tokio::net::TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
            .await
            .unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            client: Client::new(),
            base_url: format!("http://{addr}{prefix}"),
            store,
        }
    }

    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Send a request and decode the JSON response (`Null` for an empty body).
    pub async fn call(
        &self,
        method: reqwest::Method,
        path: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut request = self.client.request(method, self.url(path));
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request.send().await.unwrap();
        let status = response.status();
        let bytes = response.bytes().await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    /// Register a user and return the response.
    pub async fn register(&self, username: &str, password: &str) -> (StatusCode, Value) {
        self.call(
            reqwest::Method::POST,
            "/users",
            None,
            Some(json!({ "username": username, "password": password })),
        )
        .await
    }

    /// Log in and return the response.
    pub async fn login(&self, username: &str, password: &str) -> (StatusCode, Value) {
        self.call(
            reqwest::Method::POST,
            "/users/login",
            None,
            Some(json!({ "username": username, "password": password })),
        )
        .await
    }

    /// Register and log in, returning the bearer token.
    pub async fn signup(&self, username: &str) -> String {
        let (status, _) = self.register(username, "pw").await;
        assert_eq!(status, StatusCode::CREATED);
        let (status, body) = self.login(username, "pw").await;
        assert_eq!(status, StatusCode::OK);
        body["token"].as_str().unwrap().to_string()
    }
}
