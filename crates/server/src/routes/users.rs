//! User registration and login routes.

use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use shopcart_core::{UserId, Username};

use crate::error::Result;
use crate::models::User;
use crate::routes::ApiJson;
use crate::services::AuthService;
use crate::state::AppState;

/// Registration and login request body.
#[derive(Deserialize)]
pub struct CredentialsRequest {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for CredentialsRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialsRequest")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Response to a successful registration.
#[derive(Debug, Serialize)]
pub struct RegisteredUser {
    pub id: UserId,
    pub username: Username,
}

/// Response to a successful login.
#[derive(Serialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Register a new user.
///
/// POST /users
///
/// # Errors
///
/// 400 for a missing or blank username/password, 409 if the username is taken.
#[instrument(skip_all)]
pub async fn register(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CredentialsRequest>,
) -> Result<(StatusCode, Json<RegisteredUser>)> {
    let user = AuthService::new(state.store()).register(&req.username, &req.password)?;

    Ok((
        StatusCode::CREATED,
        Json(RegisteredUser {
            id: user.id,
            username: user.username,
        }),
    ))
}

/// List all users in registration order.
///
/// GET /users
#[instrument(skip_all)]
pub async fn list(State(state): State<AppState>) -> Json<Vec<User>> {
    Json(state.store().users().list())
}

/// Log in and receive a bearer token.
///
/// POST /users/login
///
/// # Errors
///
/// 400 for a malformed body or an empty username/password, 401 for an
/// unknown username or wrong password.
#[instrument(skip_all)]
pub async fn login(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CredentialsRequest>,
) -> Result<Json<LoginResponse>> {
    let (_, token) = AuthService::new(state.store()).login(&req.username, &req.password)?;

    Ok(Json(LoginResponse { token }))
}
