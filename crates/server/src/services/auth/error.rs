//! Authentication error types.

use thiserror::Error;

use crate::db::RepositoryError;

/// Errors that can occur during authentication operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Invalid username format.
    #[error("invalid username: {0}")]
    InvalidUsername(#[from] shopcart_core::UsernameError),

    /// Password missing or blank.
    #[error("password cannot be empty")]
    MissingPassword,

    /// Login attempted with an empty username or password.
    #[error("username and password are required")]
    MissingCredentials,

    /// Invalid credentials (wrong password or unknown username).
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Username already registered.
    #[error("user already exists")]
    UserAlreadyExists,

    /// No bearer token was presented.
    #[error("missing token")]
    MissingToken,

    /// The bearer token does not belong to any user.
    #[error("invalid token")]
    InvalidToken,

    /// Store error.
    #[error("store error: {0}")]
    Repository(#[from] RepositoryError),

    /// Password hashing error.
    #[error("password hashing error")]
    PasswordHash,
}
