//! Authentication service.
//!
//! Provides username/password registration and login, and the bearer token
//! guard in front of the cart and order endpoints.
//!
//! Passwords are stored as salted Argon2id hashes. Tokens are 256 random bits
//! from the thread-local CSPRNG, encoded as URL-safe base64. Hashing and
//! verification run outside the store lock.

mod error;

pub use error::AuthError;

use std::sync::LazyLock;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
};
use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};

use shopcart_core::Username;

use crate::db::users::UserRepository;
use crate::db::{RepositoryError, Store};
use crate::models::User;

/// Number of random bytes in a login token.
const TOKEN_BYTES: usize = 32;

/// Number of random bytes in a password salt.
const SALT_BYTES: usize = 16;

/// Hash checked against when the username is unknown.
static UNKNOWN_USER_HASH: LazyLock<Option<String>> =
    LazyLock::new(|| hash_password("unknown-user").ok());

/// Scheme prefix stripped from `Authorization` header values.
const BEARER_PREFIX: &str = "Bearer ";

/// Authentication service.
///
/// Handles user registration, login, and token resolution.
pub struct AuthService<'a> {
    users: UserRepository<'a>,
}

impl<'a> AuthService<'a> {
    /// Create a new authentication service.
    #[must_use]
    pub const fn new(store: &'a Store) -> Self {
        Self {
            users: UserRepository::new(store),
        }
    }

    /// Register a new user.
    ///
    /// No token is issued; the user must log in.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidUsername` if the username is empty.
    /// Returns `AuthError::MissingPassword` if the password is empty.
    /// Returns `AuthError::UserAlreadyExists` if the username is taken.
    pub fn register(&self, username: &str, password: &str) -> Result<User, AuthError> {
        let username = Username::parse(username)?;
        if password.is_empty() {
            return Err(AuthError::MissingPassword);
        }

        let password_hash = hash_password(password)?;

        let user = self
            .users
            .create(&username, password_hash)
            .map_err(|e| match e {
                RepositoryError::Conflict(_) => AuthError::UserAlreadyExists,
                other => AuthError::Repository(other),
            })?;

        tracing::info!(user_id = %user.id, username = %user.username, "User registered");
        Ok(user)
    }

    /// Login with username and password.
    ///
    /// Issues a fresh token and makes it the user's only valid token.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::MissingCredentials` if either field is empty.
    /// Returns `AuthError::InvalidCredentials` if the username is unknown or
    /// the password is wrong. No token is issued in either case.
    pub fn login(&self, username: &str, password: &str) -> Result<(User, String), AuthError> {
        if username.is_empty() || password.is_empty() {
            return Err(AuthError::MissingCredentials);
        }

        let Some((user, password_hash)) = self.users.get_password_hash(username) else {
            // Unknown names pay the same Argon2 cost as known ones
            if let Some(hash) = UNKNOWN_USER_HASH.as_deref() {
                let _ = verify_password(password, hash);
            }
            return Err(AuthError::InvalidCredentials);
        };

        verify_password(password, &password_hash)?;

        let token = generate_token();
        self.users.set_token(user.id, token.clone())?;

        tracing::info!(user_id = %user.id, "User logged in");
        Ok((user, token))
    }

    /// Resolve an `Authorization` header value to the user who owns the token.
    ///
    /// A leading `Bearer ` is stripped; any other value is used verbatim.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::MissingToken` if no token remains after stripping.
    /// Returns `AuthError::InvalidToken` if no user holds the token.
    pub fn authenticate(&self, header_value: &str) -> Result<User, AuthError> {
        let token = bearer_token(header_value);
        if token.is_empty() {
            return Err(AuthError::MissingToken);
        }

        self.users
            .get_by_token(token)
            .ok_or(AuthError::InvalidToken)
    }
}

/// Extract the token from an `Authorization` header value.
#[must_use]
pub fn bearer_token(header_value: &str) -> &str {
    header_value
        .strip_prefix(BEARER_PREFIX)
        .unwrap_or(header_value)
}

/// Generate an unpredictable login token.
fn generate_token() -> String {
    let bytes: [u8; TOKEN_BYTES] = rand::random();
    URL_SAFE_NO_PAD.encode(bytes)
}

/// Hash a password using Argon2id.
fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt_bytes: [u8; SALT_BYTES] = rand::random();
    let salt = SaltString::encode_b64(&salt_bytes).map_err(|_| AuthError::PasswordHash)?;
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| AuthError::PasswordHash)
}

/// Verify a password against a hash.
fn verify_password(password: &str, hash: &str) -> Result<(), AuthError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|_| AuthError::InvalidCredentials)?;
    let argon2 = Argon2::default();

    argon2
        .verify_password(password.as_bytes(), &parsed_hash)
        .map_err(|_| AuthError::InvalidCredentials)
}
