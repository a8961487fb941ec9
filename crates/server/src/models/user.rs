//! User domain types.

use chrono::{DateTime, Utc};
use serde::Serialize;

use shopcart_core::{UserId, Username};

/// A registered user.
///
/// The password hash and session token live only in the store and are never
/// part of this type, so they cannot leak through serialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user ID.
    pub id: UserId,
    /// Unique login name.
    pub username: Username,
    /// When the user registered.
    pub created_at: DateTime<Utc>,
}
