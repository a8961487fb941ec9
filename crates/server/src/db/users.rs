//! User repository.
//!
//! Holds accounts, password hashes, and the token index used by the auth guard.

use chrono::Utc;

use shopcart_core::{UserId, Username};

use super::{RepositoryError, Store, UserRecord, next_id};
use crate::models::User;

/// Repository for user operations.
pub struct UserRepository<'a> {
    store: &'a Store,
}

impl<'a> UserRepository<'a> {
    /// Create a new user repository.
    #[must_use]
    pub const fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Create a user with an already-hashed password.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the username is taken.
    pub fn create(&self, username: &Username, password_hash: String) -> Result<User, RepositoryError> {
        let mut tables = self.store.write();

        if tables.user_ids_by_username.contains_key(username.as_str()) {
            return Err(RepositoryError::Conflict(format!(
                "username `{username}` already exists"
            )));
        }

        let id = UserId::new(next_id(&mut tables.sequences.user));
        let user = User {
            id,
            username: username.clone(),
            created_at: Utc::now(),
        };

        tables
            .user_ids_by_username
            .insert(username.as_str().to_owned(), id);
        tables.users.insert(
            id,
            UserRecord {
                user: user.clone(),
                password_hash,
                token: None,
            },
        );

        Ok(user)
    }

    /// Get a user by username.
    #[must_use]
    pub fn get_by_username(&self, username: &str) -> Option<User> {
        let tables = self.store.read();
        let id = tables.user_ids_by_username.get(username)?;
        tables.users.get(id).map(|record| record.user.clone())
    }

    /// Get a user together with their stored password hash.
    #[must_use]
    pub fn get_password_hash(&self, username: &str) -> Option<(User, String)> {
        let tables = self.store.read();
        let id = tables.user_ids_by_username.get(username)?;
        tables
            .users
            .get(id)
            .map(|record| (record.user.clone(), record.password_hash.clone()))
    }

    /// Resolve a login token to its user.
    #[must_use]
    pub fn get_by_token(&self, token: &str) -> Option<User> {
        let tables = self.store.read();
        let id = tables.user_ids_by_token.get(token)?;
        tables.users.get(id).map(|record| record.user.clone())
    }

    /// Replace a user's login token.
    ///
    /// The previous token, if any, is removed from the token index and stops
    /// resolving immediately.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the user does not exist.
    /// Returns `RepositoryError::Conflict` if the token belongs to another user.
    pub fn set_token(&self, user_id: UserId, token: String) -> Result<(), RepositoryError> {
        let mut tables = self.store.write();

        if !tables.users.contains_key(&user_id) {
            return Err(RepositoryError::NotFound);
        }
        if tables
            .user_ids_by_token
            .get(&token)
            .is_some_and(|owner| *owner != user_id)
        {
            return Err(RepositoryError::Conflict("token already issued".to_string()));
        }

        let previous = tables
            .users
            .get_mut(&user_id)
            .and_then(|record| record.token.replace(token.clone()));
        if let Some(previous) = previous {
            tables.user_ids_by_token.remove(&previous);
        }
        tables.user_ids_by_token.insert(token, user_id);

        Ok(())
    }

    /// List all users in registration order.
    #[must_use]
    pub fn list(&self) -> Vec<User> {
        self.store
            .read()
            .users
            .values()
            .map(|record| record.user.clone())
            .collect()
    }
}
