//! Cart repository.
//!
//! Carts are created lazily by the first add and never deleted. The
//! user-to-cart index enforces the one-cart-per-user rule.

use chrono::Utc;

use shopcart_core::{CartId, CartLineId, ItemId, UserId};

use super::{RepositoryError, Store, Tables, next_id};
use crate::models::{Cart, CartLine};

/// Repository for carts and their lines.
pub struct CartRepository<'a> {
    store: &'a Store,
}

impl<'a> CartRepository<'a> {
    /// Create a new cart repository.
    #[must_use]
    pub const fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Get the user's cart, creating an empty one if they have none.
    #[must_use]
    pub fn find_or_create_for_user(&self, user_id: UserId) -> Cart {
        find_or_create(&mut self.store.write(), user_id)
    }

    /// Get the user's cart if one exists.
    #[must_use]
    pub fn find_for_user(&self, user_id: UserId) -> Option<Cart> {
        let tables = self.store.read();
        let cart_id = tables.cart_ids_by_user.get(&user_id)?;
        tables.carts.get(cart_id).cloned()
    }

    /// Append a line to an existing cart.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the cart does not exist.
    pub fn add_line(&self, cart_id: CartId, item_id: ItemId) -> Result<CartLine, RepositoryError> {
        let mut tables = self.store.write();
        if !tables.carts.contains_key(&cart_id) {
            return Err(RepositoryError::NotFound);
        }
        Ok(push_line(&mut tables, cart_id, item_id))
    }

    /// Find or create the user's cart and append a line, as one operation.
    ///
    /// With `require_known_item`, the item must exist in the catalog; the
    /// check and the insert happen under the same lock.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::InvalidReference` if `require_known_item` is
    /// set and the item does not exist. No cart is created in that case.
    pub fn add_item_for_user(
        &self,
        user_id: UserId,
        item_id: ItemId,
        require_known_item: bool,
    ) -> Result<(Cart, CartLine), RepositoryError> {
        let mut tables = self.store.write();

        if require_known_item && !tables.items.contains_key(&item_id) {
            return Err(RepositoryError::InvalidReference(format!(
                "item {item_id} does not exist"
            )));
        }

        let cart = find_or_create(&mut tables, user_id);
        let line = push_line(&mut tables, cart.id, item_id);
        Ok((cart, line))
    }

    /// Lines of a cart in the order they were added.
    #[must_use]
    pub fn list_lines(&self, cart_id: CartId) -> Vec<CartLine> {
        self.store.read().lines_of(cart_id)
    }

    /// The user's cart and its lines, read under one lock.
    #[must_use]
    pub fn find_with_lines_for_user(&self, user_id: UserId) -> Option<(Cart, Vec<CartLine>)> {
        let tables = self.store.read();
        let cart_id = tables.cart_ids_by_user.get(&user_id)?;
        let cart = tables.carts.get(cart_id)?.clone();
        let lines = tables.lines_of(cart.id);
        Some((cart, lines))
    }
}

fn find_or_create(tables: &mut Tables, user_id: UserId) -> Cart {
    if let Some(cart) = tables
        .cart_ids_by_user
        .get(&user_id)
        .and_then(|id| tables.carts.get(id))
    {
        return cart.clone();
    }

    let id = CartId::new(next_id(&mut tables.sequences.cart));
    let cart = Cart {
        id,
        user_id,
        created_at: Utc::now(),
    };
    tables.carts.insert(id, cart.clone());
    tables.cart_ids_by_user.insert(user_id, id);
    tracing::debug!(cart_id = %id, user_id = %user_id, "Cart created");

    cart
}

fn push_line(tables: &mut Tables, cart_id: CartId, item_id: ItemId) -> CartLine {
    let id = CartLineId::new(next_id(&mut tables.sequences.cart_line));
    let line = CartLine {
        id,
        cart_id,
        item_id,
    };
    tables.cart_lines.insert(id, line);
    tables.line_ids_by_cart.entry(cart_id).or_default().push(id);
    line
}
