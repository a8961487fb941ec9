//! Cart service.
//!
//! Operates only on the authenticated caller's cart.

use shopcart_core::ItemId;

use crate::db::carts::CartRepository;
use crate::db::Store;
use crate::error::{AppError, Result};
use crate::models::{Cart, CartLine, User};

/// Adding to and reading the caller's cart.
pub struct CartService<'a> {
    carts: CartRepository<'a>,
    require_known_items: bool,
}

impl<'a> CartService<'a> {
    /// Create a cart service.
    ///
    /// With `require_known_items`, adds must reference an existing catalog item.
    #[must_use]
    pub const fn new(store: &'a Store, require_known_items: bool) -> Self {
        Self {
            carts: CartRepository::new(store),
            require_known_items,
        }
    }

    /// Append an item to the user's cart, creating the cart on first use.
    ///
    /// # Errors
    ///
    /// Returns `AppError::BadRequest` if `item_id` is 0, or if unknown items
    /// are rejected and the item does not exist.
    pub fn add_item(&self, user: &User, item_id: ItemId) -> Result<CartLine> {
        if item_id.as_u64() == 0 {
            return Err(AppError::BadRequest("itemId is required".to_string()));
        }

        let (cart, line) =
            self.carts
                .add_item_for_user(user.id, item_id, self.require_known_items)?;

        tracing::info!(
            user_id = %user.id,
            cart_id = %cart.id,
            item_id = %item_id,
            line_id = %line.id,
            "Item added to cart"
        );
        Ok(line)
    }

    /// The user's cart and its lines, or `None` if they never added anything.
    #[must_use]
    pub fn fetch(&self, user: &User) -> Option<(Cart, Vec<CartLine>)> {
        self.carts.find_with_lines_for_user(user.id)
    }
}
