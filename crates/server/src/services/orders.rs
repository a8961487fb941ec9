//! Order service.

use shopcart_core::CartId;

use crate::db::orders::OrderRepository;
use crate::db::{RepositoryError, Store};
use crate::error::{AppError, Result};
use crate::models::{Order, User};

/// Placing orders and reading order history.
pub struct OrderService<'a> {
    orders: OrderRepository<'a>,
}

impl<'a> OrderService<'a> {
    #[must_use]
    pub const fn new(store: &'a Store) -> Self {
        Self {
            orders: OrderRepository::new(store),
        }
    }

    /// Place an order from one of the user's carts.
    ///
    /// # Errors
    ///
    /// Returns `AppError::BadRequest` if `cart_id` is 0 or the cart is empty.
    /// Returns `AppError::NotFound` if the user owns no cart with that id.
    pub fn create(&self, user: &User, cart_id: CartId) -> Result<Order> {
        if cart_id.as_u64() == 0 {
            return Err(AppError::BadRequest("cartId is required".to_string()));
        }

        let order = self
            .orders
            .create_from_cart(user.id, cart_id)
            .map_err(|e| match e {
                RepositoryError::NotFound => AppError::NotFound("Cart not found".to_string()),
                other => AppError::from(other),
            })?;

        tracing::info!(
            user_id = %user.id,
            order_id = %order.id,
            cart_id = %cart_id,
            lines = order.order_items.len(),
            "Order created"
        );
        Ok(order)
    }

    /// All orders placed by the user, oldest first.
    #[must_use]
    pub fn history(&self, user: &User) -> Vec<Order> {
        self.orders.list_for_user(user.id)
    }
}
