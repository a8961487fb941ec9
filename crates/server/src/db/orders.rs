//! Order repository.

use chrono::Utc;

use shopcart_core::{CartId, OrderId, OrderLineId, UserId};

use super::{RepositoryError, Store, Tables, next_id};
use crate::models::{CartLine, Order, OrderLine};

/// Repository for orders.
pub struct OrderRepository<'a> {
    store: &'a Store,
}

impl<'a> OrderRepository<'a> {
    /// Create a new order repository.
    #[must_use]
    pub const fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Place an order from one of the user's carts.
    ///
    /// Ownership and non-emptiness are checked under the same write lock
    /// that allocates the order id and every line id, so a concurrent add
    /// cannot slip between the check and the snapshot. The cart is left
    /// untouched; ordering it again produces another independent order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the cart does not exist or is
    /// owned by someone else.
    /// Returns `RepositoryError::EmptyCart` if the cart has no lines.
    pub fn create_from_cart(&self, user_id: UserId, cart_id: CartId) -> Result<Order, RepositoryError> {
        let mut tables = self.store.write();

        let owned = tables
            .carts
            .get(&cart_id)
            .is_some_and(|cart| cart.user_id == user_id);
        if !owned {
            return Err(RepositoryError::NotFound);
        }

        let lines = tables.lines_of(cart_id);
        if lines.is_empty() {
            return Err(RepositoryError::EmptyCart(cart_id));
        }

        Ok(insert_order(&mut tables, user_id, cart_id, &lines))
    }

    /// Get an order by ID.
    #[must_use]
    pub fn get(&self, id: OrderId) -> Option<Order> {
        self.store.read().orders.get(&id).cloned()
    }

    /// All orders placed by a user, oldest first.
    #[must_use]
    pub fn list_for_user(&self, user_id: UserId) -> Vec<Order> {
        self.store
            .read()
            .orders
            .values()
            .filter(|order| order.user_id == user_id)
            .cloned()
            .collect()
    }
}

/// Allocate an order and one line per cart line.
fn insert_order(tables: &mut Tables, user_id: UserId, cart_id: CartId, lines: &[CartLine]) -> Order {
    let id = OrderId::new(next_id(&mut tables.sequences.order));
    let order_items = lines
        .iter()
        .map(|line| OrderLine {
            id: OrderLineId::new(next_id(&mut tables.sequences.order_line)),
            order_id: id,
            item_id: line.item_id,
        })
        .collect();

    let order = Order {
        id,
        user_id,
        cart_id,
        created_at: Utc::now(),
        order_items,
    };
    tables.orders.insert(id, order.clone());

    order
}
