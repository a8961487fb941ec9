//! In-memory store for all shop data.
//!
//! # Tables
//!
//! - `users` - accounts, with indexes by username and by current token
//! - `items` - the catalog
//! - `carts` / `cart_lines` - one cart per user, indexed by owner
//! - `orders` - placed orders with their lines embedded
//!
//! Every table is a `BTreeMap` keyed by an id handed out by a per-table
//! counter starting at 1. Ids are never reused, so iterating a table yields
//! entities in creation order, and every list operation returns that order.
//!
//! # Locking
//!
//! One `parking_lot::RwLock` guards all tables. Each repository method takes
//! the lock exactly once: reads share it, writes hold it exclusively for the
//! whole check-then-mutate sequence. Nothing inside the lock does I/O.

pub mod carts;
pub mod items;
pub mod orders;
pub mod users;

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use thiserror::Error;

use shopcart_core::{CartId, CartLineId, ItemId, OrderId, UserId};

use crate::models::{Cart, CartLine, Item, Order, User};

pub use carts::CartRepository;
pub use items::ItemRepository;
pub use orders::OrderRepository;
pub use users::UserRepository;

/// Errors from store operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RepositoryError {
    /// Requested entity was not found.
    #[error("not found")]
    NotFound,

    /// Uniqueness violation (e.g., duplicate username).
    #[error("constraint violation: {0}")]
    Conflict(String),

    /// A referenced entity does not exist.
    #[error("invalid reference: {0}")]
    InvalidReference(String),

    /// An order was requested from a cart with no lines.
    #[error("cart {0} is empty")]
    EmptyCart(CartId),
}

/// Shared handle to the in-memory tables.
///
/// Cloning is cheap; all clones see the same data. Tests get isolation by
/// creating a fresh `Store`.
#[derive(Clone, Default)]
pub struct Store {
    tables: Arc<RwLock<Tables>>,
}

impl Store {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository for users and login tokens.
    #[must_use]
    pub const fn users(&self) -> UserRepository<'_> {
        UserRepository::new(self)
    }

    /// Repository for catalog items.
    #[must_use]
    pub const fn items(&self) -> ItemRepository<'_> {
        ItemRepository::new(self)
    }

    /// Repository for carts and cart lines.
    #[must_use]
    pub const fn carts(&self) -> CartRepository<'_> {
        CartRepository::new(self)
    }

    /// Repository for orders.
    #[must_use]
    pub const fn orders(&self) -> OrderRepository<'_> {
        OrderRepository::new(self)
    }

    fn read(&self) -> RwLockReadGuard<'_, Tables> {
        self.tables.read()
    }

    fn write(&self) -> RwLockWriteGuard<'_, Tables> {
        self.tables.write()
    }
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tables = self.read();
        f.debug_struct("Store")
            .field("users", &tables.users.len())
            .field("items", &tables.items.len())
            .field("carts", &tables.carts.len())
            .field("orders", &tables.orders.len())
            .finish()
    }
}

/// A user row: the public user plus credentials that never leave the store.
#[derive(Debug, Clone)]
struct UserRecord {
    user: User,
    password_hash: String,
    token: Option<String>,
}

/// Per-table id counters. Each holds the last id handed out.
#[derive(Debug, Default)]
struct Sequences {
    user: u64,
    item: u64,
    cart: u64,
    cart_line: u64,
    order: u64,
    order_line: u64,
}

fn next_id(counter: &mut u64) -> u64 {
    *counter += 1;
    *counter
}

#[derive(Debug, Default)]
struct Tables {
    users: BTreeMap<UserId, UserRecord>,
    user_ids_by_username: HashMap<String, UserId>,
    user_ids_by_token: HashMap<String, UserId>,
    items: BTreeMap<ItemId, Item>,
    carts: BTreeMap<CartId, Cart>,
    cart_ids_by_user: HashMap<UserId, CartId>,
    cart_lines: BTreeMap<CartLineId, CartLine>,
    line_ids_by_cart: HashMap<CartId, Vec<CartLineId>>,
    orders: BTreeMap<OrderId, Order>,
    sequences: Sequences,
}

impl Tables {
    /// Lines of a cart in the order they were added.
    fn lines_of(&self, cart_id: CartId) -> Vec<CartLine> {
        self.line_ids_by_cart
            .get(&cart_id)
            .map(|ids| {
                ids.iter()
                    .filter_map(|id| self.cart_lines.get(id).copied())
                    .collect()
            })
            .unwrap_or_default()
    }
}
