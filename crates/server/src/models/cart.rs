//! Shopping cart types.
//!
//! A user has at most one cart, created on the first add. Quantity is implicit:
//! adding the same item twice yields two lines.

use chrono::{DateTime, Utc};
use serde::Serialize;

use shopcart_core::{CartId, CartLineId, ItemId, UserId};

/// A user's shopping cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    pub id: CartId,
    /// Owner of the cart.
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
}

/// A single item reference inside a cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub id: CartLineId,
    pub cart_id: CartId,
    pub item_id: ItemId,
}
