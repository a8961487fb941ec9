//! Order types.

use chrono::{DateTime, Utc};
use serde::Serialize;

use shopcart_core::{CartId, ItemId, OrderId, OrderLineId, UserId};

/// A placed order.
///
/// Lines are copied from the source cart at creation time; later changes to
/// the cart do not affect the order. Orders have no status and are never
/// modified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub user_id: UserId,
    /// Cart the lines were copied from.
    pub cart_id: CartId,
    pub created_at: DateTime<Utc>,
    pub order_items: Vec<OrderLine>,
}

/// A single item reference inside an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    pub id: OrderLineId,
    pub order_id: OrderId,
    pub item_id: ItemId,
}
