//! Catalog item types.

use chrono::{DateTime, Utc};
use serde::Serialize;

use shopcart_core::{ItemId, Price};

/// A catalog item. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub description: Option<String>,
    pub price: Price,
    pub created_at: DateTime<Utc>,
}

/// Validated input for creating an [`Item`].
#[derive(Debug, Clone)]
pub struct NewItem {
    pub name: String,
    pub description: Option<String>,
    pub price: Price,
}
