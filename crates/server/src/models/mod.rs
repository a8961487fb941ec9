//! Domain models for the shop.
//!
//! These are the entities held by the [`Store`](crate::db::Store) and returned
//! to clients. Field names serialize in camelCase (`cartId`, `createdAt`, ...).

pub mod cart;
pub mod item;
pub mod order;
pub mod user;

pub use cart::{Cart, CartLine};
pub use item::{Item, NewItem};
pub use order::{Order, OrderLine};
pub use user::User;
