//! Business logic services.
//!
//! Each service borrows the [`Store`](crate::db::Store) for the duration of
//! one request and runs every state change as a single store operation.
//!
//! # Services
//!
//! - `auth` - Registration, login, and bearer token resolution
//! - `catalog` - Item creation and listing
//! - `cart` - Adding to and reading the caller's cart
//! - `orders` - Placing orders and order history

pub mod auth;
pub mod cart;
pub mod catalog;
pub mod orders;

pub use auth::{AuthError, AuthService};
pub use cart::CartService;
pub use catalog::CatalogService;
pub use orders::OrderService;
