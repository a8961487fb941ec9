//! Shopcart API server library.
//!
//! In-memory users, catalog, carts, and orders behind a JSON HTTP API.
//! The binary in `main.rs` wires this up with Sentry and tracing; tests
//! drive [`routes::app`] directly.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
