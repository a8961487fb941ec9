//! Shopcart Core - Shared types library.
//!
//! This crate provides the domain types used by the Shopcart server:
//! type-safe entity ids, validated usernames, and non-negative prices.
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage, no HTTP.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for ids, usernames, and prices

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
