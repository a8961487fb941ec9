//! HTTP middleware stack.
//!
//! # Middleware Order (outermost first)
//!
//! 1. `TraceLayer` (request span)
//! 2. Request ID (add unique ID to each request)
//! 3. CORS (allow any origin, answer preflight `OPTIONS` with 204)
//!
//! Authentication is not a layer: protected handlers take the
//! [`RequireUser`] extractor.

pub mod auth;
pub mod cors;
pub mod request_id;

pub use auth::RequireUser;
pub use cors::cors_middleware;
pub use request_id::{REQUEST_ID_HEADER, RequestId, request_id_middleware};
