//! API Module
//!
//! HTTP handlers, the response-cache decorator, and routing.
//!
//! # Endpoints
//! - `GET /add`, `/subtract`, `/multiply`, `/divide`, `/exponent` -
//!   arithmetic over `?a=...&b=...`, text/plain
//! - `GET /stats` - cache decorator counters
//! - `GET /health` - health check endpoint
//! - static fallback - the browser calculator form

pub mod cache_layer;
pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
