//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `auth` - Session resolution (JWT, mock)
//! - `http` - Web surface (axum routers, handlers, middleware)

pub mod auth;
pub mod http;

pub use auth::{JwtSessionResolver, MockSessionResolver};
pub use http::app_router;
