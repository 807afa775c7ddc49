//! Session resolution adapters.
//!
//! Implementations of the `SessionResolver` port:
//! - `JwtSessionResolver` - verifies signed session tokens locally
//! - `MockSessionResolver` - in-memory credential map for testing

mod jwt;
mod mock;

pub use jwt::JwtSessionResolver;
pub use mock::MockSessionResolver;
