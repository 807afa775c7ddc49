//! Session resolution port.
//!
//! This port defines the contract for turning a session credential into the
//! current user's identity and plan. It is provider-agnostic - the JWT
//! adapter implements it for production and a mock implements it for tests;
//! an OIDC introspection adapter could be added without touching consumers.

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser};

/// Resolves the current authenticated user from a session credential.
///
/// This is the primary authentication port. The HTTP session middleware
/// uses it to resolve Bearer credentials into the domain user record.
///
/// # Contract
///
/// Implementations must:
/// - Be a pure read: resolution never mutates the user record
/// - Return `AuthError::Unauthenticated` when no valid session exists
///   (missing, malformed, expired, or unverifiable credential)
/// - Return `AuthError::ServiceUnavailable` for transient provider errors
/// - Absorb unrecognized plan claims into the Free tier rather than failing
///
/// No caching discipline is mandated; providers own any memoization.
#[async_trait]
pub trait SessionResolver: Send + Sync {
    /// Resolve a session credential into the current user.
    ///
    /// # Arguments
    ///
    /// * `credential` - The raw session credential (without "Bearer " prefix)
    ///
    /// # Returns
    ///
    /// * `Ok(AuthenticatedUser)` - Valid session, user record resolved
    /// * `Err(AuthError::Unauthenticated)` - No valid session
    /// * `Err(AuthError::ServiceUnavailable)` - Auth provider unreachable
    async fn resolve(&self, credential: &str) -> Result<AuthenticatedUser, AuthError>;
}
