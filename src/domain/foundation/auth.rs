//! Authentication types for the domain layer.
//!
//! These types represent an authenticated user as seen by this application.
//! They have **no external dependencies** - any auth provider can populate
//! them via the `SessionResolver` port.
//!
//! # Design Decisions
//!
//! - `AuthenticatedUser` carries only what routing and shell composition
//!   need: identity and plan tier
//! - `AuthError` is domain-centric, not provider-specific
//! - Types are `Clone` for easy use in request handlers

use serde::Serialize;
use thiserror::Error;

use super::UserId;
use crate::domain::plan::PlanTier;

/// Authenticated user resolved from a validated session.
///
/// This is a **domain type** with no provider dependencies. The session
/// adapter populates it once per request; it is read-only for the duration
/// of a render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthenticatedUser {
    /// The unique user identifier from the auth provider.
    pub id: UserId,

    /// The subscription plan tier attached to the account.
    pub plan: PlanTier,
}

impl AuthenticatedUser {
    /// Creates a new authenticated user.
    ///
    /// This is typically called by a `SessionResolver` adapter after
    /// successfully validating a session credential.
    pub fn new(id: UserId, plan: PlanTier) -> Self {
        Self { id, plan }
    }
}

/// Authentication errors that can occur during session resolution.
///
/// These errors are **domain-centric** - they describe what went wrong
/// from the application's perspective, not the auth provider's.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// No valid session exists: the credential is missing, malformed,
    /// expired, or its signature does not verify. The caller owns the
    /// redirect to a login flow.
    #[error("No valid session")]
    Unauthenticated,

    /// The authentication service is unavailable (network, config, etc.).
    #[error("Auth service unavailable: {0}")]
    ServiceUnavailable(String),
}

impl AuthError {
    /// Creates a service unavailable error with a message.
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::ServiceUnavailable(message.into())
    }

    /// Returns true if this is a transient error that may succeed on retry.
    pub fn is_transient(&self) -> bool {
        matches!(self, AuthError::ServiceUnavailable(_))
    }
}
