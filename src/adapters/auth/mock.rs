//! Mock session adapter for testing.
//!
//! Implements the `SessionResolver` port against an in-memory credential
//! map, avoiding the need for signed tokens in tests.
//!
//! # Example
//!
//! ```ignore
//! use tiergate::adapters::auth::MockSessionResolver;
//! use tiergate::domain::plan::PlanTier;
//!
//! let resolver = MockSessionResolver::new()
//!     .with_test_user("valid-session", "user-123", PlanTier::Pro);
//!
//! let user = resolver.resolve("valid-session").await?;
//! assert_eq!(user.plan, PlanTier::Pro);
//! ```

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser, UserId};
use crate::domain::plan::PlanTier;
use crate::ports::SessionResolver;

/// Mock session resolver for testing.
///
/// Stores a map of credentials to users. Credentials not in the map
/// resolve to `Unauthenticated`.
#[derive(Debug, Default)]
pub struct MockSessionResolver {
    /// Map of valid credentials to their associated users
    sessions: RwLock<HashMap<String, AuthenticatedUser>>,
    /// Optional error to return for all resolutions (for error testing)
    force_error: RwLock<Option<AuthError>>,
}

impl MockSessionResolver {
    /// Creates a new empty mock resolver.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a valid credential that maps to a user.
    pub fn with_user(self, credential: impl Into<String>, user: AuthenticatedUser) -> Self {
        self.sessions.write().unwrap().insert(credential.into(), user);
        self
    }

    /// Adds a valid credential with a simple test user on the given plan.
    pub fn with_test_user(
        self,
        credential: impl Into<String>,
        user_id: impl Into<String>,
        plan: PlanTier,
    ) -> Self {
        let user = AuthenticatedUser::new(UserId::new(user_id.into()).unwrap(), plan);
        self.with_user(credential, user)
    }

    /// Forces all resolutions to return the specified error.
    ///
    /// Useful for testing error handling paths.
    pub fn with_error(self, error: AuthError) -> Self {
        *self.force_error.write().unwrap() = Some(error);
        self
    }

    /// Clears the forced error and returns to normal operation.
    pub fn clear_error(&self) {
        *self.force_error.write().unwrap() = None;
    }

    /// Registers a new valid credential at runtime.
    pub fn add_session(&self, credential: impl Into<String>, user: AuthenticatedUser) {
        self.sessions.write().unwrap().insert(credential.into(), user);
    }

    /// Removes a credential, making it invalid.
    pub fn remove_session(&self, credential: &str) {
        self.sessions.write().unwrap().remove(credential);
    }

    /// Returns the number of registered valid credentials.
    pub fn session_count(&self) -> usize {
        self.sessions.read().unwrap().len()
    }
}

#[async_trait]
impl SessionResolver for MockSessionResolver {
    async fn resolve(&self, credential: &str) -> Result<AuthenticatedUser, AuthError> {
        // Check for forced error
        if let Some(error) = self.force_error.read().unwrap().clone() {
            return Err(error);
        }

        // Look up the credential
        self.sessions
            .read()
            .unwrap()
            .get(credential)
            .cloned()
            .ok_or(AuthError::Unauthenticated)
    }
}
