//! EnterDashboardHandler - Command handler for dashboard-root entry.

use crate::domain::foundation::{AuthError, AuthenticatedUser};
use crate::domain::routing::{Redirected, SessionEntry};

/// Command to enter the dashboard root.
///
/// Carries the user already resolved by the session middleware - context
/// passing rather than an ambient current-user lookup, so the handler is
/// testable with synthetic users.
#[derive(Debug, Clone)]
pub struct EnterDashboardCommand {
    pub user: Option<AuthenticatedUser>,
}

/// Handler that routes a session entry to its plan landing area.
///
/// Fails with `Unauthenticated` before any routing decision is made: the
/// plan router never runs for a visitor without a session.
#[derive(Debug, Default)]
pub struct EnterDashboardHandler;

impl EnterDashboardHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, command: EnterDashboardCommand) -> Result<Redirected, AuthError> {
        let user = command.user.ok_or(AuthError::Unauthenticated)?;

        tracing::debug!(user_id = %user.id, plan = %user.plan, "routing dashboard entry");

        Ok(SessionEntry::new(user).redirect())
    }
}
