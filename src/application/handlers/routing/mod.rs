//! Routing handlers.
//!
//! Command handlers for session-entry routing.

mod enter_dashboard;

pub use enter_dashboard::{EnterDashboardCommand, EnterDashboardHandler};
