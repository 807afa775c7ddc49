//! Application handlers.
//!
//! Command handlers that orchestrate domain operations.

pub mod routing;

pub use routing::{EnterDashboardCommand, EnterDashboardHandler};
