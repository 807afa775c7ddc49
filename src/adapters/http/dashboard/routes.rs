//! HTTP routes for dashboard endpoints.

use axum::routing::get;
use axum::Router;

use super::handlers::{
    enter_dashboard, free_dashboard, pro_dashboard, team_space, DashboardAppState,
};

/// Creates the dashboard router with all routes.
///
/// # Routes
///
/// - `GET /dashboard` - session entry, redirects to the plan landing area
/// - `GET /dashboard/free` - free tier landing area
/// - `GET /dashboard/pro` - pro tier landing area
/// - `GET /team` - team landing area
pub fn dashboard_routes(state: DashboardAppState) -> Router {
    Router::new()
        .route("/dashboard", get(enter_dashboard))
        .route("/dashboard/free", get(free_dashboard))
        .route("/dashboard/pro", get(pro_dashboard))
        .route("/team", get(team_space))
        .with_state(state)
}
