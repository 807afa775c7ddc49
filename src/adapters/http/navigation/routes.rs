//! HTTP routes for the navigation export.

use axum::routing::get;
use axum::Router;

use super::handlers::list_navigation;

/// Creates the navigation router.
///
/// # Routes
///
/// - `GET /api/navigation` - ordered route table export
pub fn navigation_routes() -> Router {
    Router::new().route("/api/navigation", get(list_navigation))
}
