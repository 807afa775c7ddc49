//! HTTP routes for public page endpoints.

use axum::routing::get;
use axum::Router;

use super::handlers::{home, pricing, PagesAppState};

/// Creates the public pages router.
///
/// # Routes
///
/// - `GET /` - home page
/// - `GET /pricing` - pricing page
pub fn pages_routes(state: PagesAppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/pricing", get(pricing))
        .with_state(state)
}
