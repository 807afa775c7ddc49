//! HTTP adapters - the application's web surface.
//!
//! Each area has its own adapter module (routes, handlers, DTOs);
//! `app_router` assembles them under the shared session middleware so
//! every page renders inside the same shell context.

pub mod dashboard;
pub mod middleware;
pub mod navigation;
pub mod pages;

use std::sync::Arc;

use axum::middleware::from_fn_with_state;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::domain::shell::ShellOptions;
use crate::ports::SessionResolver;

use dashboard::{dashboard_routes, DashboardAppState};
use middleware::{session_middleware, SessionState};
use navigation::navigation_routes;
use pages::{pages_routes, PagesAppState};

/// Assembles the application router.
///
/// Session resolution happens once per request in the middleware; the
/// shell options are shared by every page-rendering handler so the
/// composition root stays singular.
pub fn app_router(resolver: Arc<dyn SessionResolver>, shell: ShellOptions) -> Router {
    let session_state: SessionState = resolver;

    Router::new()
        .merge(pages_routes(PagesAppState { shell }))
        .merge(dashboard_routes(DashboardAppState { shell }))
        .merge(navigation_routes())
        .layer(from_fn_with_state(session_state, session_middleware))
        .layer(TraceLayer::new_for_http())
}
