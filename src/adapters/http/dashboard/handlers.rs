//! HTTP handlers for dashboard endpoints.
//!
//! The entry handler turns a resolved session into the one-shot plan
//! redirect; the landing handlers serve the composed page for each plan
//! area.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use axum::Json;
use serde_json::json;

use crate::application::handlers::routing::{EnterDashboardCommand, EnterDashboardHandler};
use crate::domain::foundation::AuthError;
use crate::domain::shell::{compose, ShellOptions};

use super::super::middleware::{OptionalAuth, RequireAuth};
use super::dto::{ErrorResponse, PageResponse};

/// Shared state for dashboard handlers.
#[derive(Debug, Clone)]
pub struct DashboardAppState {
    pub shell: ShellOptions,
}

impl DashboardAppState {
    /// Create the entry handler on demand from the shared state.
    pub fn enter_dashboard_handler(&self) -> EnterDashboardHandler {
        EnterDashboardHandler::new()
    }
}

/// `GET /dashboard` - session entry.
///
/// Resolves the visitor's plan and issues the one-shot redirect to the
/// matching landing area. Nothing else on this request path runs after
/// the redirect is produced.
pub async fn enter_dashboard(
    State(state): State<DashboardAppState>,
    OptionalAuth(user): OptionalAuth,
) -> Response {
    let command = EnterDashboardCommand { user };

    match state.enter_dashboard_handler().handle(command) {
        Ok(redirected) => Redirect::temporary(redirected.path()).into_response(),
        Err(AuthError::Unauthenticated) => (
            StatusCode::UNAUTHORIZED,
            Json(ErrorResponse::new("UNAUTHENTICATED", "Authentication required")),
        )
            .into_response(),
        Err(AuthError::ServiceUnavailable(msg)) => {
            tracing::error!("Auth service unavailable: {}", msg);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ErrorResponse::new(
                    "AUTH_UNAVAILABLE",
                    "Authentication service unavailable",
                )),
            )
                .into_response()
        }
    }
}

/// `GET /dashboard/free` - free tier landing area.
pub async fn free_dashboard(
    State(state): State<DashboardAppState>,
    RequireAuth(user): RequireAuth,
) -> Json<PageResponse> {
    let shell = compose(&state.shell, Some(&user), free_dashboard_content());
    Json(PageResponse::new(shell))
}

/// `GET /dashboard/pro` - pro tier landing area.
pub async fn pro_dashboard(
    State(state): State<DashboardAppState>,
    RequireAuth(user): RequireAuth,
) -> Json<PageResponse> {
    let shell = compose(&state.shell, Some(&user), pro_dashboard_content());
    Json(PageResponse::new(shell))
}

/// `GET /team` - team landing area.
pub async fn team_space(
    State(state): State<DashboardAppState>,
    RequireAuth(user): RequireAuth,
) -> Json<PageResponse> {
    let shell = compose(&state.shell, Some(&user), team_space_content());
    Json(PageResponse::new(shell))
}

// Landing content is interchangeable UI glue: the rendering layer owns its
// meaning, this core just passes the trees through the shell.

fn free_dashboard_content() -> serde_json::Value {
    json!({
        "component": "DashboardFree",
        "children": [
            { "component": "UsageSummary" },
            { "component": "UpgradePrompt", "target": "pro" },
        ],
    })
}

fn pro_dashboard_content() -> serde_json::Value {
    json!({
        "component": "DashboardPro",
        "children": [
            { "component": "UsageSummary" },
            { "component": "ProjectList" },
        ],
    })
}

fn team_space_content() -> serde_json::Value {
    json!({
        "component": "TeamSpace",
        "children": [
            { "component": "MemberList" },
            { "component": "SharedProjects" },
        ],
    })
}
