//! HTTP handlers for the public marketing pages.
//!
//! These pages render for everyone; when a session exists the shell
//! carries the user so navigation can show account state.

use axum::extract::State;
use axum::Json;
use serde_json::json;

use crate::domain::plan::PlanTier;
use crate::domain::shell::{compose, ShellOptions};

use super::super::middleware::OptionalAuth;
use super::dto::PageResponse;

/// Shared state for page handlers.
#[derive(Debug, Clone)]
pub struct PagesAppState {
    pub shell: ShellOptions,
}

/// `GET /` - home page.
pub async fn home(
    State(state): State<PagesAppState>,
    OptionalAuth(user): OptionalAuth,
) -> Json<PageResponse> {
    let shell = compose(&state.shell, user.as_ref(), home_content());
    Json(PageResponse::new(shell))
}

/// `GET /pricing` - pricing page.
pub async fn pricing(
    State(state): State<PagesAppState>,
    OptionalAuth(user): OptionalAuth,
) -> Json<PageResponse> {
    let shell = compose(&state.shell, user.as_ref(), pricing_content());
    Json(PageResponse::new(shell))
}

// Marketing content is interchangeable UI glue: literal trees handed to
// the rendering layer untouched.

fn home_content() -> serde_json::Value {
    json!({
        "component": "HomePage",
        "children": [
            {
                "component": "Hero",
                "headline": "Ship decisions, not spreadsheets",
                "cta": { "label": "Get started", "route": "/dashboard" },
            },
            { "component": "PricingPreview", "route": "/pricing" },
            { "component": "Footer" },
        ],
    })
}

fn pricing_content() -> serde_json::Value {
    let cards: Vec<serde_json::Value> = [PlanTier::Free, PlanTier::Pro, PlanTier::Team]
        .iter()
        .map(|tier| {
            json!({
                "component": "PricingCard",
                "tier": tier,
                "title": tier.display_name(),
                "highlighted": tier.is_paid(),
            })
        })
        .collect();

    json!({
        "component": "PricingPage",
        "children": [
            { "component": "PricingGrid", "children": cards },
            { "component": "Footer" },
        ],
    })
}
