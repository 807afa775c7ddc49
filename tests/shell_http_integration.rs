//! Integration tests for page shell composition and the navigation export.
//!
//! These tests verify that every rendered page nests its content in the
//! same shell order (theme, then auth, then content) and that the route
//! table export preserves entry order and shape.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use tiergate::adapters::auth::MockSessionResolver;
use tiergate::adapters::http::app_router;
use tiergate::domain::plan::PlanTier;
use tiergate::domain::shell::{ShellOptions, ThemeMode};
use tiergate::ports::SessionResolver;

// =============================================================================
// Test Infrastructure
// =============================================================================

fn test_app_with_shell(shell: ShellOptions) -> axum::Router {
    let resolver: Arc<dyn SessionResolver> = Arc::new(
        MockSessionResolver::new()
            .with_test_user("free-session", "u1", PlanTier::Free)
            .with_test_user("team-session", "u3", PlanTier::Team),
    );
    app_router(resolver, shell)
}

fn test_app() -> axum::Router {
    test_app_with_shell(ShellOptions::default())
}

fn get(uri: &str, session: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().uri(uri);
    if let Some(session) = session {
        builder = builder.header("Authorization", format!("Bearer {session}"));
    }
    builder.body(Body::empty()).unwrap()
}

async fn page_shell(app: axum::Router, uri: &str, session: Option<&str>) -> Value {
    let response = app.oneshot(get(uri, session)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK, "expected 200 for {uri}");
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    body["shell"].clone()
}

/// Asserts the fixed nesting order and returns the content tree.
fn unwrap_shell(shell: &Value) -> &Value {
    assert_eq!(shell["context"], "theme", "theme must be outermost");
    assert_eq!(
        shell["child"]["context"], "auth",
        "auth must sit under theme"
    );
    assert_eq!(
        shell["child"]["child"]["context"], "content",
        "content must sit under auth"
    );
    &shell["child"]["child"]["tree"]
}

// =============================================================================
// Shell composition on public pages
// =============================================================================

#[tokio::test]
async fn home_page_nests_theme_then_auth_then_content() {
    let shell = page_shell(test_app(), "/", None).await;

    let content = unwrap_shell(&shell);
    assert_eq!(shell["mode"], "system");
    assert_eq!(shell["child"]["user"], Value::Null);
    assert_eq!(content["component"], "HomePage");
}

#[tokio::test]
async fn home_page_carries_the_session_user() {
    let shell = page_shell(test_app(), "/", Some("free-session")).await;

    unwrap_shell(&shell);
    assert_eq!(shell["child"]["user"]["id"], "u1");
    assert_eq!(shell["child"]["user"]["plan"], "free");
}

#[tokio::test]
async fn pricing_page_lists_a_card_per_tier() {
    let shell = page_shell(test_app(), "/pricing", None).await;

    let content = unwrap_shell(&shell);
    let cards = content["children"][0]["children"].as_array().unwrap();
    assert_eq!(cards.len(), 3);
    assert_eq!(cards[0]["tier"], "free");
    assert_eq!(cards[1]["tier"], "pro");
    assert_eq!(cards[2]["tier"], "team");
}

// =============================================================================
// Shell composition on landing areas
// =============================================================================

#[tokio::test]
async fn team_space_composes_the_same_shell_order() {
    let shell = page_shell(test_app(), "/team", Some("team-session")).await;

    let content = unwrap_shell(&shell);
    assert_eq!(shell["child"]["user"]["plan"], "team");
    assert_eq!(content["component"], "TeamSpace");
}

// =============================================================================
// Theme configuration
// =============================================================================

#[tokio::test]
async fn configured_theme_reaches_the_shell_root() {
    let app = test_app_with_shell(ShellOptions::new(ThemeMode::Dark));
    let shell = page_shell(app, "/", None).await;

    unwrap_shell(&shell);
    assert_eq!(shell["mode"], "dark");
}

#[tokio::test]
async fn theme_context_resolves_without_a_session() {
    // An unauthenticated page still renders with correct theming: theme
    // sits outside auth, so it never depends on a session being present.
    let app = test_app_with_shell(ShellOptions::new(ThemeMode::Light));
    let shell = page_shell(app, "/pricing", None).await;

    assert_eq!(shell["mode"], "light");
    assert_eq!(shell["child"]["user"], Value::Null);
}

// =============================================================================
// Navigation export
// =============================================================================

#[tokio::test]
async fn navigation_export_preserves_order_and_shape() {
    let response = test_app()
        .oneshot(get("/api/navigation", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let links: Value = serde_json::from_slice(&bytes).unwrap();
    let links = links.as_array().unwrap();

    let routes: Vec<&str> = links
        .iter()
        .map(|l| l["route"].as_str().unwrap())
        .collect();
    assert_eq!(routes, vec!["/", "/pricing", "/dashboard", "/team"]);

    for link in links {
        assert!(link["name"].is_string());
        assert!(link["route"].is_string());
        assert!(link["icon"].is_string());
    }
}
