//! HTTP handlers for the navigation export.

use axum::Json;

use crate::domain::navigation::nav_links;

use super::dto::NavLinkResponse;

/// `GET /api/navigation` - read-only route table export.
///
/// Returns the entries in presentation order; consumers own any
/// validation or deduplication they need.
pub async fn list_navigation() -> Json<Vec<NavLinkResponse>> {
    Json(nav_links().iter().map(NavLinkResponse::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn list_navigation_returns_entries_in_order() {
        let Json(links) = list_navigation().await;

        assert_eq!(links.len(), nav_links().len());
        assert_eq!(links[0].route, "/");
        assert_eq!(links[1].route, "/pricing");
    }
}
