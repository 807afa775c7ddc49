//! HTTP DTOs for the navigation export.

use serde::Serialize;

use crate::domain::navigation::NavLink;

/// A navigation entry as exposed to rendering collaborators.
#[derive(Debug, Clone, Serialize)]
pub struct NavLinkResponse {
    pub name: String,
    pub route: String,
    pub icon: String,
}

impl From<&NavLink> for NavLinkResponse {
    fn from(link: &NavLink) -> Self {
        Self {
            name: link.name.to_string(),
            route: link.route.to_string(),
            icon: link.icon.to_string(),
        }
    }
}
