//! Static navigation route table.

use once_cell::sync::Lazy;

/// A single navigation entry.
///
/// `icon` names an icon in the rendering layer's icon set; this core does
/// not interpret it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub name: &'static str,
    pub route: &'static str,
    pub icon: &'static str,
}

/// The site navigation, in presentation order.
///
/// Process-wide immutable reference data: built once at first use, never
/// mutated. Consumers render it as-is; validation and deduplication are
/// their concern.
static NAV_LINKS: Lazy<Vec<NavLink>> = Lazy::new(|| {
    vec![
        NavLink {
            name: "Home",
            route: "/",
            icon: "home",
        },
        NavLink {
            name: "Pricing",
            route: "/pricing",
            icon: "tag",
        },
        NavLink {
            name: "Dashboard",
            route: "/dashboard",
            icon: "layout-dashboard",
        },
        NavLink {
            name: "Team",
            route: "/team",
            icon: "users",
        },
    ]
});

/// Read-only view of the navigation route table.
pub fn nav_links() -> &'static [NavLink] {
    &NAV_LINKS
}
