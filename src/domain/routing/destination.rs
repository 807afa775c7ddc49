//! Plan landing destinations.
//!
//! Maps each subscription tier to the canonical dashboard area it lands in.

use serde::Serialize;

use crate::domain::plan::PlanTier;

/// Resolved landing area for a plan.
///
/// Derived from the tier on every routing decision, never stored. The
/// mapping is total over the closed tier set and has no side effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Destination {
    /// `/dashboard/free` - also the fallback when an account carries no
    /// recognizable plan (see `PlanTier::from_claim`).
    FreeDashboard,

    /// `/dashboard/pro`
    ProDashboard,

    /// `/team`
    TeamSpace,
}

impl Destination {
    /// Resolves the landing destination for a plan tier.
    ///
    /// Exhaustive over the tier set: adding a tier without a destination
    /// is a compile error, not a runtime surprise.
    pub fn for_plan(plan: PlanTier) -> Self {
        match plan {
            PlanTier::Free => Destination::FreeDashboard,
            PlanTier::Pro => Destination::ProDashboard,
            PlanTier::Team => Destination::TeamSpace,
        }
    }

    /// Returns the literal route path for this destination.
    pub const fn path(self) -> &'static str {
        match self {
            Destination::FreeDashboard => "/dashboard/free",
            Destination::ProDashboard => "/dashboard/pro",
            Destination::TeamSpace => "/team",
        }
    }
}

impl std::fmt::Display for Destination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}
