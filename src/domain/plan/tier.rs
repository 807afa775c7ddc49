//! Plan tier definitions.
//!
//! Represents the subscription plan levels available in Tiergate.

use serde::{Deserialize, Serialize};

/// Subscription plan tier.
///
/// Determines which dashboard area a visitor lands in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanTier {
    /// Free tier - the least-privileged experience, also the fallback
    /// when an account carries no recognizable plan.
    Free,

    /// Pro tier - individual paid subscription.
    Pro,

    /// Team tier - shared workspace subscription.
    Team,
}

impl PlanTier {
    /// Parses a raw plan claim as carried by a session credential.
    ///
    /// The claim set is open at the wire boundary: accounts provisioned
    /// before a tier rename, or after a tier is introduced upstream, may
    /// carry values this build does not know. Those degrade to `Free`
    /// rather than failing the request, as does a missing claim.
    pub fn from_claim(claim: Option<&str>) -> Self {
        match claim.map(|c| c.trim().to_ascii_lowercase()).as_deref() {
            Some("free") => PlanTier::Free,
            Some("pro") => PlanTier::Pro,
            Some("team") => PlanTier::Team,
            _ => PlanTier::Free,
        }
    }

    /// Returns true if this tier is a paid tier.
    pub fn is_paid(&self) -> bool {
        !matches!(self, PlanTier::Free)
    }

    /// Returns the display name for this tier.
    pub fn display_name(&self) -> &'static str {
        match self {
            PlanTier::Free => "Free",
            PlanTier::Pro => "Pro",
            PlanTier::Team => "Team",
        }
    }
}

impl std::fmt::Display for PlanTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
