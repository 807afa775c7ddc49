//! JWT session adapter.
//!
//! This adapter implements the `SessionResolver` port by validating a
//! signed session token locally:
//!
//! 1. Verifies the HS256 signature against the configured shared secret
//! 2. Validates expiry (plus issuer/audience when configured)
//! 3. Maps the `sub` and `plan` claims to the domain `AuthenticatedUser`
//!
//! Plan claims are treated leniently: a tier this build does not recognize
//! degrades to `Free` instead of failing the session (see
//! `PlanTier::from_claim`). Signature and expiry failures are strict and
//! surface as `Unauthenticated`.

use async_trait::async_trait;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

use crate::config::AuthConfig;
use crate::domain::foundation::{AuthError, AuthenticatedUser, UserId};
use crate::domain::plan::PlanTier;
use crate::ports::SessionResolver;

/// Claims carried by a Tiergate session token.
#[derive(Debug, Serialize, Deserialize)]
struct SessionClaims {
    /// Subject - the user ID
    sub: String,

    /// Subscription plan tier name
    #[serde(default)]
    plan: Option<String>,

    /// Expiry timestamp (Unix epoch seconds)
    exp: i64,

    /// Issuer, when the provider sets one
    #[serde(default)]
    iss: Option<String>,

    /// Audience, when the provider sets one
    #[serde(default)]
    aud: Option<String>,
}

/// Session resolver backed by locally-verified JWTs.
pub struct JwtSessionResolver {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtSessionResolver {
    /// Creates a resolver from authentication configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        if let Some(issuer) = &config.issuer {
            validation.set_issuer(&[issuer]);
        }
        match &config.audience {
            Some(audience) => validation.set_audience(&[audience]),
            None => validation.validate_aud = false,
        }

        Self {
            decoding_key: DecodingKey::from_secret(config.session_secret.as_bytes()),
            validation,
        }
    }
}

#[async_trait]
impl SessionResolver for JwtSessionResolver {
    async fn resolve(&self, credential: &str) -> Result<AuthenticatedUser, AuthError> {
        let data = decode::<SessionClaims>(credential, &self.decoding_key, &self.validation)
            .map_err(|err| {
                tracing::debug!(error = %err, "session credential rejected");
                AuthError::Unauthenticated
            })?;

        let claims = data.claims;
        let id = UserId::new(claims.sub).map_err(|_| AuthError::Unauthenticated)?;

        let plan = PlanTier::from_claim(claims.plan.as_deref());
        if let Some(raw) = claims.plan.as_deref() {
            if plan == PlanTier::Free && !raw.trim().eq_ignore_ascii_case("free") {
                tracing::debug!(plan = raw, "unrecognized plan claim, degrading to free tier");
            }
        }

        Ok(AuthenticatedUser::new(id, plan))
    }
}
