//! Authentication configuration

use serde::Deserialize;

use super::error::ValidationError;
use super::server::Environment;

/// Authentication configuration for session token validation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthConfig {
    /// Shared secret used to verify session token signatures (HS256)
    pub session_secret: String,

    /// Expected issuer claim, if the token carries one
    #[serde(default)]
    pub issuer: Option<String>,

    /// Expected audience claim, if the token carries one
    #[serde(default)]
    pub audience: Option<String>,
}

impl AuthConfig {
    /// Validate authentication configuration
    ///
    /// In production, requires a secret of at least 32 bytes. Development
    /// allows shorter secrets for local setups.
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        if self.session_secret.is_empty() {
            return Err(ValidationError::MissingRequired("SESSION_SECRET"));
        }
        if *environment == Environment::Production && self.session_secret.len() < 32 {
            return Err(ValidationError::SessionSecretTooShort);
        }
        Ok(())
    }
}
