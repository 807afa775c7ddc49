//! UI shell configuration

use serde::Deserialize;

use crate::domain::shell::ThemeMode;

/// Configuration for the page shell.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct UiConfig {
    /// Theme mode applied at the shell root. `system` defers to the
    /// visitor's host preference.
    #[serde(default)]
    pub default_theme: ThemeMode,
}
