//! Page shell composition.
//!
//! Every rendered page is wrapped in the same cross-cutting context, in a
//! fixed nesting order: theme (outermost), then auth, then the page
//! content. Theme sits outside auth so that a page can render with correct
//! theming even when no session exists - an unauthenticated error page
//! still needs a theme.
//!
//! The page content itself is opaque to this module: collaborators supply
//! an arbitrary render tree and get it back untouched, one level down from
//! the auth context.

use serde::Serialize;
use serde_json::Value;

use crate::domain::foundation::AuthenticatedUser;

use super::ThemeMode;

/// Options applied at the shell root, once per process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellOptions {
    /// Theme mode supplied to the outermost context.
    pub default_theme: ThemeMode,
}

impl ShellOptions {
    /// Creates shell options with an explicit theme mode.
    pub fn new(default_theme: ThemeMode) -> Self {
        Self { default_theme }
    }
}

/// A node in the composed shell tree.
///
/// Serializes structurally, so a consumer (or a test) can verify the
/// nesting order without interpreting the content.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "context", rename_all = "lowercase")]
pub enum ShellNode {
    /// Theme context - always the outermost wrapper.
    Theme {
        mode: ThemeMode,
        child: Box<ShellNode>,
    },

    /// Auth context - makes the resolved user available to all
    /// descendants without re-fetching. `None` on public pages.
    Auth {
        user: Option<AuthenticatedUser>,
        child: Box<ShellNode>,
    },

    /// The collaborator-supplied page content, passed through opaque.
    Content { tree: Value },
}

/// Wraps page content in the shell context.
///
/// The nesting order is fixed: `Theme` > `Auth` > content. Pages never
/// compose their own variant of the shell; reordering the wrappers is a
/// defect, not a stylistic choice.
pub fn compose(
    options: &ShellOptions,
    user: Option<&AuthenticatedUser>,
    content: Value,
) -> ShellNode {
    ShellNode::Theme {
        mode: options.default_theme,
        child: Box::new(ShellNode::Auth {
            user: user.cloned(),
            child: Box::new(ShellNode::Content { tree: content }),
        }),
    }
}
