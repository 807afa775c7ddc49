//! HTTP DTOs for public page endpoints.

use serde::Serialize;

use crate::domain::shell::ShellNode;

/// A composed page ready for the rendering layer.
#[derive(Debug, Clone, Serialize)]
pub struct PageResponse {
    pub shell: ShellNode,
}

impl PageResponse {
    pub fn new(shell: ShellNode) -> Self {
        Self { shell }
    }
}
