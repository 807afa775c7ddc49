//! HTTP DTOs for dashboard endpoints.

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

/// Standard error response body.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: code.into(),
        }
    }
}
