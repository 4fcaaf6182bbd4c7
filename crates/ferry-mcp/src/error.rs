//! Error types for ferry-mcp.

use rmcp::model::{CallToolResult, Content};
use thiserror::Error;

/// Result type alias for ferry-mcp operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that stop the server from starting or serving.
///
/// Tool-call failures never surface here; they are rendered into the
/// tool result by [`ToolErrorExt`].
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from ferry-core (configuration, client construction).
    #[error(transparent)]
    Core(#[from] ferry_core::Error),

    /// The MCP transport failed to initialize or terminated abnormally.
    #[error("MCP transport error: {0}")]
    Transport(String),
}

impl Error {
    /// Create a transport error.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }
}

/// Renders a core error as an MCP tool result.
pub trait ToolErrorExt {
    /// `"Error: {message}"` with `is_error` set.
    fn to_tool_result(&self) -> CallToolResult;
}

impl ToolErrorExt for ferry_core::Error {
    fn to_tool_result(&self) -> CallToolResult {
        CallToolResult::error(vec![Content::text(format!("Error: {self}"))])
    }
}
