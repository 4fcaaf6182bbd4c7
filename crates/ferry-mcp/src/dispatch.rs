//! Tool call dispatch.
//!
//! Every tool call passes through [`dispatch`], and every tool handler
//! finishes through [`complete`]; together they are the only place a
//! failure is turned into a tool result.

use crate::error::ToolErrorExt;
use crate::registry::ToolRegistry;
use ferry_core::{Error, Result};
use rmcp::model::{CallToolResult, Content};
use serde_json::Value;

/// Routes a tool call to the registry.
///
/// An unrecognized name yields `"Error: Unknown tool: {name}"` with
/// `is_error` set; it is never a protocol-level fault.
pub async fn dispatch(registry: &dyn ToolRegistry, name: &str, args: Value) -> CallToolResult {
    tracing::info!(tool = name, "Tool call");

    match registry.call(name, args) {
        Some(future) => future.await,
        None => complete(name, Err(Error::UnknownTool(name.to_string()))),
    }
}

/// Wraps a handler outcome as a tool result: success text as-is, failures
/// as `"Error: {message}"`.
pub fn complete(tool: &str, outcome: Result<String>) -> CallToolResult {
    match outcome {
        Ok(text) => CallToolResult::success(vec![Content::text(text)]),
        Err(error) => {
            tracing::error!(
                tool,
                error = %error,
                validation = error.is_validation(),
                "Tool execution failed"
            );
            error.to_tool_result()
        }
    }
}
