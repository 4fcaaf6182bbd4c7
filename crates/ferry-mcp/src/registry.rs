//! Tool registry trait for MCP servers.
//!
//! This module defines the `ToolRegistry` trait that abstracts over
//! tool declaration and dispatch. The server holds one registry and
//! delegates `list_tools` and `call_tool` to it.

use rmcp::model::{CallToolResult, JsonObject, Tool};
use serde_json::Value;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// Type alias for async tool handler results.
///
/// Tool failures are carried inside the `CallToolResult` (`is_error`),
/// never as a protocol error.
pub type ToolResult = Pin<Box<dyn Future<Output = CallToolResult> + Send>>;

/// Trait for declaring and dispatching MCP tools.
///
/// # Example
///
/// ```rust,ignore
/// struct MyTools { /* ... */ }
///
/// impl ToolRegistry for MyTools {
///     fn tools(&self) -> Vec<Tool> {
///         vec![/* tool definitions */]
///     }
///
///     fn call(&self, name: &str, args: Value) -> Option<ToolResult> {
///         match name {
///             "my_tool" => Some(Box::pin(self.handle_my_tool(args))),
///             _ => None,
///         }
///     }
/// }
/// ```
pub trait ToolRegistry: Send + Sync {
    /// Returns the declarations of all available tools, in a stable order.
    fn tools(&self) -> Vec<Tool>;

    /// Dispatches a tool call by name.
    ///
    /// Returns `None` if the tool is not recognized by this registry.
    fn call(&self, name: &str, args: Value) -> Option<ToolResult>;

    /// Returns the number of registered tools.
    fn tool_count(&self) -> usize {
        self.tools().len()
    }

    /// Check if a tool exists by name.
    fn has_tool(&self, name: &str) -> bool {
        self.tools().iter().any(|t| t.name == name)
    }
}

/// Converts a `json!` schema literal into the map rmcp expects.
///
/// Anything other than an object yields an empty schema.
pub fn json_schema(value: Value) -> Arc<JsonObject> {
    match value {
        Value::Object(map) => Arc::new(map),
        _ => Arc::new(JsonObject::new()),
    }
}

/// Builds a tool declaration from its name, description, and schema.
pub fn make_tool(name: &str, description: &str, schema: Value) -> Tool {
    Tool::new(name.to_string(), description.to_string(), json_schema(schema))
}

// ============================================================================
// Tests
// ============================================================================
