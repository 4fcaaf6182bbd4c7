//! Common test utilities and harness for Ferry MCP integration tests.

use ferry_core::MockProvider;
use ferry_mcp::{ProviderTools, dispatch};
use rmcp::model::{CallToolResult, RawContent};
use serde_json::Value;
use std::sync::Arc;

/// Test harness wiring a scripted provider into the tool registry.
pub struct TestHarness {
    /// Scripted provider, shared with the registry so calls can be inspected.
    pub provider: Arc<MockProvider>,
    /// Registry under test.
    pub tools: ProviderTools,
}

impl TestHarness {
    /// Creates a harness with an unscripted provider.
    pub fn new() -> Self {
        Self::with_provider(MockProvider::new())
    }

    /// Creates a harness around a scripted provider.
    pub fn with_provider(provider: MockProvider) -> Self {
        let provider = Arc::new(provider);
        let tools = ProviderTools::with_shared(provider.clone());
        Self { provider, tools }
    }

    /// Calls a tool through the dispatcher.
    pub async fn call(&self, name: &str, args: Value) -> ToolOutput {
        ToolOutput::from(dispatch(&self.tools, name, args).await)
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

/// The parts of a tool result tests care about.
#[derive(Debug)]
pub struct ToolOutput {
    /// Whether the result is flagged as an error.
    pub is_error: bool,
    /// The single text content item.
    pub text: String,
}

impl From<CallToolResult> for ToolOutput {
    fn from(result: CallToolResult) -> Self {
        assert_eq!(result.content.len(), 1, "expected exactly one content item");
        let text = match &result.content[0].raw {
            RawContent::Text(t) => t.text.clone(),
            other => panic!("expected text content, got {other:?}"),
        };
        Self {
            is_error: result.is_error.unwrap_or(false),
            text,
        }
    }
}
