//! rmcp server adapter.
//!
//! [`FerryMcpServer`] binds a [`ToolRegistry`] to the MCP `list_tools` and
//! `call_tool` handlers and serves it over stdio.

use crate::dispatch::dispatch;
use crate::error::{Error, Result};
use crate::registry::ToolRegistry;
use rmcp::model::{
    CallToolRequestParams, CallToolResult, ErrorData, Implementation, ListToolsResult,
    PaginatedRequestParams, ServerCapabilities, ServerInfo,
};
use rmcp::service::RequestContext;
use rmcp::transport::stdio;
use rmcp::{RoleServer, ServerHandler, ServiceExt};
use serde_json::Value;
use std::future::Future;
use std::sync::Arc;

/// Default server name reported during MCP initialization.
pub const DEFAULT_SERVER_NAME: &str = "ferry-mcp";

const DEFAULT_INSTRUCTIONS: &str = "Tools for an OpenAI-compatible provider: \
    chat_completion for chat, image_generation for images, list_models to \
    discover model names, create_embedding for text embeddings.";

/// Server metadata reported to clients.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Server name.
    pub name: String,
    /// Server version.
    pub version: String,
    /// Usage instructions for the client model.
    pub instructions: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_SERVER_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            instructions: DEFAULT_INSTRUCTIONS.to_string(),
        }
    }
}

/// MCP server over a tool registry.
#[derive(Clone)]
pub struct FerryMcpServer {
    registry: Arc<dyn ToolRegistry>,
    config: ServerConfig,
}

impl FerryMcpServer {
    /// Create a server with default metadata.
    pub fn new<R: ToolRegistry + 'static>(registry: R) -> Self {
        Self {
            registry: Arc::new(registry),
            config: ServerConfig::default(),
        }
    }

    /// Set the server name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.config.name = name.into();
        self
    }

    /// Server metadata.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// The underlying registry.
    pub fn registry(&self) -> &dyn ToolRegistry {
        self.registry.as_ref()
    }

    /// Serve over stdin/stdout until the client disconnects.
    pub async fn serve_stdio(self) -> Result<()> {
        tracing::info!(
            name = %self.config.name,
            version = %self.config.version,
            tools = self.registry.tool_count(),
            "Starting MCP server on stdio"
        );

        let service = self.serve(stdio()).await.map_err(|e| {
            tracing::error!(error = %e, "MCP serve error");
            Error::transport(e.to_string())
        })?;

        let reason = service
            .waiting()
            .await
            .map_err(|e| Error::transport(e.to_string()))?;
        tracing::info!(?reason, "MCP server stopped");
        Ok(())
    }
}

impl ServerHandler for FerryMcpServer {
    fn list_tools(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> impl Future<Output = std::result::Result<ListToolsResult, ErrorData>> + Send + '_ {
        std::future::ready(Ok(ListToolsResult::with_all_items(self.registry.tools())))
    }

    fn call_tool(
        &self,
        request: CallToolRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> impl Future<Output = std::result::Result<CallToolResult, ErrorData>> + Send + '_ {
        let args = request.arguments.map(Value::Object).unwrap_or(Value::Null);
        async move { Ok(dispatch(self.registry.as_ref(), &request.name, args).await) }
    }

    fn get_info(&self) -> ServerInfo {
        let implementation =
            Implementation::new(self.config.name.clone(), self.config.version.clone())
                .with_title("Ferry");

        ServerInfo::new(ServerCapabilities::builder().enable_tools().build())
            .with_server_info(implementation)
            .with_instructions(self.config.instructions.clone())
    }
}
