//! MCP server exposing an OpenAI-compatible provider as tools.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        ferry-mcp                            │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ToolRegistry trait — tool declaration and dispatch         │
//! │  dispatch() — single error boundary, name → ToolResult      │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ProviderTools — the four provider tools:                   │
//! │  ├── catalog — names, descriptions, input schemas           │
//! │  ├── decode  — untyped arguments → typed requests           │
//! │  └── format  — provider results → response text             │
//! ├─────────────────────────────────────────────────────────────┤
//! │  FerryMcpServer — rmcp ServerHandler over stdio             │
//! │  ServerConfig — name, version, instructions                 │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use ferry_client::OpenAiClient;
//! use ferry_core::ProviderConfig;
//! use ferry_mcp::{FerryMcpServer, ProviderTools};
//!
//! let config = ProviderConfig::new(Some(api_key), None)?;
//! let client = OpenAiClient::new(config)?;
//!
//! FerryMcpServer::new(ProviderTools::new(client))
//!     .serve_stdio()
//!     .await?;
//! ```

pub mod dispatch;
pub mod error;
pub mod registry;
pub mod server;
pub mod tools;

// Re-exports — registry
pub use registry::{ToolRegistry, ToolResult};

// Re-exports — dispatch
pub use dispatch::dispatch;

// Re-exports — server
pub use server::{FerryMcpServer, ServerConfig};

// Re-exports — error
pub use error::{Error, Result, ToolErrorExt};

// Re-exports — tools
pub use tools::ProviderTools;
