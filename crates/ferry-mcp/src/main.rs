//! Ferry MCP Server
//!
//! Standalone MCP server exposing an OpenAI-compatible provider to AI
//! agents over stdio.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

use anyhow::Result;
use clap::Parser;
use ferry_client::OpenAiClient;
use ferry_core::ProviderConfig;
use ferry_core::config::{API_KEY_VAR, BASE_URL_VAR};
use ferry_mcp::{FerryMcpServer, ProviderTools};
use tracing_subscriber::EnvFilter;

/// MCP server for OpenAI-compatible chat, image, model, and embedding APIs
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Provider API key
    #[arg(long, env = API_KEY_VAR, hide_env_values = true)]
    api_key: Option<String>,

    /// Provider base URL (defaults to https://api.openai.com/v1)
    #[arg(long, env = BASE_URL_VAR)]
    base_url: Option<String>,

    /// Log filter directive, e.g. `debug` or `ferry_client=trace`
    #[arg(long, env = "FERRY_LOG", default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // stdout carries MCP framing; logs go to stderr only.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_env_filter(EnvFilter::try_new(&args.log_level)?)
        .init();

    let config = ProviderConfig::new(args.api_key, args.base_url).inspect_err(|e| {
        tracing::error!(error = %e, "Failed to initialize provider");
    })?;
    tracing::info!(
        base_url = config.base_url(),
        default_endpoint = config.is_default_endpoint(),
        "Starting ferry-mcp"
    );

    let client = OpenAiClient::new(config)?;

    FerryMcpServer::new(ProviderTools::new(client))
        .serve_stdio()
        .await?;

    Ok(())
}
