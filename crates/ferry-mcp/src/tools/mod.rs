//! The provider tools.
//!
//! [`ProviderTools`] implements [`ToolRegistry`] by decoding arguments,
//! calling the shared [`Provider`], and formatting the result.

pub mod catalog;
pub mod decode;
pub mod format;

pub use catalog::{CHAT_COMPLETION, CREATE_EMBEDDING, IMAGE_GENERATION, LIST_MODELS, TOOL_NAMES};

use crate::dispatch::complete;
use crate::registry::{ToolRegistry, ToolResult};
use ferry_core::{Provider, Result};
use format::Feature;
use rmcp::model::Tool;
use serde_json::Value;
use std::sync::Arc;

/// MCP tools backed by an OpenAI-compatible provider.
///
/// Generates four tools:
/// - `chat_completion` — send messages, get the reply text
/// - `image_generation` — generate images, get their URLs
/// - `list_models` — list (and optionally filter) model ids
/// - `create_embedding` — embed text, get a summary of the vector
///
/// # Example
///
/// ```rust,ignore
/// use ferry_client::OpenAiClient;
/// use ferry_mcp::ProviderTools;
///
/// let client = OpenAiClient::new(config)?;
/// let tools = ProviderTools::new(client);
/// ```
pub struct ProviderTools {
    provider: Arc<dyn Provider>,
}

impl ProviderTools {
    /// Create tools wrapping a provider.
    pub fn new<P: Provider + 'static>(provider: P) -> Self {
        Self {
            provider: Arc::new(provider),
        }
    }

    /// Create tools with a shared provider reference.
    pub fn with_shared(provider: Arc<dyn Provider>) -> Self {
        Self { provider }
    }
}

impl ToolRegistry for ProviderTools {
    fn tools(&self) -> Vec<Tool> {
        catalog::tools()
    }

    fn call(&self, name: &str, args: Value) -> Option<ToolResult> {
        let provider = Arc::clone(&self.provider);

        match name {
            CHAT_COMPLETION => Some(Box::pin(async move {
                complete(CHAT_COMPLETION, chat_completion(provider.as_ref(), &args).await)
            })),
            IMAGE_GENERATION => Some(Box::pin(async move {
                complete(IMAGE_GENERATION, image_generation(provider.as_ref(), &args).await)
            })),
            LIST_MODELS => Some(Box::pin(async move {
                complete(LIST_MODELS, list_models(provider.as_ref(), &args).await)
            })),
            CREATE_EMBEDDING => Some(Box::pin(async move {
                complete(CREATE_EMBEDDING, create_embedding(provider.as_ref(), &args).await)
            })),
            _ => None,
        }
    }
}

async fn chat_completion(provider: &dyn Provider, args: &Value) -> Result<String> {
    let request = decode::chat_request(args)?;
    tracing::debug!(
        model = %request.model,
        messages = request.messages.len(),
        stream = request.stream,
        "Chat completion"
    );
    let reply = provider.chat(request).await?;
    Ok(format::chat_reply(&reply))
}

async fn image_generation(provider: &dyn Provider, args: &Value) -> Result<String> {
    let request = decode::image_request(args)?;
    tracing::debug!(model = %request.model, count = request.count, "Image generation");
    match provider.generate_images(request).await {
        Ok(urls) => Ok(format::images(&urls)),
        Err(e) => explain_unsupported(Feature::ImageGeneration, e),
    }
}

async fn list_models(provider: &dyn Provider, args: &Value) -> Result<String> {
    let request = decode::model_list_request(args);
    match provider.list_models(&request).await {
        Ok(ids) => Ok(format::models(&ids)),
        Err(e) => explain_unsupported(Feature::ModelListing, e),
    }
}

async fn create_embedding(provider: &dyn Provider, args: &Value) -> Result<String> {
    let request = decode::embedding_request(args)?;
    tracing::debug!(model = %request.model, chars = request.input.len(), "Create embedding");
    match provider.embed(request).await {
        Ok(summary) => Ok(format::embedding(&summary)),
        Err(e) => explain_unsupported(Feature::Embeddings, e),
    }
}

/// A missing provider feature is reported as a successful explanation;
/// any other failure propagates.
fn explain_unsupported(feature: Feature, error: ferry_core::Error) -> Result<String> {
    match format::unsupported_feature(feature, &error) {
        Some(explanation) => Ok(explanation.to_string()),
        None => Err(error),
    }
}
