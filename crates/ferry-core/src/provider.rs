//! The provider facade.
//!
//! [`Provider`] is the seam between the MCP tool layer and the upstream
//! API. The HTTP implementation lives in `ferry-client`; tests use
//! [`MockProvider`].

use crate::error::{Error, Result};
use crate::types::{
    ChatReply, ChatRequest, EmbeddingRequest, EmbeddingSummary, ImageRequest, ModelListRequest,
    select_models,
};
use async_trait::async_trait;
use std::fmt;
use std::sync::Mutex;

/// Upstream operations exposed as tools.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Chat completion.
    Chat,
    /// Image generation.
    Images,
    /// Model listing.
    Models,
    /// Embedding creation.
    Embed,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Chat => write!(f, "chat"),
            Self::Images => write!(f, "images"),
            Self::Models => write!(f, "models"),
            Self::Embed => write!(f, "embed"),
        }
    }
}

/// An OpenAI-compatible provider.
///
/// Each method is one network round-trip. Implementations must not retry
/// and must report any non-success outcome as [`Error::Upstream`].
#[async_trait]
pub trait Provider: Send + Sync {
    /// Runs a chat completion. With `request.stream` set, the reply is the
    /// concatenation of all streamed text fragments in arrival order.
    async fn chat(&self, request: ChatRequest) -> Result<ChatReply>;

    /// Generates images and returns their URLs in provider order.
    async fn generate_images(&self, request: ImageRequest) -> Result<Vec<String>>;

    /// Fetches the raw, unordered model ids.
    async fn fetch_models(&self) -> Result<Vec<String>>;

    /// Creates an embedding and summarizes the first vector.
    async fn embed(&self, request: EmbeddingRequest) -> Result<EmbeddingSummary>;

    /// Lists model ids, filtered and sorted per `request`.
    async fn list_models(&self, request: &ModelListRequest) -> Result<Vec<String>> {
        let models = self.fetch_models().await?;
        Ok(select_models(models, request.filter.as_deref()))
    }
}

// ============================================================================
// MockProvider
// ============================================================================

#[derive(Clone, Debug)]
struct Failure {
    status: Option<u16>,
    message: String,
}

impl Failure {
    fn to_error(&self) -> Error {
        Error::Upstream {
            status: self.status,
            message: self.message.clone(),
        }
    }
}

#[derive(Default)]
struct Script {
    chat: Option<ChatReply>,
    images: Vec<String>,
    models: Vec<String>,
    embedding: Option<EmbeddingSummary>,
    failures: Vec<(Operation, Failure)>,
}

/// Scripted provider for tests.
///
/// Returns canned results, can be told to fail specific operations, and
/// records every call so tests can assert that validation failures never
/// reach the provider.
///
/// ```rust
/// use ferry_core::provider::{MockProvider, Operation};
///
/// let mock = MockProvider::new()
///     .with_chat_reply("hello")
///     .with_failure(Operation::Embed, Some(404), "HTTP 404 Not Found");
/// assert!(mock.calls().is_empty());
/// ```
#[derive(Default)]
pub struct MockProvider {
    script: Script,
    calls: Mutex<Vec<Operation>>,
    requests: Mutex<Vec<ChatRequest>>,
}

impl MockProvider {
    /// Creates a mock with empty results for every operation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the chat reply text.
    pub fn with_chat_reply(mut self, text: impl Into<String>) -> Self {
        self.script.chat = Some(ChatReply::text(text));
        self
    }

    /// Sets the generated image URLs.
    pub fn with_image_urls<I, S>(mut self, urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.script.images = urls.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the raw model ids.
    pub fn with_models<I, S>(mut self, models: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.script.models = models.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the embedding summary.
    pub fn with_embedding(mut self, summary: EmbeddingSummary) -> Self {
        self.script.embedding = Some(summary);
        self
    }

    /// Makes `operation` fail with an upstream error.
    pub fn with_failure(
        mut self,
        operation: Operation,
        status: Option<u16>,
        message: impl Into<String>,
    ) -> Self {
        self.script.failures.push((
            operation,
            Failure {
                status,
                message: message.into(),
            },
        ));
        self
    }

    /// Operations invoked so far, in call order.
    pub fn calls(&self) -> Vec<Operation> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    /// Chat requests received so far.
    pub fn chat_requests(&self) -> Vec<ChatRequest> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }

    fn record(&self, operation: Operation) -> Result<()> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(operation);
        }
        match self.script.failures.iter().find(|(op, _)| *op == operation) {
            Some((_, failure)) => Err(failure.to_error()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl Provider for MockProvider {
    async fn chat(&self, request: ChatRequest) -> Result<ChatReply> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request);
        }
        self.record(Operation::Chat)?;
        Ok(self.script.chat.clone().unwrap_or_default())
    }

    async fn generate_images(&self, _request: ImageRequest) -> Result<Vec<String>> {
        self.record(Operation::Images)?;
        Ok(self.script.images.clone())
    }

    async fn fetch_models(&self) -> Result<Vec<String>> {
        self.record(Operation::Models)?;
        Ok(self.script.models.clone())
    }

    async fn embed(&self, _request: EmbeddingRequest) -> Result<EmbeddingSummary> {
        self.record(Operation::Embed)?;
        self.script
            .embedding
            .clone()
            .ok_or(Error::NoEmbeddingGenerated)
    }
}
