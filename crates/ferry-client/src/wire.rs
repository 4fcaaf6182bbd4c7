//! OpenAI-compatible request bodies and response payloads.

use ferry_core::{ChatMessage, ChatRequest, EmbeddingRequest, ImageRequest};
use serde::{Deserialize, Serialize};

// ============================================================================
// Request bodies
// ============================================================================

#[derive(Debug, Serialize)]
pub(crate) struct ChatCompletionBody<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    stream: bool,
}

impl<'a> From<&'a ChatRequest> for ChatCompletionBody<'a> {
    fn from(request: &'a ChatRequest) -> Self {
        Self {
            model: &request.model,
            messages: &request.messages,
            temperature: request.temperature,
            max_tokens: request.max_tokens,
            stream: request.stream,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct ImageGenerationBody<'a> {
    prompt: &'a str,
    model: &'a str,
    n: u32,
    quality: &'static str,
    size: &'a str,
}

impl<'a> From<&'a ImageRequest> for ImageGenerationBody<'a> {
    fn from(request: &'a ImageRequest) -> Self {
        Self {
            prompt: &request.prompt,
            model: &request.model,
            n: request.count,
            quality: request.quality.as_str(),
            size: &request.size,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct EmbeddingBody<'a> {
    input: &'a str,
    model: &'a str,
}

impl<'a> From<&'a EmbeddingRequest> for EmbeddingBody<'a> {
    fn from(request: &'a EmbeddingRequest) -> Self {
        Self {
            input: &request.input,
            model: &request.model,
        }
    }
}

// ============================================================================
// Responses
// ============================================================================

#[derive(Debug, Deserialize)]
pub(crate) struct ChatCompletion {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: Option<ChoiceMessage>,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

impl ChatCompletion {
    /// Content of the first choice, if any.
    pub(crate) fn into_first_content(self) -> Option<String> {
        self.choices
            .into_iter()
            .next()
            .and_then(|c| c.message)
            .and_then(|m| m.content)
    }
}

/// One `data:` payload of a streamed chat completion.
#[derive(Debug, Deserialize)]
pub(crate) struct ChatChunk {
    #[serde(default)]
    choices: Vec<ChunkChoice>,
    pub(crate) error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct ChunkChoice {
    delta: Option<ChunkDelta>,
}

#[derive(Debug, Deserialize)]
struct ChunkDelta {
    content: Option<String>,
}

impl ChatChunk {
    /// Text fragment carried by the first choice's delta.
    pub(crate) fn first_fragment(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|c| c.delta.as_ref())
            .and_then(|d| d.content.as_deref())
    }
}

/// Error object some providers embed in a stream instead of failing the
/// HTTP request.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiError {
    #[serde(default)]
    pub(crate) message: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ImagesResponse {
    #[serde(default)]
    data: Vec<ImageData>,
}

#[derive(Debug, Deserialize)]
struct ImageData {
    url: Option<String>,
}

impl ImagesResponse {
    /// URLs in provider order; entries without a URL are skipped.
    pub(crate) fn into_urls(self) -> Vec<String> {
        self.data.into_iter().filter_map(|d| d.url).collect()
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ModelsResponse {
    #[serde(default)]
    data: Vec<ModelEntry>,
}

#[derive(Debug, Deserialize)]
struct ModelEntry {
    id: String,
}

impl ModelsResponse {
    pub(crate) fn into_ids(self) -> Vec<String> {
        self.data.into_iter().map(|m| m.id).collect()
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct EmbeddingsResponse {
    #[serde(default)]
    pub(crate) data: Vec<EmbeddingData>,
    pub(crate) model: Option<String>,
    pub(crate) usage: Option<EmbeddingUsage>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct EmbeddingData {
    #[serde(default)]
    pub(crate) embedding: Vec<f64>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct EmbeddingUsage {
    #[serde(default)]
    pub(crate) total_tokens: u64,
}
