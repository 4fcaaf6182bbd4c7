//! Typed requests and results exchanged with a provider.
//!
//! Everything here is a transient, per-call value. Defaults mirror the
//! defaults advertised in the tool schemas.

use serde::{Deserialize, Serialize};

/// Default chat model.
pub const DEFAULT_CHAT_MODEL: &str = "gpt-4o";
/// Default image model.
pub const DEFAULT_IMAGE_MODEL: &str = "dall-e-3";
/// Default image size.
pub const DEFAULT_IMAGE_SIZE: &str = "1024x1024";
/// Default embedding model.
pub const DEFAULT_EMBEDDING_MODEL: &str = "text-embedding-ada-002";
/// Number of leading embedding values reported back to the caller.
pub const EMBEDDING_PREVIEW_LEN: usize = 10;

// ============================================================================
// Chat
// ============================================================================

/// Author of a chat message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// System instructions.
    System,
    /// End-user turn.
    User,
    /// Model turn.
    Assistant,
}

impl Role {
    /// Parses a role name, treating anything unrecognized as [`Role::User`].
    pub fn parse_lenient(name: &str) -> Self {
        match name {
            "system" => Role::System,
            "assistant" => Role::Assistant,
            _ => Role::User,
        }
    }

    /// Wire name of the role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

/// A single conversation turn.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Who wrote the message.
    pub role: Role,
    /// Message text.
    pub content: String,
}

impl ChatMessage {
    /// Creates a message.
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}

/// A chat completion request.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatRequest {
    /// Conversation, oldest first. Never empty once decoded.
    pub messages: Vec<ChatMessage>,
    /// Model identifier.
    pub model: String,
    /// Sampling temperature.
    pub temperature: Option<f64>,
    /// Completion token cap.
    pub max_tokens: Option<u32>,
    /// Whether to stream the reply and concatenate the fragments.
    pub stream: bool,
}

impl ChatRequest {
    /// Creates a request with default model and options.
    pub fn new(messages: Vec<ChatMessage>) -> Self {
        Self {
            messages,
            model: DEFAULT_CHAT_MODEL.to_string(),
            temperature: None,
            max_tokens: None,
            stream: false,
        }
    }
}

/// Text produced by a chat completion.
///
/// `content` is `None` when the provider returned no choices, a choice
/// without content, or a stream without any text fragments.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChatReply {
    /// Reply text.
    pub content: Option<String>,
}

impl ChatReply {
    /// Creates a reply carrying text.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
        }
    }

    /// Creates an empty reply.
    pub fn empty() -> Self {
        Self::default()
    }
}

// ============================================================================
// Images
// ============================================================================

/// Requested image quality.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ImageQuality {
    /// Standard quality.
    #[default]
    Standard,
    /// High definition.
    Hd,
}

impl ImageQuality {
    /// `"hd"` selects [`ImageQuality::Hd`]; anything else, including
    /// nothing at all, selects [`ImageQuality::Standard`].
    pub fn from_arg(value: Option<&str>) -> Self {
        match value {
            Some("hd") => ImageQuality::Hd,
            _ => ImageQuality::Standard,
        }
    }

    /// Wire name of the quality level.
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageQuality::Standard => "standard",
            ImageQuality::Hd => "hd",
        }
    }
}

/// An image generation request.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageRequest {
    /// Text description of the image.
    pub prompt: String,
    /// Model identifier.
    pub model: String,
    /// Image size such as `"1024x1024"`.
    pub size: String,
    /// Quality level.
    pub quality: ImageQuality,
    /// Number of images to generate.
    pub count: u32,
}

impl ImageRequest {
    /// Creates a request with default model, size, quality, and count.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            model: DEFAULT_IMAGE_MODEL.to_string(),
            size: DEFAULT_IMAGE_SIZE.to_string(),
            quality: ImageQuality::Standard,
            count: 1,
        }
    }
}

// ============================================================================
// Models
// ============================================================================

/// A model listing request.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModelListRequest {
    /// Case-insensitive substring that model ids must contain.
    pub filter: Option<String>,
}

impl ModelListRequest {
    /// Creates a request with an optional filter.
    pub fn new(filter: Option<String>) -> Self {
        Self { filter }
    }
}

/// Filters model ids by a case-insensitive substring and sorts them.
pub fn select_models(mut models: Vec<String>, filter: Option<&str>) -> Vec<String> {
    if let Some(filter) = filter {
        let needle = filter.to_lowercase();
        models.retain(|id| id.to_lowercase().contains(&needle));
    }
    models.sort();
    models
}

// ============================================================================
// Embeddings
// ============================================================================

/// An embedding request.
#[derive(Clone, Debug, PartialEq)]
pub struct EmbeddingRequest {
    /// Text to embed.
    pub input: String,
    /// Model identifier.
    pub model: String,
}

impl EmbeddingRequest {
    /// Creates a request with the default model.
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            model: DEFAULT_EMBEDDING_MODEL.to_string(),
        }
    }
}

/// What the caller is told about a generated embedding.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EmbeddingSummary {
    /// Model the provider reports having used.
    pub model: Option<String>,
    /// Length of the embedding vector.
    pub dimensions: usize,
    /// The first [`EMBEDDING_PREVIEW_LEN`] values.
    pub leading_values: Vec<f64>,
    /// Tokens billed for the request.
    pub total_tokens: u64,
}

impl EmbeddingSummary {
    /// Summarizes a full embedding vector.
    pub fn from_vector(model: Option<String>, vector: &[f64], total_tokens: u64) -> Self {
        Self {
            model,
            dimensions: vector.len(),
            leading_values: vector.iter().take(EMBEDDING_PREVIEW_LEN).copied().collect(),
            total_tokens,
        }
    }
}
