//! Ferry Core — shared types, errors, configuration, and the provider trait.
//!
//! This crate has no internal Ferry dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`error`]: Error taxonomy and Result alias
//! - [`types`]: Typed chat, image, model, and embedding requests/results
//! - [`config`]: Provider API key and base URL
//! - [`provider`]: The [`Provider`] trait and a scripted [`MockProvider`]
//! - [`classify`]: Unsupported-feature detection for upstream errors

pub mod classify;
pub mod config;
pub mod error;
pub mod provider;
pub mod types;

// Re-export key types at crate root for convenience
pub use classify::{ErrorClass, classify_error, classify_message};
pub use config::ProviderConfig;
pub use error::{Error, Result};
pub use provider::{MockProvider, Operation, Provider};
pub use types::{
    ChatMessage, ChatReply, ChatRequest, DEFAULT_CHAT_MODEL, DEFAULT_EMBEDDING_MODEL,
    DEFAULT_IMAGE_MODEL, DEFAULT_IMAGE_SIZE, EmbeddingRequest, EmbeddingSummary, ImageQuality,
    ImageRequest, ModelListRequest, Role, select_models,
};
