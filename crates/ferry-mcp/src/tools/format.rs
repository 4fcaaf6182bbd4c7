//! Rendering of provider results into tool response text.

use ferry_core::{ChatReply, EmbeddingSummary, Error, ErrorClass, classify_error};

/// Shown when the provider returned no chat content.
pub const NO_RESPONSE: &str = "No response";

/// Shown when model listing succeeded but nothing matched.
pub const NO_MODELS: &str = "No models found. This provider may not support model listing or may require different authentication.";

/// The chat reply text, or [`NO_RESPONSE`].
pub fn chat_reply(reply: &ChatReply) -> String {
    reply
        .content
        .clone()
        .unwrap_or_else(|| NO_RESPONSE.to_string())
}

/// `"Generated {n} image(s):"` followed by one URL per line.
pub fn images(urls: &[String]) -> String {
    format!("Generated {} image(s):\n{}", urls.len(), urls.join("\n"))
}

/// `"Available models:"` followed by one id per line, or [`NO_MODELS`].
pub fn models(ids: &[String]) -> String {
    if ids.is_empty() {
        return NO_MODELS.to_string();
    }
    format!("Available models:\n{}", ids.join("\n"))
}

/// Multi-line embedding summary with leading values at four decimals.
pub fn embedding(summary: &EmbeddingSummary) -> String {
    let values = summary
        .leading_values
        .iter()
        .map(|v| format!("{v:.4}"))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "Embedding generated:\nModel: {}\nDimensions: {}\nFirst 10 values: {}...\nTotal tokens: {}",
        summary.model.as_deref().unwrap_or("unknown"),
        summary.dimensions,
        values,
        summary.total_tokens,
    )
}

/// Optional provider features that get a friendly explanation when the
/// provider lacks them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Feature {
    /// `image_generation`
    ImageGeneration,
    /// `list_models`
    ModelListing,
    /// `create_embedding`
    Embeddings,
}

/// The explanation for a provider that lacks `feature`, if `error` says so.
///
/// Returns `None` for errors that should be reported as-is.
pub fn unsupported_feature(feature: Feature, error: &Error) -> Option<&'static str> {
    let class = classify_error(error);
    if !class.is_unsupported() {
        return None;
    }

    let (not_found, not_allowed) = match feature {
        Feature::ImageGeneration => (
            "Image generation is not supported by this provider. This feature requires a provider with image generation capabilities (e.g., OpenAI with DALL-E).",
            "This provider does not support image generation. Try using OpenAI or another provider with image capabilities.",
        ),
        Feature::ModelListing => (
            "Model listing is not supported by this provider. You can still use the chat tool by specifying a model name directly.",
            "This provider does not support listing models. Check the provider's documentation for available model names.",
        ),
        Feature::Embeddings => (
            "Embeddings are not supported by this provider. This feature requires a provider with embedding capabilities (e.g., OpenAI, Cohere).",
            "This provider does not support creating embeddings. Try using OpenAI or another provider with embedding support.",
        ),
    };

    tracing::debug!(?feature, ?class, "Provider lacks feature");
    Some(match class {
        ErrorClass::NotFound => not_found,
        _ => not_allowed,
    })
}
