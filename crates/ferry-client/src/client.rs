//! HTTP implementation of the provider trait.

use crate::streaming::collect_chat_stream;
use crate::wire::{
    ChatCompletion, ChatCompletionBody, EmbeddingBody, EmbeddingsResponse, ImageGenerationBody,
    ImagesResponse, ModelsResponse,
};
use async_trait::async_trait;
use ferry_core::{
    ChatReply, ChatRequest, EmbeddingRequest, EmbeddingSummary, Error, ImageRequest, Provider,
    ProviderConfig, Result,
};
use reqwest::Response;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;

/// Client for an OpenAI-compatible HTTP API.
///
/// Holds one pooled `reqwest::Client` with the bearer token installed as a
/// default header. Cheap to share behind an `Arc`.
pub struct OpenAiClient {
    http: reqwest::Client,
    config: ProviderConfig,
}

impl OpenAiClient {
    /// Creates a client for the configured provider.
    pub fn new(config: ProviderConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let mut auth = HeaderValue::from_str(&format!("Bearer {}", config.api_key()))
            .map_err(|_| Error::config("API key contains characters not allowed in a header"))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| Error::config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { http, config })
    }

    /// The configuration this client was built from.
    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    async fn post<B: serde::Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Response> {
        let url = self.config.endpoint(path);
        tracing::debug!(url = %url, "POST");
        let response = self
            .http
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(transport_error)?;
        ensure_success(response).await
    }

    async fn get(&self, path: &str) -> Result<Response> {
        let url = self.config.endpoint(path);
        tracing::debug!(url = %url, "GET");
        let response = self.http.get(&url).send().await.map_err(transport_error)?;
        ensure_success(response).await
    }
}

fn transport_error(error: reqwest::Error) -> Error {
    Error::upstream(error.to_string())
}

/// Turns a non-2xx response into [`Error::Upstream`] carrying the status
/// line and the raw body.
async fn ensure_success(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    tracing::warn!(status = status.as_u16(), "Provider returned an error");
    Err(Error::upstream_status(
        status.as_u16(),
        format!("HTTP {status}: {body}"),
    ))
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    let bytes = response.bytes().await.map_err(transport_error)?;
    Ok(serde_json::from_slice(&bytes)?)
}

#[async_trait]
impl Provider for OpenAiClient {
    async fn chat(&self, request: ChatRequest) -> Result<ChatReply> {
        let body = ChatCompletionBody::from(&request);
        let response = self.post("chat/completions", &body).await?;

        if request.stream {
            return collect_chat_stream(response).await;
        }

        let completion: ChatCompletion = decode(response).await?;
        Ok(ChatReply {
            content: completion.into_first_content(),
        })
    }

    async fn generate_images(&self, request: ImageRequest) -> Result<Vec<String>> {
        let body = ImageGenerationBody::from(&request);
        let response = self.post("images/generations", &body).await?;
        let images: ImagesResponse = decode(response).await?;
        Ok(images.into_urls())
    }

    async fn fetch_models(&self) -> Result<Vec<String>> {
        let response = self.get("models").await?;
        let models: ModelsResponse = decode(response).await?;
        Ok(models.into_ids())
    }

    async fn embed(&self, request: EmbeddingRequest) -> Result<EmbeddingSummary> {
        let body = EmbeddingBody::from(&request);
        let response = self.post("embeddings", &body).await?;
        let raw: EmbeddingsResponse = decode(response).await?;

        let first = raw.data.first().ok_or(Error::NoEmbeddingGenerated)?;
        let total_tokens = raw.usage.as_ref().map(|u| u.total_tokens).unwrap_or(0);
        Ok(EmbeddingSummary::from_vector(
            raw.model.clone(),
            &first.embedding,
            total_tokens,
        ))
    }
}
