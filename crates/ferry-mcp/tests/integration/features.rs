//! Integration tests for images, models, and embeddings, including the
//! friendly explanations for providers that lack them.

use ferry_core::{EmbeddingSummary, MockProvider, Operation};
use serde_json::{Value, json};

use crate::common::TestHarness;

// ============================================================================
// image_generation
// ============================================================================

#[tokio::test]
async fn test_images_list_urls() {
    let harness = TestHarness::with_provider(
        MockProvider::new().with_image_urls(["https://img/1.png", "https://img/2.png"]),
    );

    let output = harness
        .call("image_generation", json!({"prompt": "a cat", "n": 2}))
        .await;

    assert!(!output.is_error);
    assert_eq!(
        output.text,
        "Generated 2 image(s):\nhttps://img/1.png\nhttps://img/2.png"
    );
}

#[tokio::test]
async fn test_images_not_supported() {
    let harness = TestHarness::with_provider(MockProvider::new().with_failure(
        Operation::Images,
        Some(404),
        "HTTP 404 Not Found: ",
    ));

    let output = harness
        .call("image_generation", json!({"prompt": "a cat"}))
        .await;

    assert!(!output.is_error);
    assert!(
        output
            .text
            .starts_with("Image generation is not supported by this provider.")
    );
}

#[tokio::test]
async fn test_images_method_not_allowed() {
    let harness = TestHarness::with_provider(MockProvider::new().with_failure(
        Operation::Images,
        None,
        "Method Not Allowed",
    ));

    let output = harness
        .call("image_generation", json!({"prompt": "a cat"}))
        .await;

    assert!(!output.is_error);
    assert!(
        output
            .text
            .starts_with("This provider does not support image generation.")
    );
}

// ============================================================================
// list_models
// ============================================================================

fn model_harness() -> TestHarness {
    TestHarness::with_provider(MockProvider::new().with_models(["gpt-4o", "claude-3", "gpt-3.5"]))
}

#[tokio::test]
async fn test_models_filtered_and_sorted() {
    let output = model_harness()
        .call("list_models", json!({"filter": "gpt"}))
        .await;

    assert!(!output.is_error);
    assert_eq!(output.text, "Available models:\ngpt-3.5\ngpt-4o");
}

#[tokio::test]
async fn test_models_without_arguments() {
    let output = model_harness().call("list_models", Value::Null).await;

    assert!(!output.is_error);
    assert_eq!(output.text, "Available models:\nclaude-3\ngpt-3.5\ngpt-4o");
}

#[tokio::test]
async fn test_models_filter_is_case_insensitive() {
    let output = model_harness()
        .call("list_models", json!({"filter": "CLAUDE"}))
        .await;

    assert_eq!(output.text, "Available models:\nclaude-3");
}

#[tokio::test]
async fn test_models_none_match() {
    let output = model_harness()
        .call("list_models", json!({"filter": "llama"}))
        .await;

    assert!(!output.is_error);
    assert!(output.text.starts_with("No models found."));
}

#[tokio::test]
async fn test_models_not_supported() {
    let harness = TestHarness::with_provider(MockProvider::new().with_failure(
        Operation::Models,
        Some(404),
        "HTTP 404 Not Found: ",
    ));

    let output = harness.call("list_models", json!({})).await;

    assert!(!output.is_error);
    assert!(
        output
            .text
            .starts_with("Model listing is not supported by this provider.")
    );
}

// ============================================================================
// create_embedding
// ============================================================================

#[tokio::test]
async fn test_embedding_summary() {
    let vector: Vec<f64> = (1..=12).map(|i| f64::from(i) / 100.0).collect();
    let summary = EmbeddingSummary::from_vector(Some("text-embedding-ada-002".into()), &vector, 3);
    let harness = TestHarness::with_provider(MockProvider::new().with_embedding(summary));

    let output = harness
        .call("create_embedding", json!({"input": "x"}))
        .await;

    assert!(!output.is_error);
    assert_eq!(
        output.text,
        "Embedding generated:\n\
         Model: text-embedding-ada-002\n\
         Dimensions: 12\n\
         First 10 values: 0.0100, 0.0200, 0.0300, 0.0400, 0.0500, 0.0600, 0.0700, 0.0800, 0.0900, 0.1000...\n\
         Total tokens: 3"
    );
}

#[tokio::test]
async fn test_embedding_not_supported() {
    let harness = TestHarness::with_provider(MockProvider::new().with_failure(
        Operation::Embed,
        Some(404),
        "HTTP 404 Not Found: ",
    ));

    let output = harness
        .call("create_embedding", json!({"input": "x"}))
        .await;

    assert!(!output.is_error);
    assert!(output.text.contains("not supported by this provider"));
    assert!(output.text.starts_with("Embeddings are not supported"));
}

#[tokio::test]
async fn test_embedding_missing_data_is_error() {
    let output = TestHarness::new()
        .call("create_embedding", json!({"input": "x"}))
        .await;

    assert!(output.is_error);
    assert_eq!(output.text, "Error: No embedding was generated");
}

#[tokio::test]
async fn test_embedding_server_error_passes_through() {
    let harness = TestHarness::with_provider(MockProvider::new().with_failure(
        Operation::Embed,
        Some(500),
        "HTTP 500 Internal Server Error: overloaded",
    ));

    let output = harness
        .call("create_embedding", json!({"input": "x"}))
        .await;

    assert!(output.is_error);
    assert_eq!(
        output.text,
        "Error: HTTP 500 Internal Server Error: overloaded"
    );
}
