//! Integration tests for argument validation. Invalid calls must be
//! rejected before the provider is touched.

use serde_json::{Value, json};

use crate::common::TestHarness;

async fn assert_rejected(name: &str, args: Value, expected: &str) {
    let harness = TestHarness::new();
    let output = harness.call(name, args.clone()).await;

    assert!(output.is_error, "{name} {args} was accepted");
    assert_eq!(output.text, expected, "{name} {args}");
    assert!(
        harness.provider.calls().is_empty(),
        "{name} {args} reached the provider"
    );
}

#[tokio::test]
async fn test_chat_missing_messages() {
    assert_rejected(
        "chat_completion",
        json!({}),
        "Error: Missing required field: messages",
    )
    .await;
}

#[tokio::test]
async fn test_chat_empty_messages() {
    assert_rejected(
        "chat_completion",
        json!({"messages": []}),
        "Error: Missing required field: messages",
    )
    .await;
}

#[tokio::test]
async fn test_chat_no_arguments() {
    assert_rejected(
        "chat_completion",
        Value::Null,
        "Error: Invalid arguments provided",
    )
    .await;
}

#[tokio::test]
async fn test_chat_malformed_message() {
    assert_rejected(
        "chat_completion",
        json!({"messages": [{"role": "user"}]}),
        "Error: Invalid message format",
    )
    .await;
}

#[tokio::test]
async fn test_image_missing_prompt() {
    assert_rejected(
        "image_generation",
        json!({"n": 2}),
        "Error: Missing required field: prompt",
    )
    .await;
}

#[tokio::test]
async fn test_image_empty_prompt() {
    assert_rejected(
        "image_generation",
        json!({"prompt": ""}),
        "Error: Missing required field: prompt",
    )
    .await;
}

#[tokio::test]
async fn test_embedding_missing_input() {
    assert_rejected(
        "create_embedding",
        json!({"input": null}),
        "Error: Missing required field: input",
    )
    .await;
}

#[tokio::test]
async fn test_embedding_non_object_arguments() {
    assert_rejected(
        "create_embedding",
        json!(["x"]),
        "Error: Invalid arguments provided",
    )
    .await;
}
