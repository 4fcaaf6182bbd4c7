//! Integration tests for the chat_completion tool.

use ferry_core::{MockProvider, Operation, Role};
use serde_json::json;

use crate::common::TestHarness;

#[tokio::test]
async fn test_chat_returns_reply_text() {
    let harness = TestHarness::with_provider(MockProvider::new().with_chat_reply("hello"));

    let output = harness
        .call(
            "chat_completion",
            json!({"messages": [{"role": "user", "content": "hi"}]}),
        )
        .await;

    assert!(!output.is_error);
    assert_eq!(output.text, "hello");
    assert_eq!(harness.provider.calls(), vec![Operation::Chat]);
}

#[tokio::test]
async fn test_chat_without_content_says_no_response() {
    let harness = TestHarness::new();

    let output = harness
        .call(
            "chat_completion",
            json!({"messages": [{"role": "user", "content": "hi"}]}),
        )
        .await;

    assert!(!output.is_error);
    assert_eq!(output.text, "No response");
}

#[tokio::test]
async fn test_chat_forwards_conversation_and_options() {
    let harness = TestHarness::with_provider(MockProvider::new().with_chat_reply("ok"));

    harness
        .call(
            "chat_completion",
            json!({
                "messages": [
                    {"role": "system", "content": "be brief"},
                    {"role": "developer", "content": "hi"}
                ],
                "model": "gpt-4o-mini",
                "temperature": 0.2,
                "max_tokens": 100,
                "stream": true
            }),
        )
        .await;

    let requests = harness.provider.chat_requests();
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    assert_eq!(request.messages.len(), 2);
    assert_eq!(request.messages[0].role, Role::System);
    assert_eq!(request.messages[1].role, Role::User);
    assert_eq!(request.model, "gpt-4o-mini");
    assert_eq!(request.temperature, Some(0.2));
    assert_eq!(request.max_tokens, Some(100));
    assert!(request.stream);
}

#[tokio::test]
async fn test_chat_upstream_error_is_reported() {
    let harness = TestHarness::with_provider(MockProvider::new().with_failure(
        Operation::Chat,
        Some(401),
        "HTTP 401 Unauthorized: invalid api key",
    ));

    let output = harness
        .call(
            "chat_completion",
            json!({"messages": [{"role": "user", "content": "hi"}]}),
        )
        .await;

    assert!(output.is_error);
    assert_eq!(output.text, "Error: HTTP 401 Unauthorized: invalid api key");
}

#[tokio::test]
async fn test_chat_not_found_is_not_rewritten() {
    let harness = TestHarness::with_provider(MockProvider::new().with_failure(
        Operation::Chat,
        Some(404),
        "HTTP 404 Not Found: model does not exist",
    ));

    let output = harness
        .call(
            "chat_completion",
            json!({"messages": [{"role": "user", "content": "hi"}]}),
        )
        .await;

    assert!(output.is_error);
    assert!(output.text.starts_with("Error: HTTP 404"));
}
