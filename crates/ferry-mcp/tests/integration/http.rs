//! End-to-end tests: tool calls through `OpenAiClient` against a mock
//! provider endpoint.

use ferry_client::OpenAiClient;
use ferry_core::ProviderConfig;
use ferry_mcp::{ProviderTools, dispatch};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::common::ToolOutput;

fn tools_for(server: &MockServer) -> ProviderTools {
    let config = ProviderConfig::new(Some("sk-test".to_string()), Some(server.uri()))
        .expect("config should build");
    ProviderTools::new(OpenAiClient::new(config).expect("client should build"))
}

#[tokio::test]
async fn test_image_count_reflects_returned_urls() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/images/generations"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                {"url": "https://img/1.png"},
                {"b64_json": "aGVsbG8="},
                {"url": "https://img/2.png"}
            ]
        })))
        .mount(&server)
        .await;

    let tools = tools_for(&server);
    let output = ToolOutput::from(
        dispatch(&tools, "image_generation", json!({"prompt": "a cat", "n": 3})).await,
    );

    assert!(!output.is_error);
    assert_eq!(output.text, "Generated 2 image(s):\nhttps://img/1.png\nhttps://img/2.png");
}

#[tokio::test]
async fn test_streamed_chat_without_text_says_no_response() {
    let server = MockServer::start().await;
    let body = [
        r#"{"choices":[{"delta":{"role":"assistant","content":""}}]}"#,
        r#"{"choices":[{"delta":{},"finish_reason":"stop"}]}"#,
        "[DONE]",
    ]
    .iter()
    .map(|data| format!("data: {data}\n\n"))
    .collect::<String>();
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "text/event-stream")
                .set_body_string(body),
        )
        .mount(&server)
        .await;

    let tools = tools_for(&server);
    let output = ToolOutput::from(
        dispatch(
            &tools,
            "chat_completion",
            json!({
                "messages": [{"role": "user", "content": "hi"}],
                "stream": true
            }),
        )
        .await,
    );

    assert!(!output.is_error);
    assert_eq!(output.text, "No response");
}

#[tokio::test]
async fn test_missing_embeddings_endpoint_is_explained() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/embeddings"))
        .respond_with(ResponseTemplate::new(404).set_body_string("404 page not found"))
        .mount(&server)
        .await;

    let tools = tools_for(&server);
    let output =
        ToolOutput::from(dispatch(&tools, "create_embedding", json!({"input": "x"})).await);

    assert!(!output.is_error);
    assert!(output.text.starts_with("Embeddings are not supported"));
}
