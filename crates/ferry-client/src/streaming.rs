//! Streamed chat completions.
//!
//! The provider sends server-sent events whose `data:` payloads are chat
//! chunks, terminated by `[DONE]`. We only need the concatenated text.

use crate::wire::ChatChunk;
use eventsource_stream::Eventsource;
use ferry_core::{ChatReply, Error, Result};
use futures::StreamExt;

const DONE_MARKER: &str = "[DONE]";

/// Reads a streamed chat response to completion and concatenates the text
/// fragments in arrival order.
///
/// A stream that ends without `[DONE]` is accepted as complete. A stream
/// whose deltas are all absent or empty yields an empty [`ChatReply`].
pub(crate) async fn collect_chat_stream(response: reqwest::Response) -> Result<ChatReply> {
    let mut events = Box::pin(response.bytes_stream().eventsource());
    let mut text = String::new();
    let mut fragments = 0usize;

    while let Some(event) = events.next().await {
        let event = event.map_err(|e| Error::upstream(format!("Stream error: {e}")))?;
        let data = event.data.trim();

        if data.is_empty() {
            continue;
        }
        if data == DONE_MARKER {
            break;
        }

        let chunk: ChatChunk = serde_json::from_str(data)?;
        if let Some(error) = &chunk.error {
            return Err(Error::upstream(error.message.clone()));
        }
        if let Some(fragment) = chunk.first_fragment().filter(|f| !f.is_empty()) {
            text.push_str(fragment);
            fragments += 1;
        }
    }

    tracing::debug!(fragments, chars = text.len(), "Chat stream complete");

    Ok(ChatReply {
        content: (fragments > 0).then_some(text),
    })
}
