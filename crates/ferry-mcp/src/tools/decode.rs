//! Argument decoding: untyped tool arguments into typed requests.
//!
//! Every function here is total over `serde_json::Value`. Required fields
//! are enforced; optional fields that are absent or of the wrong type fall
//! back to their defaults.

use ferry_core::{
    ChatMessage, ChatRequest, EmbeddingRequest, Error, ImageQuality, ImageRequest,
    ModelListRequest, Result, Role,
};
use serde_json::{Map, Value};

type Object = Map<String, Value>;

fn object(args: &Value) -> Result<&Object> {
    args.as_object().ok_or(Error::InvalidArguments)
}

fn optional_str<'a>(args: &'a Object, key: &str) -> Option<&'a str> {
    args.get(key).and_then(Value::as_str)
}

fn optional_u32(args: &Object, key: &str) -> Option<u32> {
    args.get(key)
        .and_then(Value::as_u64)
        .and_then(|n| u32::try_from(n).ok())
}

fn required_str<'a>(args: &'a Object, key: &str) -> Result<&'a str> {
    optional_str(args, key).ok_or_else(|| Error::missing_field(key))
}

/// Decodes `chat_completion` arguments.
///
/// `messages` must be a non-empty array of `{role, content}` objects with
/// string values. Unrecognized roles become `user`.
pub fn chat_request(args: &Value) -> Result<ChatRequest> {
    let args = object(args)?;

    let raw = args
        .get("messages")
        .and_then(Value::as_array)
        .filter(|messages| !messages.is_empty())
        .ok_or_else(|| Error::missing_field("messages"))?;

    let messages = raw.iter().map(chat_message).collect::<Result<Vec<_>>>()?;

    let mut request = ChatRequest::new(messages);
    if let Some(model) = optional_str(args, "model") {
        request.model = model.to_string();
    }
    request.temperature = args.get("temperature").and_then(Value::as_f64);
    request.max_tokens = optional_u32(args, "max_tokens");
    request.stream = args.get("stream").and_then(Value::as_bool).unwrap_or(false);
    Ok(request)
}

fn chat_message(value: &Value) -> Result<ChatMessage> {
    let role = value.get("role").and_then(Value::as_str);
    let content = value.get("content").and_then(Value::as_str);
    match (role, content) {
        (Some(role), Some(content)) => Ok(ChatMessage::new(Role::parse_lenient(role), content)),
        _ => Err(Error::InvalidMessageFormat),
    }
}

/// Decodes `image_generation` arguments. `prompt` must be a non-empty string.
pub fn image_request(args: &Value) -> Result<ImageRequest> {
    let args = object(args)?;

    let prompt = required_str(args, "prompt")?;
    if prompt.is_empty() {
        return Err(Error::missing_field("prompt"));
    }

    let mut request = ImageRequest::new(prompt);
    if let Some(model) = optional_str(args, "model") {
        request.model = model.to_string();
    }
    if let Some(size) = optional_str(args, "size") {
        request.size = size.to_string();
    }
    request.quality = ImageQuality::from_arg(optional_str(args, "quality"));
    if let Some(count) = optional_u32(args, "n") {
        request.count = count;
    }
    Ok(request)
}

/// Decodes `list_models` arguments.
///
/// Arguments are entirely optional: anything that is not an object with a
/// string `filter` means "no filter".
pub fn model_list_request(args: &Value) -> ModelListRequest {
    let filter = args
        .get("filter")
        .and_then(Value::as_str)
        .map(str::to_string);
    ModelListRequest::new(filter)
}

/// Decodes `create_embedding` arguments.
pub fn embedding_request(args: &Value) -> Result<EmbeddingRequest> {
    let args = object(args)?;

    let mut request = EmbeddingRequest::new(required_str(args, "input")?);
    if let Some(model) = optional_str(args, "model") {
        request.model = model.to_string();
    }
    Ok(request)
}
