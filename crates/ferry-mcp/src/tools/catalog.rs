//! Declarations of the provider tools.
//!
//! The schemas advertise the same defaults the decoder applies; the
//! decoder is what enforces them.

use crate::registry::make_tool;
use ferry_core::{
    DEFAULT_CHAT_MODEL, DEFAULT_EMBEDDING_MODEL, DEFAULT_IMAGE_MODEL, DEFAULT_IMAGE_SIZE,
};
use rmcp::model::Tool;
use serde_json::json;

/// Chat completion tool name.
pub const CHAT_COMPLETION: &str = "chat_completion";
/// Image generation tool name.
pub const IMAGE_GENERATION: &str = "image_generation";
/// Model listing tool name.
pub const LIST_MODELS: &str = "list_models";
/// Embedding tool name.
pub const CREATE_EMBEDDING: &str = "create_embedding";

/// All tool names, in declaration order.
pub const TOOL_NAMES: [&str; 4] = [
    CHAT_COMPLETION,
    IMAGE_GENERATION,
    LIST_MODELS,
    CREATE_EMBEDDING,
];

/// Returns the four tool declarations in their stable order.
pub fn tools() -> Vec<Tool> {
    vec![
        chat_completion(),
        image_generation(),
        list_models(),
        create_embedding(),
    ]
}

fn chat_completion() -> Tool {
    make_tool(
        CHAT_COMPLETION,
        "Send messages to OpenAI GPT models and get responses",
        json!({
            "type": "object",
            "properties": {
                "messages": {
                    "type": "array",
                    "items": {
                        "type": "object",
                        "properties": {
                            "role": {
                                "type": "string",
                                "enum": ["system", "user", "assistant"]
                            },
                            "content": { "type": "string" }
                        },
                        "required": ["role", "content"]
                    },
                    "description": "Array of messages in the conversation"
                },
                "model": {
                    "type": "string",
                    "default": DEFAULT_CHAT_MODEL,
                    "description": "Model to use (e.g., gpt-4o, gpt-4o-mini, gpt-3.5-turbo)"
                },
                "temperature": {
                    "type": "number",
                    "default": 0.7,
                    "description": "Sampling temperature (0-2)"
                },
                "max_tokens": {
                    "type": "integer",
                    "description": "Maximum tokens to generate"
                },
                "stream": {
                    "type": "boolean",
                    "default": false,
                    "description": "Stream the response"
                }
            },
            "required": ["messages"]
        }),
    )
}

fn image_generation() -> Tool {
    make_tool(
        IMAGE_GENERATION,
        "Generate images using DALL-E models",
        json!({
            "type": "object",
            "properties": {
                "prompt": {
                    "type": "string",
                    "description": "Text description of the image to generate"
                },
                "model": {
                    "type": "string",
                    "enum": ["dall-e-2", "dall-e-3"],
                    "default": DEFAULT_IMAGE_MODEL,
                    "description": "DALL-E model version"
                },
                "size": {
                    "type": "string",
                    "enum": ["1024x1024", "1792x1024", "1024x1792"],
                    "default": DEFAULT_IMAGE_SIZE,
                    "description": "Image size (dall-e-3 supports all sizes, dall-e-2 only 1024x1024)"
                },
                "quality": {
                    "type": "string",
                    "enum": ["standard", "hd"],
                    "default": "standard",
                    "description": "Image quality (dall-e-3 only)"
                },
                "n": {
                    "type": "integer",
                    "default": 1,
                    "description": "Number of images to generate (1-10 for dall-e-2, 1 for dall-e-3)"
                }
            },
            "required": ["prompt"]
        }),
    )
}

fn list_models() -> Tool {
    make_tool(
        LIST_MODELS,
        "List available OpenAI models",
        json!({
            "type": "object",
            "properties": {
                "filter": {
                    "type": "string",
                    "description": "Optional filter string to match model names"
                }
            }
        }),
    )
}

fn create_embedding() -> Tool {
    make_tool(
        CREATE_EMBEDDING,
        "Create embeddings for text",
        json!({
            "type": "object",
            "properties": {
                "input": {
                    "type": "string",
                    "description": "Text to create embeddings for"
                },
                "model": {
                    "type": "string",
                    "default": DEFAULT_EMBEDDING_MODEL,
                    "description": "Embedding model to use"
                }
            },
            "required": ["input"]
        }),
    )
}
