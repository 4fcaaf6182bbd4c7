//! Unsupported-feature detection for upstream failures.
//!
//! OpenAI-compatible providers often implement only chat. When an
//! endpoint is missing they answer 404 or 405, and the tool layer turns
//! that into a friendly explanation instead of a raw error.

use crate::error::Error;

/// Coarse classification of an upstream failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorClass {
    /// Endpoint or resource does not exist (404).
    NotFound,
    /// Endpoint exists but rejects the method (405).
    MethodNotAllowed,
    /// Anything else.
    Other,
}

impl ErrorClass {
    /// Returns `true` for classes that indicate a missing provider feature.
    pub fn is_unsupported(&self) -> bool {
        !matches!(self, ErrorClass::Other)
    }
}

/// Classifies an error message by the status text it contains.
///
/// Case-insensitive. `NotFound` is checked before `MethodNotAllowed`.
pub fn classify_message(message: &str) -> ErrorClass {
    let message = message.to_lowercase();
    if message.contains("404") || message.contains("not found") {
        ErrorClass::NotFound
    } else if message.contains("405") || message.contains("method not allowed") {
        ErrorClass::MethodNotAllowed
    } else {
        ErrorClass::Other
    }
}

/// Classifies an error, preferring a structured HTTP status when present.
pub fn classify_error(error: &Error) -> ErrorClass {
    match error.status() {
        Some(404) => ErrorClass::NotFound,
        Some(405) => ErrorClass::MethodNotAllowed,
        _ => classify_message(&error.to_string()),
    }
}
