//! Error types for ferry-core.

/// Errors that can occur while configuring the provider, decoding tool
/// arguments, or talking to the upstream API.
///
/// The `Display` text of each variant is what an MCP client ultimately
/// sees after the dispatcher prefixes it with `"Error: "`.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The provider API key was not supplied at startup.
    #[error("API_KEY environment variable is not set")]
    MissingApiKey,

    /// Other startup configuration problem (e.g. an unusable header value).
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },

    /// Tool arguments were absent or not an object.
    #[error("Invalid arguments provided")]
    InvalidArguments,

    /// A required argument was absent, null, empty, or of the wrong type.
    #[error("Missing required field: {0}")]
    MissingRequiredField(String),

    /// A chat message was not an object with string `role` and `content`.
    #[error("Invalid message format")]
    InvalidMessageFormat,

    /// No tool is registered under this name.
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// The provider answered with a failure, or could not be reached.
    ///
    /// `status` is the HTTP status when one was received.
    #[error("{message}")]
    Upstream {
        /// HTTP status code, if the request got that far
        status: Option<u16>,
        /// Raw failure text
        message: String,
    },

    /// The embeddings endpoint returned no vectors.
    #[error("No embedding was generated")]
    NoEmbeddingGenerated,

    /// A provider payload could not be decoded.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience `Result` alias used throughout Ferry.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Creates an upstream error without an HTTP status.
    pub fn upstream<S: Into<String>>(message: S) -> Self {
        Error::Upstream {
            status: None,
            message: message.into(),
        }
    }

    /// Creates an upstream error for a non-success HTTP response.
    pub fn upstream_status<S: Into<String>>(status: u16, message: S) -> Self {
        Error::Upstream {
            status: Some(status),
            message: message.into(),
        }
    }

    /// Creates a configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Creates a missing-field error.
    pub fn missing_field<S: Into<String>>(field: S) -> Self {
        Error::MissingRequiredField(field.into())
    }

    /// Returns whether this error was raised while validating arguments.
    ///
    /// Validation errors are produced before any network call is made.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::InvalidArguments | Error::MissingRequiredField(_) | Error::InvalidMessageFormat
        )
    }

    /// Returns the HTTP status carried by an upstream error.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Upstream { status, .. } => *status,
            _ => None,
        }
    }
}
