//! Provider configuration.
//!
//! A process talks to exactly one provider: one API key, one base URL.
//! Both come from the environment (or the matching CLI flags).

use crate::error::{Error, Result};
use std::fmt;

/// Environment variable holding the provider API key.
pub const API_KEY_VAR: &str = "API_KEY";

/// Environment variable overriding the provider base URL.
pub const BASE_URL_VAR: &str = "API_BASE_URL";

/// Base URL used when no override is given.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Credentials and endpoint for the upstream provider.
///
/// Read-only once built; share it freely across concurrent calls.
#[derive(Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    api_key: String,
    base_url: String,
}

impl ProviderConfig {
    /// Builds a configuration from an optional key and base URL.
    ///
    /// A missing or blank key is [`Error::MissingApiKey`]. A missing or
    /// blank base URL selects [`DEFAULT_BASE_URL`]. Trailing slashes are
    /// trimmed so endpoint paths can be appended directly.
    pub fn new(api_key: Option<String>, base_url: Option<String>) -> Result<Self> {
        let api_key = api_key
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .ok_or(Error::MissingApiKey)?;

        let base_url = base_url
            .map(|u| u.trim().trim_end_matches('/').to_string())
            .filter(|u| !u.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        tracing::debug!(base_url = %base_url, "Provider configured");

        Ok(Self { api_key, base_url })
    }

    /// The provider API key.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// The provider base URL, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns `true` when the default provider endpoint is in use.
    pub fn is_default_endpoint(&self) -> bool {
        self.base_url == DEFAULT_BASE_URL
    }

    /// Joins an endpoint path onto the base URL.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}
