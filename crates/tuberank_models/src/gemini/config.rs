//! Gemini client configuration.

use serde::{Deserialize, Serialize};

/// Model used when none is configured.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Public Gemini REST endpoint.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Sampling temperature sent with every request.
pub const TEMPERATURE: f32 = 0.7;

const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Settings handed to [`GeminiClient::new`](crate::GeminiClient::new).
///
/// The credential is read once at startup by the configuration loader and
/// carried here; the client never consults the environment itself.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
#[serde(default)]
pub struct GeminiConfig {
    /// API key, absent when not configured
    api_key: Option<String>,
    /// Model identifier
    model: String,
    /// REST base URL, without trailing `/models`
    base_url: String,
    /// Per-request timeout
    timeout_secs: u64,
}

impl GeminiConfig {
    /// Configuration for the public endpoint with the default model.
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            ..Self::default()
        }
    }

    /// Override the model identifier.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Override the REST base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// True when a non-blank key is set.
    pub fn has_api_key(&self) -> bool {
        self.api_key.as_deref().is_some_and(|k| !k.trim().is_empty())
    }

    /// Use `api_key` unless a non-empty key is already set.
    pub fn or_api_key(mut self, api_key: Option<String>) -> Self {
        if self.api_key.as_deref().is_none_or(|k| k.trim().is_empty()) {
            self.api_key = api_key.filter(|k| !k.trim().is_empty());
        }
        self
    }

    /// Full URL of the `generateContent` method for the configured model.
    pub fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl std::fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}
