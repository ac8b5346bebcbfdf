//! Wire types for the Gemini `generateContent` method.

use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A piece of message content. Only text parts are produced or consumed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Part {
    /// Text content
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// A turn in the conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Content {
    /// "user" or "model"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Content parts
    #[serde(default)]
    pub parts: Vec<Part>,
}

/// Sampling and output-format settings.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    /// Sampling temperature
    pub temperature: f32,
    /// Output MIME type, `application/json` for structured output
    pub response_mime_type: String,
    /// Shape the reply must follow
    pub response_schema: Value,
}

/// Request body for `models/{model}:generateContent`.
#[derive(Debug, Clone, Serialize, Builder, Getters)]
#[serde(rename_all = "camelCase")]
#[builder(setter(into))]
pub struct GenerateContentRequest {
    /// Conversation contents
    contents: Vec<Content>,
    /// Generation settings
    generation_config: GenerationConfig,
}

impl GenerateContentRequest {
    /// Creates a new builder for GenerateContentRequest.
    pub fn builder() -> GenerateContentRequestBuilder {
        GenerateContentRequestBuilder::default()
    }
}

/// A response candidate.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// Generated content
    #[serde(default)]
    pub content: Option<Content>,
    /// Reason generation stopped
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Token accounting.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    /// Tokens in the prompt
    #[serde(default)]
    pub prompt_token_count: Option<u32>,
    /// Tokens across candidates
    #[serde(default)]
    pub candidates_token_count: Option<u32>,
    /// Total tokens
    #[serde(default)]
    pub total_token_count: Option<u32>,
}

/// Response body for `generateContent`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    /// Response candidates
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    /// Token usage
    #[serde(default)]
    pub usage_metadata: Option<UsageMetadata>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate, `None` when there is none.
    pub fn text(&self) -> Option<String> {
        let text: String = self
            .candidates
            .first()?
            .content
            .as_ref()?
            .parts
            .iter()
            .filter_map(|part| part.text.as_deref())
            .collect();

        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_joins_parts_of_first_candidate() {
        let response: GenerateContentResponse = serde_json::from_value(serde_json::json!({
            "candidates": [
                {"content": {"role": "model", "parts": [{"text": "{\"a\":"}, {"text": "1}"}]}},
                {"content": {"role": "model", "parts": [{"text": "ignored"}]}}
            ]
        }))
        .unwrap();
        assert_eq!(response.text().as_deref(), Some("{\"a\":1}"));
    }

    #[test]
    fn text_is_none_without_candidates_or_parts() {
        let empty: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert!(empty.text().is_none());

        let blocked: GenerateContentResponse = serde_json::from_value(serde_json::json!({
            "candidates": [{"finishReason": "SAFETY"}]
        }))
        .unwrap();
        assert!(blocked.text().is_none());

        let blank: GenerateContentResponse = serde_json::from_value(serde_json::json!({
            "candidates": [{"content": {"parts": [{"text": "  "}]}}]
        }))
        .unwrap();
        assert!(blank.text().is_none());
    }
}
