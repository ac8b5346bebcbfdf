//! Gemini client implementing [`SeoGenerator`].

use crate::gemini::conversions::{from_generate_content_response, to_generate_content_request};
use crate::gemini::{GeminiConfig, GenerateContentResponse};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, error, info, instrument, warn};
use tuberank_core::{GenerationRequest, GenerationResult};
use tuberank_error::{GenerationError, GenerationErrorKind};
use tuberank_interface::SeoGenerator;

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Client for the Gemini `generateContent` method.
///
/// Each call is a single POST: no retries, no caching, no rate limiting.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    config: GeminiConfig,
}

impl GeminiClient {
    /// Creates a new client.
    ///
    /// A missing API key is logged but not fatal; requests are still sent
    /// and are expected to be rejected by the service.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    #[instrument(skip_all, fields(model = %config.model()))]
    pub fn new(config: GeminiConfig) -> Result<Self, GenerationError> {
        if !config.has_api_key() {
            error!("Gemini API key is missing; requests will be sent without credentials");
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(*config.timeout_secs()))
            .build()
            .map_err(|e| {
                GenerationError::new(GenerationErrorKind::Http(format!(
                    "Failed to create HTTP client: {}",
                    e
                )))
            })?;

        debug!(endpoint = %config.endpoint(), "Created Gemini client");

        Ok(Self { client, config })
    }

    /// Returns the client configuration.
    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    /// Sends one generation request and decodes the structured reply.
    ///
    /// # Errors
    ///
    /// - `Http` when the request cannot be sent or the body cannot be read
    /// - `Api` when the service answers with a non-success status
    /// - `EmptyResponse` when the reply carries no text
    /// - `Decode` when the text does not match the result shape
    #[instrument(skip(self, request), fields(model = %self.config.model(), category = %request.category().key()))]
    pub async fn generate_content(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResult, GenerationError> {
        let body = to_generate_content_request(request)?;

        debug!(
            topic_chars = request.topic().chars().count(),
            "Sending generateContent request"
        );

        let response = self
            .client
            .post(self.config.endpoint())
            .header(
                API_KEY_HEADER,
                self.config.api_key().as_deref().unwrap_or_default(),
            )
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "HTTP request failed");
                GenerationError::new(GenerationErrorKind::Http(format!("Request failed: {}", e)))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!(status = %status, error = %error_text, "Gemini API error");
            return Err(GenerationError::new(GenerationErrorKind::Api {
                status: status.as_u16(),
                message: error_text,
            }));
        }

        let payload: GenerateContentResponse = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to read response body");
            GenerationError::new(GenerationErrorKind::Http(format!(
                "Failed to read response body: {}",
                e
            )))
        })?;

        if let Some(usage) = &payload.usage_metadata {
            debug!(
                prompt_tokens = ?usage.prompt_token_count,
                output_tokens = ?usage.candidates_token_count,
                total_tokens = ?usage.total_token_count,
                "Token usage"
            );
        }

        let result = match from_generate_content_response(&payload) {
            Ok(result) => result,
            Err(e) if e.kind().is_decode_failure() => {
                error!(error = %e, "Model reply did not match the result shape");
                return Err(e);
            }
            Err(e) => {
                error!(error = %e, "Model returned no text");
                return Err(e);
            }
        };

        if result.titles.len() != 5 || result.thumbnail_ideas.len() != 3 {
            warn!(
                titles = result.titles.len(),
                thumbnails = result.thumbnail_ideas.len(),
                "Result counts differ from the requested shape"
            );
        }

        info!(
            titles = result.titles.len(),
            keywords = result.keywords.len(),
            hashtags = result.hashtags.len(),
            "Generation completed"
        );

        Ok(result)
    }
}

#[async_trait]
impl SeoGenerator for GeminiClient {
    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResult, GenerationError> {
        self.generate_content(request).await
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }

    fn model_name(&self) -> &str {
        self.config.model()
    }
}
