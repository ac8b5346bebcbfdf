//! Conversions between TubeRank types and Gemini wire types.

use crate::gemini::dto::{Content, GenerateContentRequest, GenerationConfig, Part};
use crate::gemini::{GenerateContentResponse, TEMPERATURE};
use crate::{build_prompt, response_schema};
use tuberank_core::{GenerationRequest, GenerationResult};
use tuberank_error::{GenerationError, GenerationErrorKind};

/// Builds the `generateContent` body for a generation request.
pub fn to_generate_content_request(
    request: &GenerationRequest,
) -> Result<GenerateContentRequest, GenerationError> {
    let contents = vec![Content {
        role: Some("user".to_string()),
        parts: vec![Part {
            text: Some(build_prompt(request)),
        }],
    }];

    let generation_config = GenerationConfig {
        temperature: TEMPERATURE,
        response_mime_type: "application/json".to_string(),
        response_schema: response_schema(),
    };

    GenerateContentRequest::builder()
        .contents(contents)
        .generation_config(generation_config)
        .build()
        .map_err(|e| {
            GenerationError::new(GenerationErrorKind::Http(format!(
                "Failed to build request: {}",
                e
            )))
        })
}

/// Extracts and decodes the structured result from a response.
///
/// A response without text is an `EmptyResponse`; text that does not match
/// the result shape is a `Decode` failure. Nothing partial is returned.
pub fn from_generate_content_response(
    response: &GenerateContentResponse,
) -> Result<GenerationResult, GenerationError> {
    let text = response
        .text()
        .ok_or_else(|| GenerationError::new(GenerationErrorKind::EmptyResponse))?;

    serde_json::from_str(&text)
        .map_err(|e| GenerationError::new(GenerationErrorKind::Decode(e.to_string())))
}
