//! Structured generation result.

use serde::{Deserialize, Serialize};

/// A thumbnail concept: the scene to shoot and the overlay text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThumbnailIdea {
    /// Visual description of the thumbnail image
    pub description: String,
    /// Short overlay text, a handful of words
    pub text: String,
}

/// Publishing plan returned by the model.
///
/// The model is asked for 5 titles, 20-30 keywords, 5-10 hashtags and
/// 3 thumbnail ideas, but only the shape is enforced when decoding.
/// `category` is the model's own classification and may differ from the
/// category the user picked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResult {
    /// Candidate video titles
    pub titles: Vec<String>,
    /// Formatted video description
    pub description: String,
    /// Search tags
    pub keywords: Vec<String>,
    /// Hashtags including the leading `#`
    pub hashtags: Vec<String>,
    /// Suggested platform category
    pub category: String,
    /// Why this content should work with the recommendation algorithm
    pub algorithm_strategy: String,
    /// Thumbnail concepts
    pub thumbnail_ideas: Vec<ThumbnailIdea>,
}
