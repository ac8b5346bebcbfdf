//! Per-submission generation request.

use crate::VideoCategory;
use serde::{Deserialize, Serialize};

/// Inputs for a single generation.
///
/// The topic is expected to be non-empty; the state machine rejects blank
/// topics before building one of these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct GenerationRequest {
    /// The video idea, verbatim from the form
    topic: String,
    /// Target audience, empty when not given
    audience: String,
    /// Category selected by the user
    category: VideoCategory,
}

impl GenerationRequest {
    /// Creates a new request.
    pub fn new(
        topic: impl Into<String>,
        audience: impl Into<String>,
        category: VideoCategory,
    ) -> Self {
        Self {
            topic: topic.into(),
            audience: audience.into(),
            category,
        }
    }
}
