//! Capability interface between the application and a model backend.
//!
//! The state machine only sees [`SeoGenerator`], so tests can substitute a
//! deterministic fake for the network client.

use async_trait::async_trait;
use std::sync::Arc;
use tuberank_core::{GenerationRequest, GenerationResult};
use tuberank_error::GenerationError;

/// Produces a publishing plan for a video idea.
///
/// Implementations perform at most one external call per invocation and
/// keep no state between calls.
#[async_trait]
pub trait SeoGenerator: Send + Sync {
    /// Generate a result for `request`.
    ///
    /// # Errors
    ///
    /// Returns a service failure when the backend cannot be reached, rejects
    /// the call, or returns no text, and a decode failure when the text does
    /// not match the expected result shape.
    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResult, GenerationError>;

    /// Provider name for logging.
    fn provider_name(&self) -> &'static str;

    /// Model identifier for logging.
    fn model_name(&self) -> &str;
}

#[async_trait]
impl<G> SeoGenerator for Arc<G>
where
    G: SeoGenerator + ?Sized,
{
    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResult, GenerationError> {
        (**self).generate(request).await
    }

    fn provider_name(&self) -> &'static str {
        (**self).provider_name()
    }

    fn model_name(&self) -> &str {
        (**self).model_name()
    }
}
