//! Content generation error types.

/// Conditions under which a generation attempt fails.
///
/// `Validation` is raised locally before any request is issued. `Http`,
/// `Api` and `EmptyResponse` are service failures. `Decode` means the model
/// replied with text that does not match the expected result shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum GenerationErrorKind {
    /// User input rejected before a request was built
    #[display("{}", _0)]
    Validation(String),
    /// Transport-level failure talking to the model endpoint
    #[display("HTTP request failed: {}", _0)]
    Http(String),
    /// Endpoint answered with a non-success status
    #[display("Gemini API error (status {}): {}", status, message)]
    Api {
        /// HTTP status code
        status: u16,
        /// Error body returned by the service
        message: String,
    },
    /// Successful response without any text payload
    #[display("No response received from Gemini")]
    EmptyResponse,
    /// Text payload could not be parsed into a generation result
    #[display("Failed to decode generation result: {}", _0)]
    Decode(String),
}

impl GenerationErrorKind {
    /// True for failures reported by, or on the way to, the external service.
    pub fn is_service_failure(&self) -> bool {
        matches!(
            self,
            GenerationErrorKind::Http(_)
                | GenerationErrorKind::Api { .. }
                | GenerationErrorKind::EmptyResponse
        )
    }

    /// True when the model's text could not be decoded.
    pub fn is_decode_failure(&self) -> bool {
        matches!(self, GenerationErrorKind::Decode(_))
    }
}

/// Generation error with source location tracking.
///
/// # Examples
///
/// ```
/// use tuberank_error::{GenerationError, GenerationErrorKind};
///
/// let err = GenerationError::new(GenerationErrorKind::EmptyResponse);
/// assert!(err.kind().is_service_failure());
/// assert!(format!("{}", err).contains("No response"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Generation Error: {} at line {} in {}", kind, line, file)]
pub struct GenerationError {
    kind: GenerationErrorKind,
    line: u32,
    file: &'static str,
}

impl GenerationError {
    /// Create a new generation error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GenerationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &GenerationErrorKind {
        &self.kind
    }

    /// Line number where the error was created.
    pub fn line(&self) -> u32 {
        self.line
    }

    /// File where the error was created.
    pub fn file(&self) -> &'static str {
        self.file
    }
}

impl<T> From<T> for GenerationError
where
    T: Into<GenerationErrorKind>,
{
    #[track_caller]
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}
