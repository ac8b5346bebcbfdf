//! Error types for TubeRank.
//!
//! Every subsystem error records the file and line where it was created.
//! [`TubeRankError`] wraps them all for callers that cross crate boundaries.

mod config;
mod generation;
mod tui;

pub use config::ConfigError;
pub use generation::{GenerationError, GenerationErrorKind};
pub use tui::{TuiError, TuiErrorKind};

/// Crate-level error variants.
#[derive(Debug, derive_more::From, derive_more::Display)]
pub enum TubeRankErrorKind {
    /// Generation request failed
    #[display("{}", _0)]
    Generation(GenerationError),
    /// Configuration could not be loaded
    #[display("{}", _0)]
    Config(ConfigError),
    /// Terminal UI failure
    #[display("{}", _0)]
    Tui(TuiError),
}

/// TubeRank error with kind discrimination.
#[derive(Debug)]
pub struct TubeRankError(Box<TubeRankErrorKind>);

impl TubeRankError {
    /// Create a new error from a kind.
    pub fn new(kind: TubeRankErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &TubeRankErrorKind {
        &self.0
    }
}

impl std::fmt::Display for TubeRankError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TubeRank Error: {}", self.0)
    }
}

impl std::error::Error for TubeRankError {}

impl<T> From<T> for TubeRankError
where
    T: Into<TubeRankErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for TubeRank operations.
pub type TubeRankResult<T> = std::result::Result<T, TubeRankError>;
