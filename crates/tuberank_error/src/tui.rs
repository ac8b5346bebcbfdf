//! Terminal UI error types.

/// Kinds of terminal UI errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum TuiErrorKind {
    /// Terminal setup, drawing or event polling failed
    #[display("Terminal error: {}", _0)]
    Terminal(String),
    /// Writing to the clipboard failed
    #[display("Clipboard error: {}", _0)]
    Clipboard(String),
}

/// Terminal UI error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("TUI Error: {} at line {} in {}", kind, line, file)]
pub struct TuiError {
    /// The kind of error that occurred
    pub kind: TuiErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl TuiError {
    /// Create a new TUI error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: TuiErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

impl From<std::io::Error> for TuiError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(TuiErrorKind::Terminal(err.to_string()))
    }
}
