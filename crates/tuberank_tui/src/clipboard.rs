//! Copy targets and clipboard access.

use crossterm::clipboard::CopyToClipboard;
use crossterm::execute;
use std::io::{Stdout, Write};
use tuberank_core::GenerationResult;
use tuberank_error::{TuiError, TuiErrorKind};

/// A piece of a result the user can copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CopyTarget {
    /// Overlay text of the thumbnail idea at this index
    ThumbnailText(usize),
    /// Title at this index
    Title(usize),
    /// Full description
    Description,
    /// All keywords
    Keywords,
    /// All hashtags
    Hashtags,
}

impl CopyTarget {
    /// Every copy target of `result`, in on-screen order.
    pub fn all_for(result: &GenerationResult) -> Vec<CopyTarget> {
        let mut targets: Vec<CopyTarget> = (0..result.thumbnail_ideas.len())
            .map(CopyTarget::ThumbnailText)
            .collect();
        targets.extend((0..result.titles.len()).map(CopyTarget::Title));
        targets.extend([
            CopyTarget::Description,
            CopyTarget::Keywords,
            CopyTarget::Hashtags,
        ]);
        targets
    }

    /// Text placed on the clipboard for this target.
    ///
    /// Returns `None` when an indexed target is out of range for `result`.
    pub fn text(self, result: &GenerationResult) -> Option<String> {
        match self {
            CopyTarget::ThumbnailText(i) => result.thumbnail_ideas.get(i).map(|t| t.text.clone()),
            CopyTarget::Title(i) => result.titles.get(i).cloned(),
            CopyTarget::Description => Some(result.description.clone()),
            CopyTarget::Keywords => Some(keywords_text(&result.keywords)),
            CopyTarget::Hashtags => Some(hashtags_text(&result.hashtags)),
        }
    }

    /// Short human-readable name.
    pub fn label(self) -> String {
        match self {
            CopyTarget::ThumbnailText(i) => format!("thumbnail text {}", i + 1),
            CopyTarget::Title(i) => format!("title {}", i + 1),
            CopyTarget::Description => "description".to_string(),
            CopyTarget::Keywords => "keywords".to_string(),
            CopyTarget::Hashtags => "hashtags".to_string(),
        }
    }
}

/// Keywords joined with commas, no padding.
pub fn keywords_text(keywords: &[String]) -> String {
    keywords.join(",")
}

/// Hashtags joined with single spaces.
pub fn hashtags_text(hashtags: &[String]) -> String {
    hashtags.join(" ")
}

/// Destination for copied text.
pub trait Clipboard {
    /// Place `text` on the clipboard.
    ///
    /// # Errors
    ///
    /// Returns a clipboard error if the text could not be delivered.
    fn copy(&mut self, text: &str) -> Result<(), TuiError>;
}

/// Clipboard that asks the terminal to copy through an OSC 52 sequence.
///
/// Works over SSH and inside multiplexers that forward OSC 52.
#[derive(Debug)]
pub struct Osc52Clipboard<W = Stdout> {
    writer: W,
}

impl Osc52Clipboard<Stdout> {
    /// Clipboard writing to standard output.
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> Osc52Clipboard<W> {
    /// Clipboard writing escape sequences to `writer`.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Recover the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Clipboard for Osc52Clipboard<W> {
    #[tracing::instrument(skip_all, fields(len = text.len()))]
    fn copy(&mut self, text: &str) -> Result<(), TuiError> {
        execute!(self.writer, CopyToClipboard::to_clipboard_from(text))
            .map_err(|e| TuiError::new(TuiErrorKind::Clipboard(e.to_string())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tuberank_core::ThumbnailIdea;

    fn result() -> GenerationResult {
        GenerationResult {
            titles: vec!["t1".into(), "t2".into()],
            description: "desc".into(),
            keywords: vec!["a".into(), "b".into(), "c".into()],
            hashtags: vec!["#x".into(), "#y".into()],
            category: "Tech".into(),
            algorithm_strategy: "strategy".into(),
            thumbnail_ideas: vec![ThumbnailIdea {
                description: "scene".into(),
                text: "overlay".into(),
            }],
        }
    }

    #[test]
    fn keywords_join_with_bare_commas() {
        let keywords = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        assert_eq!(keywords_text(&keywords), "a,b,c");
    }

    #[test]
    fn hashtags_join_with_single_spaces() {
        let hashtags = vec!["#x".to_string(), "#y".to_string()];
        assert_eq!(hashtags_text(&hashtags), "#x #y");
    }

    #[test]
    fn targets_follow_display_order() {
        let targets = CopyTarget::all_for(&result());
        assert_eq!(
            targets,
            vec![
                CopyTarget::ThumbnailText(0),
                CopyTarget::Title(0),
                CopyTarget::Title(1),
                CopyTarget::Description,
                CopyTarget::Keywords,
                CopyTarget::Hashtags,
            ]
        );
    }

    #[test]
    fn target_text_reads_from_result() {
        let result = result();
        assert_eq!(CopyTarget::Title(1).text(&result).as_deref(), Some("t2"));
        assert_eq!(
            CopyTarget::ThumbnailText(0).text(&result).as_deref(),
            Some("overlay")
        );
        assert_eq!(CopyTarget::Keywords.text(&result).as_deref(), Some("a,b,c"));
        assert_eq!(CopyTarget::Title(7).text(&result), None);
    }

    #[test]
    fn osc52_writes_escape_sequence() {
        let mut clipboard = Osc52Clipboard::new(Vec::new());
        clipboard.copy("hello").unwrap();
        let written = String::from_utf8(clipboard.into_inner()).unwrap();
        assert!(written.starts_with("\x1b]52;"));
    }
}
