//! Terminal front end for TubeRank.
//!
//! [`App`] is the single-flow state machine behind the form. [`ui::draw`]
//! renders it and [`run_tui`] wires both to a real terminal.

mod app;
mod clipboard;
mod input;
mod progress;
mod runner;

pub mod ui;

pub use app::{
    App, Focus, GENERATION_FAILED_MESSAGE, GenerationState, VALIDATION_MESSAGE,
};
pub use clipboard::{Clipboard, CopyTarget, Osc52Clipboard, hashtags_text, keywords_text};
pub use input::{Action, handle_key};
pub use progress::{CAPTIONS, DEFAULT_CAPTION_INTERVAL, ProgressCaptions};
pub use runner::{TuiOptions, run_tui};
