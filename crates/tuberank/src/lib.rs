//! TubeRank turns a video idea into a YouTube publishing package.
//!
//! A topic, an optional audience and a category go to Gemini. The reply is
//! a structured [`GenerationResult`] with titles, a description, keywords,
//! hashtags, thumbnail ideas and a short ranking strategy.
//!
//! This crate re-exports the workspace crates and adds configuration
//! loading for the `tuberank` binary.
//!
//! ```no_run
//! use tuberank::{App, GeminiClient, GeminiConfig, VideoCategory};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = GeminiClient::new(GeminiConfig::new(std::env::var("GEMINI_API_KEY").ok()))?;
//! let mut app = App::new();
//! app.topic = "كيف تبدأ قناة يوتيوب".to_string();
//! app.category = VideoCategory::Education;
//! app.generate_with(&client).await;
//! if let Some(result) = app.result() {
//!     println!("{}", result.titles.join("\n"));
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;

pub use crate::config::{AppConfig, UiConfig};

pub use tuberank_error::{
    ConfigError, GenerationError, GenerationErrorKind, TubeRankError, TubeRankErrorKind,
    TubeRankResult, TuiError, TuiErrorKind,
};

pub use tuberank_core::{
    GenerationRequest, GenerationResult, ThumbnailIdea, VideoCategory,
    observability::{LogTarget, init_logging},
};

pub use tuberank_interface::SeoGenerator;

pub use tuberank_models::{
    DEFAULT_BASE_URL, DEFAULT_MODEL, GeminiClient, GeminiConfig, TEMPERATURE, build_prompt,
    response_schema,
};

pub use tuberank_tui::{
    App, CopyTarget, GENERATION_FAILED_MESSAGE, GenerationState, TuiOptions, VALIDATION_MESSAGE,
    hashtags_text, keywords_text, run_tui,
};
