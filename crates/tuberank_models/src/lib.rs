//! Model integration for TubeRank.
//!
//! [`build_prompt`] and [`response_schema`] describe the task to the model;
//! [`GeminiClient`] sends them and decodes the reply.

mod gemini;
mod prompt;
mod schema;

pub use gemini::{
    DEFAULT_BASE_URL, DEFAULT_MODEL, GeminiClient, GeminiConfig, GenerateContentRequest,
    GenerateContentResponse, TEMPERATURE,
};
pub use prompt::build_prompt;
pub use schema::response_schema;
