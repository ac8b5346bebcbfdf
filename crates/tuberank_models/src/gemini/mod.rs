//! Google Gemini `generateContent` client.

mod client;
mod config;
mod conversions;
mod dto;

pub use client::GeminiClient;
pub use config::{DEFAULT_BASE_URL, DEFAULT_MODEL, GeminiConfig, TEMPERATURE};
pub use dto::{GenerateContentRequest, GenerateContentResponse};
