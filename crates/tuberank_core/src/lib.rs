//! Core data types for TubeRank.
//!
//! This crate holds the closed category set, the per-submission request and
//! the structured result returned by the model, plus logging setup shared
//! by every binary.

mod category;
mod request;
mod result;

pub mod observability;

pub use category::VideoCategory;
pub use request::GenerationRequest;
pub use result::{GenerationResult, ThumbnailIdea};
