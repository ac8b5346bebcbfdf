//! Shared fixtures for TUI tests.

#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use tuberank_core::{GenerationRequest, GenerationResult, ThumbnailIdea};
use tuberank_error::{GenerationError, GenerationErrorKind};
use tuberank_interface::SeoGenerator;

/// A well-formed result with five titles and three thumbnails.
pub fn sample_result() -> GenerationResult {
    GenerationResult {
        titles: (1..=5).map(|i| format!("عنوان رقم {i}")).collect(),
        description: "مرحباً بكم!\nسؤال اليوم: ما رأيكم؟\n00:00 المقدمة".to_string(),
        keywords: vec!["تقنية".into(), "ذكاء اصطناعي".into(), "شروحات".into()],
        hashtags: vec!["#تقنية".into(), "#ذكاء_اصطناعي".into()],
        category: "Science & Technology".to_string(),
        algorithm_strategy: "استهدف الباحثين عن الشروحات".to_string(),
        thumbnail_ideas: (1..=3)
            .map(|i| ThumbnailIdea {
                description: format!("مشهد {i}"),
                text: format!("نص {i}"),
            })
            .collect(),
    }
}

/// Generator that returns a fixed outcome and records every request.
pub struct ScriptedGenerator {
    outcome: Result<GenerationResult, GenerationErrorKind>,
    calls: AtomicUsize,
    requests: Mutex<Vec<GenerationRequest>>,
}

impl ScriptedGenerator {
    pub fn succeeding(result: GenerationResult) -> Self {
        Self {
            outcome: Ok(result),
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(kind: GenerationErrorKind) -> Self {
        Self {
            outcome: Err(kind),
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<GenerationRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl SeoGenerator for ScriptedGenerator {
    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResult, GenerationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request.clone());
        self.outcome.clone().map_err(GenerationError::new)
    }

    fn provider_name(&self) -> &'static str {
        "scripted"
    }

    fn model_name(&self) -> &str {
        "scripted-model"
    }
}
