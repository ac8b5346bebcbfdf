//! Application state for the generator form.

use crate::clipboard::CopyTarget;
use crate::progress::{DEFAULT_CAPTION_INTERVAL, ProgressCaptions};
use std::time::{Duration, Instant};
use tracing::{debug, error, info, warn};
use tuberank_core::{GenerationRequest, GenerationResult, VideoCategory};
use tuberank_error::{GenerationError, GenerationErrorKind};
use tuberank_interface::SeoGenerator;

/// Shown when the topic field is blank on submit.
pub const VALIDATION_MESSAGE: &str = "الرجاء إدخال فكرة الفيديو";

/// Shown for every failure after a request was issued.
pub const GENERATION_FAILED_MESSAGE: &str =
    "حدث خطأ أثناء توليد البيانات. يرجى المحاولة مرة أخرى.";

const COPIED_FEEDBACK: Duration = Duration::from_secs(2);

/// Lifecycle of the single generation flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GenerationState {
    /// Nothing generated yet
    #[default]
    Idle,
    /// A request is in flight
    Loading,
    /// Latest request produced a result
    Success,
    /// Latest request failed
    Failed,
}

/// Which part of the screen receives key input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Video idea field
    #[default]
    Topic,
    /// Target audience field
    Audience,
    /// Category grid
    Category,
    /// Result panels
    Results,
}

impl Focus {
    fn next(self, has_results: bool) -> Self {
        match self {
            Focus::Topic => Focus::Audience,
            Focus::Audience => Focus::Category,
            Focus::Category if has_results => Focus::Results,
            Focus::Category | Focus::Results => Focus::Topic,
        }
    }

    fn previous(self, has_results: bool) -> Self {
        match self {
            Focus::Topic if has_results => Focus::Results,
            Focus::Topic => Focus::Category,
            Focus::Audience => Focus::Topic,
            Focus::Category => Focus::Audience,
            Focus::Results => Focus::Category,
        }
    }
}

/// Form contents plus the generation lifecycle.
///
/// At most one result is held. Starting a generation discards it, and a
/// failure leaves it empty. The error and the result are never shown
/// together after a failed request.
#[derive(Debug)]
pub struct App {
    /// Video idea text
    pub topic: String,
    /// Target audience text, may be empty
    pub audience: String,
    /// Selected category
    pub category: VideoCategory,
    /// Focused region
    pub focus: Focus,
    /// Vertical scroll offset of the result panels
    pub results_scroll: u16,
    /// Set when the user asked to exit
    pub should_quit: bool,
    /// One-line status shown in the footer
    pub status_message: String,
    state: GenerationState,
    result: Option<GenerationResult>,
    error: Option<GenerationError>,
    progress: Option<ProgressCaptions>,
    caption_interval: Duration,
    selected_target: usize,
    copied: Option<(CopyTarget, Instant)>,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Empty form with the default category.
    pub fn new() -> Self {
        Self {
            topic: String::new(),
            audience: String::new(),
            category: VideoCategory::default(),
            focus: Focus::default(),
            results_scroll: 0,
            should_quit: false,
            status_message: String::new(),
            state: GenerationState::Idle,
            result: None,
            error: None,
            progress: None,
            caption_interval: DEFAULT_CAPTION_INTERVAL,
            selected_target: 0,
            copied: None,
        }
    }

    /// Override how long each progress caption stays current.
    pub fn with_caption_interval(mut self, interval: Duration) -> Self {
        self.caption_interval = interval;
        self
    }

    /// Current lifecycle state.
    pub fn state(&self) -> GenerationState {
        self.state
    }

    /// True while a request is in flight.
    pub fn is_loading(&self) -> bool {
        self.state == GenerationState::Loading
    }

    /// Latest successful result.
    pub fn result(&self) -> Option<&GenerationResult> {
        self.result.as_ref()
    }

    /// Error behind the banner, if any.
    pub fn error(&self) -> Option<&GenerationError> {
        self.error.as_ref()
    }

    /// Banner text for the current error.
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_ref().map(|e| match e.kind() {
            GenerationErrorKind::Validation(message) => message.as_str(),
            _ => GENERATION_FAILED_MESSAGE,
        })
    }

    /// Start a generation from the form.
    ///
    /// Returns the request to send, or `None` when a request is already in
    /// flight or the topic is blank.
    pub fn submit(&mut self) -> Option<GenerationRequest> {
        if self.is_loading() {
            debug!("Submit ignored while a generation is in flight");
            return None;
        }

        if self.topic.trim().is_empty() {
            warn!("Submit rejected: topic is empty");
            self.error = Some(GenerationError::new(GenerationErrorKind::Validation(
                VALIDATION_MESSAGE.to_string(),
            )));
            return None;
        }

        self.error = None;
        self.result = None;
        self.copied = None;
        self.selected_target = 0;
        self.results_scroll = 0;
        if self.focus == Focus::Results {
            self.focus = Focus::Topic;
        }
        self.progress = Some(ProgressCaptions::start(
            Instant::now(),
            self.caption_interval,
        ));
        self.state = GenerationState::Loading;
        self.status_message = "Generating...".to_string();

        info!(
            category = self.category.key(),
            has_audience = !self.audience.trim().is_empty(),
            "Generation started"
        );
        Some(GenerationRequest::new(
            self.topic.clone(),
            self.audience.clone(),
            self.category,
        ))
    }

    /// Record the outcome of the in-flight request.
    ///
    /// Outcomes that arrive outside `Loading` are dropped.
    pub fn complete(&mut self, outcome: Result<GenerationResult, GenerationError>) {
        if !self.is_loading() {
            warn!("Dropping generation outcome received outside loading state");
            return;
        }

        self.progress = None;
        match outcome {
            Ok(result) => {
                info!(
                    titles = result.titles.len(),
                    thumbnails = result.thumbnail_ideas.len(),
                    "Generation succeeded"
                );
                self.result = Some(result);
                self.state = GenerationState::Success;
                self.status_message = "Done. Tab to the results to copy.".to_string();
            }
            Err(err) => {
                if err.kind().is_decode_failure() {
                    error!(error = %err, "Generation failed: model reply did not decode");
                } else if err.kind().is_service_failure() {
                    error!(error = %err, "Generation failed: service error");
                } else {
                    error!(error = %err, "Generation failed");
                }
                self.result = None;
                self.error = Some(err);
                self.state = GenerationState::Failed;
                self.status_message.clear();
            }
        }
    }

    /// Submit, await `generator` and record its outcome.
    ///
    /// Returns the resulting state. The generator is not called when the
    /// submission is rejected.
    pub async fn generate_with<G>(&mut self, generator: &G) -> GenerationState
    where
        G: SeoGenerator + ?Sized,
    {
        let Some(request) = self.submit() else {
            return self.state;
        };
        let outcome = generator.generate(&request).await;
        self.complete(outcome);
        self.state
    }

    /// Current progress caption index, while loading.
    pub fn progress_step(&self, now: Instant) -> Option<usize> {
        self.progress.map(|p| p.step_at(now))
    }

    /// Insert a character into the focused text field.
    pub fn insert_char(&mut self, c: char) {
        match self.focus {
            Focus::Topic => self.topic.push(c),
            Focus::Audience => self.audience.push(c),
            Focus::Category | Focus::Results => {}
        }
    }

    /// Delete the last character of the focused text field.
    pub fn delete_char(&mut self) {
        match self.focus {
            Focus::Topic => {
                self.topic.pop();
            }
            Focus::Audience => {
                self.audience.pop();
            }
            Focus::Category | Focus::Results => {}
        }
    }

    /// Move focus forward. Results are reachable only once shown.
    pub fn focus_next(&mut self) {
        self.focus = self.focus.next(self.result.is_some());
    }

    /// Move focus backward.
    pub fn focus_previous(&mut self) {
        self.focus = self.focus.previous(self.result.is_some());
    }

    /// Select the next category, wrapping.
    pub fn next_category(&mut self) {
        self.category = self.category.next();
    }

    /// Select the previous category, wrapping.
    pub fn previous_category(&mut self) {
        self.category = self.category.previous();
    }

    /// Copy targets of the current result, in display order.
    pub fn copy_targets(&self) -> Vec<CopyTarget> {
        self.result
            .as_ref()
            .map(CopyTarget::all_for)
            .unwrap_or_default()
    }

    /// Highlighted copy target.
    pub fn selected_target(&self) -> Option<CopyTarget> {
        self.copy_targets().get(self.selected_target).copied()
    }

    /// Highlight the next copy target, wrapping.
    pub fn select_next_target(&mut self) {
        let count = self.copy_targets().len();
        if count > 0 {
            self.selected_target = (self.selected_target + 1) % count;
        }
    }

    /// Highlight the previous copy target, wrapping.
    pub fn select_previous_target(&mut self) {
        let count = self.copy_targets().len();
        if count > 0 {
            self.selected_target = (self.selected_target + count - 1) % count;
        }
    }

    /// Highlighted target and the text it would copy.
    pub fn selected_copy(&self) -> Option<(CopyTarget, String)> {
        let result = self.result.as_ref()?;
        let target = self.selected_target()?;
        target.text(result).map(|text| (target, text))
    }

    /// Record a successful copy at `now`.
    pub fn mark_copied(&mut self, target: CopyTarget, now: Instant) {
        debug!(copy_target = %target.label(), "Copied to clipboard");
        self.copied = Some((target, now));
        self.status_message = format!("Copied {}", target.label());
    }

    /// Target whose "copied" marker is visible at `now`.
    pub fn copied_target(&self, now: Instant) -> Option<CopyTarget> {
        self.copied
            .filter(|(_, at)| now.saturating_duration_since(*at) < COPIED_FEEDBACK)
            .map(|(target, _)| target)
    }

    /// Expire timed feedback.
    pub fn tick(&mut self, now: Instant) {
        if self.copied.is_some() && self.copied_target(now).is_none() {
            self.copied = None;
            self.status_message.clear();
        }
    }

    /// Scroll the result panels down one line.
    pub fn scroll_down(&mut self) {
        self.results_scroll = self.results_scroll.saturating_add(1);
    }

    /// Scroll the result panels up one line.
    pub fn scroll_up(&mut self) {
        self.results_scroll = self.results_scroll.saturating_sub(1);
    }
}
