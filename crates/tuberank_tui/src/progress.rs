//! Cosmetic progress captions shown while a generation is in flight.
//!
//! The captions advance on a fixed interval and stop at the last one. They
//! say nothing about the real request, which may finish earlier or later.

use std::time::{Duration, Instant};

/// Status captions, in display order.
pub const CAPTIONS: [&str; 5] = [
    "تحليل فكرة الفيديو والجمهور المستهدف...",
    "فحص خوارزميات اليوتيوب (تحديثات 2025)...",
    "توليد عناوين جذابة لزيادة نسبة النقر (CTR)...",
    "اختيار الكلمات المفتاحية الأكثر بحثاً...",
    "صياغة وصف احترافي وتنسيق المحتوى...",
];

/// Time each caption stays current.
pub const DEFAULT_CAPTION_INTERVAL: Duration = Duration::from_millis(1800);

/// Caption sequence started at a given instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressCaptions {
    started: Instant,
    interval: Duration,
}

impl ProgressCaptions {
    /// Start a sequence at `now`.
    pub fn start(now: Instant, interval: Duration) -> Self {
        Self {
            started: now,
            interval,
        }
    }

    /// Index of the current caption after `elapsed`, capped at the last.
    pub fn step_for_elapsed(&self, elapsed: Duration) -> usize {
        let last = CAPTIONS.len() - 1;
        if self.interval.is_zero() {
            return last;
        }
        let step = elapsed.as_millis() / self.interval.as_millis();
        usize::try_from(step).unwrap_or(last).min(last)
    }

    /// Index of the current caption at `now`.
    pub fn step_at(&self, now: Instant) -> usize {
        self.step_for_elapsed(now.saturating_duration_since(self.started))
    }

    /// Completion percentage shown for `step`.
    pub fn percent_for_step(step: usize) -> u16 {
        let step = step.min(CAPTIONS.len() - 1);
        (((step + 1) * 100) / CAPTIONS.len()) as u16
    }
}
