//! Video categories offered in the form.

use serde::{Deserialize, Serialize};

/// Closed set of content categories a user can pick for a video.
///
/// `Display` yields the label embedded in prompts; the snake_case key is
/// used on the command line and in configuration.
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
/// use tuberank_core::VideoCategory;
///
/// let category = VideoCategory::from_str("Tech").unwrap();
/// assert_eq!(category, VideoCategory::Tech);
/// assert_eq!(category.key(), "tech");
/// assert_eq!(category.to_string(), "تقنية واختراعات");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
    strum::EnumString,
    strum::IntoStaticStr,
    strum::EnumCount,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum VideoCategory {
    #[display("الموسيقى (Music)")]
    Music,
    #[display("ألعاب الفيديو (Gaming)")]
    Gaming,
    #[default]
    #[display("تقنية واختراعات")]
    Tech,
    #[display("تعليم وشروحات")]
    Education,
    #[display("ترفيه وكوميديا")]
    Entertainment,
    #[display("يوميات وفلوقات")]
    Vlog,
    #[display("رياضة")]
    Sports,
    #[display("طبخ ووصفات")]
    Cooking,
    #[display("أخبار وترندات")]
    News,
    #[display("صحة ولياقة")]
    Health,
    #[display("بزنس ومال")]
    Business,
    #[display("فن وتصميم")]
    Art,
    #[display("محتوى ديني")]
    Religious,
    #[display("أخرى")]
    Other,
}

impl VideoCategory {
    /// Machine-friendly key, e.g. `"tech"`.
    pub fn key(self) -> &'static str {
        self.into()
    }

    /// All categories in declaration order.
    pub fn all() -> impl Iterator<Item = VideoCategory> {
        <Self as strum::IntoEnumIterator>::iter()
    }

    /// Position of this category in [`VideoCategory::all`].
    pub fn index(self) -> usize {
        Self::all().position(|c| c == self).unwrap_or(0)
    }

    /// Category at `index`, wrapping around the closed set.
    pub fn from_index(index: usize) -> Self {
        let count = <Self as strum::EnumCount>::COUNT;
        Self::all().nth(index % count).unwrap_or_default()
    }

    /// The next category, wrapping from the last to the first.
    pub fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// The previous category, wrapping from the first to the last.
    pub fn previous(self) -> Self {
        let count = <Self as strum::EnumCount>::COUNT;
        Self::from_index(self.index() + count - 1)
    }
}
