//! Generic progress bar.

use askama::Template;
use askama_web::WebTemplate;
use herowear_core::Progress;
use herowear_core::progress::format_percent;

/// Horizontal bar filled left to right in proportion to a [`Progress`].
///
/// The fill element spans the whole track and is translated left by
/// `100 - value` percent. Out-of-range and non-finite inputs are clamped by
/// [`Progress`] before any markup is produced.
#[derive(Debug, Clone, Template, WebTemplate)]
#[template(path = "components/progress_bar.html")]
pub struct ProgressBar {
    value: Progress,
    track_class: Option<String>,
    fill_class: Option<String>,
    label: Option<String>,
}

impl ProgressBar {
    /// Bar showing `value`.
    #[must_use]
    pub fn new(value: impl Into<Progress>) -> Self {
        Self {
            value: value.into(),
            track_class: None,
            fill_class: None,
            label: None,
        }
    }

    /// Extra CSS class for the track element.
    #[must_use]
    pub fn with_track_class(mut self, class: impl Into<String>) -> Self {
        self.track_class = Some(class.into());
        self
    }

    /// Extra CSS class for the fill element.
    #[must_use]
    pub fn with_fill_class(mut self, class: impl Into<String>) -> Self {
        self.fill_class = Some(class.into());
        self
    }

    /// Accessible label announced for the bar.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Clamped value shown by the bar.
    #[must_use]
    pub const fn value(&self) -> Progress {
        self.value
    }

    /// Horizontal translation of the fill, in percent.
    #[must_use]
    pub fn fill_offset(&self) -> f64 {
        self.value.fill_offset()
    }

    /// CSS `transform` applied to the fill.
    #[must_use]
    pub fn fill_transform(&self) -> String {
        format!("translateX({}%)", format_percent(self.fill_offset()))
    }
}
