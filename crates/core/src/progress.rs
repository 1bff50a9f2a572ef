//! Progress values and scroll geometry.
//!
//! [`Progress`] is a percentage clamped to `[0, 100]` at construction, so no
//! caller ever observes an out-of-range or non-finite value. [`ScrollGeometry`]
//! is a snapshot of a scrollable surface from which a progress value is
//! derived.

use core::fmt;

use serde::{Deserialize, Serialize};

/// A completion percentage in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize)]
#[serde(transparent)]
pub struct Progress(f64);

impl Progress {
    /// Nothing done.
    pub const ZERO: Self = Self(0.0);

    /// Fully complete.
    pub const COMPLETE: Self = Self(100.0);

    /// Create a progress value, clamping into `[0, 100]`.
    ///
    /// `NaN` and infinities collapse to [`Progress::ZERO`].
    #[must_use]
    pub fn new(value: f64) -> Self {
        if !value.is_finite() {
            return Self::ZERO;
        }
        Self(value.clamp(0.0, 100.0))
    }

    /// Build a progress value from a completed/total ratio.
    ///
    /// A non-positive total reports zero.
    #[must_use]
    pub fn from_ratio(done: f64, total: f64) -> Self {
        if total <= 0.0 || !total.is_finite() {
            return Self::ZERO;
        }
        Self::new(done / total * 100.0)
    }

    /// The percentage value.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Horizontal offset of a bar fill, in percent of the track width.
    ///
    /// Equals `-(100 - value)`: `-100` when empty and `0` when complete.
    #[must_use]
    pub fn fill_offset(self) -> f64 {
        // Written as value - 100 so a complete bar yields 0.0, never -0.0.
        self.0 - 100.0
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_percent(self.0))
    }
}

impl From<f64> for Progress {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl<'de> Deserialize<'de> for Progress {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        f64::deserialize(deserializer).map(Self::new)
    }
}

/// Format a percentage with at most two decimals and no trailing zeros.
///
/// `-63.0` formats as `"-63"`, `12.5` as `"12.5"`, `33.3333` as `"33.33"`.
#[must_use]
pub fn format_percent(value: f64) -> String {
    let rounded = format!("{value:.2}");
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "-0" | "" => "0".to_string(),
        other => other.to_string(),
    }
}

/// Vertical geometry of a scrollable surface, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScrollGeometry {
    /// Distance scrolled from the top of the document.
    pub scroll_top: f64,
    /// Full height of the scrollable content.
    pub scroll_height: f64,
    /// Visible height of the viewport.
    pub client_height: f64,
}

impl ScrollGeometry {
    /// Create a geometry snapshot.
    #[must_use]
    pub const fn new(scroll_top: f64, scroll_height: f64, client_height: f64) -> Self {
        Self {
            scroll_top,
            scroll_height,
            client_height,
        }
    }

    /// Maximum possible scroll offset. Never negative.
    #[must_use]
    pub fn scrollable_height(&self) -> f64 {
        (self.scroll_height - self.client_height).max(0.0)
    }

    /// How far the surface has been scrolled, as a percentage.
    ///
    /// Content that fits in the viewport reports zero. Overscroll from
    /// elastic scrolling is clamped into `[0, 100]`.
    #[must_use]
    pub fn progress(&self) -> Progress {
        Progress::from_ratio(self.scroll_top, self.scrollable_height())
    }

    /// The same geometry scrolled to a new offset.
    #[must_use]
    pub const fn with_scroll_top(self, scroll_top: f64) -> Self {
        Self { scroll_top, ..self }
    }
}
