//! Reusable UI components.
//!
//! # Components
//!
//! - [`ProgressBar`] - Renders any `[0, 100]` value as a filled bar
//! - [`ScrollProgressIndicator`] - Reading progress of a scrollable document,
//!   rendered through [`ProgressBar`]
//! - [`ScrollSurface`] / [`Viewport`] - Scroll event sources with RAII
//!   listener subscriptions

pub mod indicator;
pub mod progress_bar;
pub mod scroll;

pub use indicator::{MountedIndicator, ScrollProgressIndicator};
pub use progress_bar::ProgressBar;
pub use scroll::{ScrollListener, ScrollSurface, Subscription, Viewport};
