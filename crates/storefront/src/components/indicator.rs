//! Scroll progress indicator.
//!
//! Tracks how far a [`ScrollSurface`] has been scrolled and exposes the
//! result as a [`ProgressBar`] pinned to the top of the page.

use herowear_core::{Progress, ScrollGeometry};
use tokio::sync::watch;

use super::progress_bar::ProgressBar;
use super::scroll::{ScrollSurface, Subscription};

/// Default track class; the stylesheet pins it to the top of the viewport.
pub const TRACK_CLASS: &str = "scroll-progress";

/// Default fill class.
pub const FILL_CLASS: &str = "scroll-progress__fill";

/// Reading-progress indicator for a scrollable document.
#[derive(Debug, Clone)]
pub struct ScrollProgressIndicator {
    track_class: String,
    fill_class: String,
}

impl Default for ScrollProgressIndicator {
    fn default() -> Self {
        Self {
            track_class: TRACK_CLASS.to_string(),
            fill_class: FILL_CLASS.to_string(),
        }
    }
}

impl ScrollProgressIndicator {
    /// Override the track and fill classes.
    #[must_use]
    pub fn with_classes(track_class: impl Into<String>, fill_class: impl Into<String>) -> Self {
        Self {
            track_class: track_class.into(),
            fill_class: fill_class.into(),
        }
    }

    /// Start tracking `surface`.
    ///
    /// The current geometry is sampled once immediately, then every scroll
    /// event recomputes the progress. Tracking stops when the returned
    /// [`MountedIndicator`] is dropped or unmounted.
    pub fn mount<S>(&self, surface: &S) -> MountedIndicator
    where
        S: ScrollSurface + ?Sized,
    {
        let (progress_tx, progress_rx) = watch::channel(surface.geometry().progress());

        let subscription = surface.subscribe(Box::new(move |geometry: ScrollGeometry| {
            progress_tx.send_replace(geometry.progress());
        }));

        MountedIndicator {
            progress: progress_rx,
            subscription,
            indicator: self.clone(),
        }
    }

    /// Bar at [`Progress::ZERO`], as rendered before any scroll event.
    #[must_use]
    pub fn initial_bar(&self) -> ProgressBar {
        self.bar(Progress::ZERO)
    }

    /// Bar for a single reported geometry, without subscribing to anything.
    #[must_use]
    pub fn bar_for(&self, geometry: ScrollGeometry) -> ProgressBar {
        self.bar(geometry.progress())
    }

    fn bar(&self, progress: Progress) -> ProgressBar {
        ProgressBar::new(progress)
            .with_track_class(self.track_class.clone())
            .with_fill_class(self.fill_class.clone())
            .with_label("Reading progress")
    }
}

/// A live indicator bound to a scroll surface.
#[derive(Debug)]
pub struct MountedIndicator {
    progress: watch::Receiver<Progress>,
    subscription: Subscription,
    indicator: ScrollProgressIndicator,
}

impl MountedIndicator {
    /// Progress after the most recent scroll event.
    #[must_use]
    pub fn progress(&self) -> Progress {
        *self.progress.borrow()
    }

    /// Receiver notified on every recomputation.
    ///
    /// Once the indicator is unmounted the receiver reports the channel as
    /// closed and keeps the last value.
    #[must_use]
    pub fn watch(&self) -> watch::Receiver<Progress> {
        self.progress.clone()
    }

    /// Bar for the current progress.
    #[must_use]
    pub fn progress_bar(&self) -> ProgressBar {
        self.indicator.bar(self.progress())
    }

    /// Stop listening to the surface.
    pub fn unmount(self) {
        self.subscription.cancel();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};

    use askama::Template;

    use super::*;
    use crate::components::scroll::{ScrollListener, Viewport};

    fn viewport() -> Viewport {
        Viewport::new(ScrollGeometry::new(0.0, 3000.0, 1000.0))
    }

    #[test]
    fn test_samples_geometry_at_mount() {
        let viewport = Viewport::new(ScrollGeometry::new(1000.0, 3000.0, 1000.0));
        let mounted = ScrollProgressIndicator::default().mount(&viewport);
        assert_eq!(mounted.progress(), Progress::new(50.0));
    }

    #[test]
    fn test_tracks_scroll_events() {
        let viewport = viewport();
        let mounted = ScrollProgressIndicator::default().mount(&viewport);
        assert_eq!(mounted.progress(), Progress::ZERO);

        viewport.scroll_to(500.0);
        assert_eq!(mounted.progress(), Progress::new(25.0));

        viewport.scroll_to(2000.0);
        assert_eq!(mounted.progress(), Progress::COMPLETE);

        // Elastic overscroll past the end stays at 100
        viewport.scroll_to(2003.5);
        assert_eq!(mounted.progress(), Progress::COMPLETE);
    }

    #[test]
    fn test_bar_for_geometry() {
        let indicator = ScrollProgressIndicator::default();

        let bar = indicator.bar_for(ScrollGeometry::new(500.0, 3000.0, 1000.0));
        assert_eq!(bar.fill_transform(), "translateX(-75%)");
        assert_eq!(bar.value(), Progress::new(25.0));

        let short = indicator.bar_for(ScrollGeometry::new(0.0, 600.0, 800.0));
        assert_eq!(short.fill_transform(), "translateX(-100%)");
    }

    #[test]
    fn test_short_content_reports_zero() {
        let viewport = Viewport::new(ScrollGeometry::new(0.0, 800.0, 800.0));
        let mounted = ScrollProgressIndicator::default().mount(&viewport);

        viewport.scroll_to(0.0);
        assert_eq!(mounted.progress(), Progress::ZERO);
        assert_eq!(mounted.progress_bar().fill_transform(), "translateX(-100%)");
    }

    #[test]
    fn test_resize_recomputes() {
        let viewport = viewport();
        let mounted = ScrollProgressIndicator::default().mount(&viewport);

        viewport.scroll_to(1000.0);
        assert_eq!(mounted.progress(), Progress::new(50.0));

        viewport.resize(5000.0, 1000.0);
        assert_eq!(mounted.progress(), Progress::new(25.0));
    }

    #[tokio::test]
    async fn test_watch_notified() {
        let viewport = viewport();
        let mounted = ScrollProgressIndicator::default().mount(&viewport);
        let mut changes = mounted.watch();

        viewport.scroll_to(1500.0);

        changes.changed().await.unwrap();
        assert_eq!(*changes.borrow_and_update(), Progress::new(75.0));
    }

    #[test]
    fn test_unmount_removes_listener() {
        let viewport = viewport();
        let mounted = ScrollProgressIndicator::default().mount(&viewport);
        let changes = mounted.watch();
        assert_eq!(viewport.listener_count(), 1);

        viewport.scroll_to(500.0);
        mounted.unmount();
        assert_eq!(viewport.listener_count(), 0);

        // No update, no panic
        viewport.scroll_to(1600.0);
        assert!(changes.has_changed().is_err());
        assert_eq!(*changes.borrow(), Progress::new(25.0));
    }

    #[test]
    fn test_drop_releases_listener() {
        let viewport = viewport();
        {
            let _mounted = ScrollProgressIndicator::default().mount(&viewport);
            assert_eq!(viewport.listener_count(), 1);
        }
        assert_eq!(viewport.listener_count(), 0);
    }

    #[test]
    fn test_unwinding_releases_listener() {
        let viewport = viewport();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _mounted = ScrollProgressIndicator::default().mount(&viewport);
            panic!("render failed");
        }));

        assert!(result.is_err());
        assert_eq!(viewport.listener_count(), 0);
    }

    #[test]
    fn test_mount_on_custom_surface() {
        struct StaticPage {
            released: Arc<AtomicBool>,
        }

        impl ScrollSurface for StaticPage {
            fn geometry(&self) -> ScrollGeometry {
                ScrollGeometry::new(300.0, 1600.0, 1000.0)
            }

            fn subscribe(&self, _listener: ScrollListener) -> Subscription {
                let released = Arc::clone(&self.released);
                Subscription::new(move || released.store(true, Ordering::SeqCst))
            }
        }

        let page = StaticPage {
            released: Arc::new(AtomicBool::new(false)),
        };
        let mounted = ScrollProgressIndicator::default().mount(&page);
        assert_eq!(mounted.progress(), Progress::new(50.0));

        mounted.unmount();
        assert!(page.released.load(Ordering::SeqCst));
    }

    #[test]
    fn test_bar_uses_indicator_classes() {
        let html = ScrollProgressIndicator::with_classes("reading", "reading__fill")
            .initial_bar()
            .render()
            .unwrap();

        assert!(html.contains("progress-track reading"));
        assert!(html.contains("progress-fill reading__fill"));
        assert!(html.contains("translateX(-100%)"));
    }
}
