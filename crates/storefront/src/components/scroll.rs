//! Scroll surfaces and listener subscriptions.
//!
//! A [`ScrollSurface`] reports its geometry and notifies subscribed listeners
//! on every scroll event. Subscribing hands back a [`Subscription`] that
//! removes the listener when dropped, so registration and deregistration are
//! always paired, including when the owner unwinds.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use herowear_core::ScrollGeometry;

/// Callback invoked with the surface geometry after every scroll event.
pub type ScrollListener = Box<dyn Fn(ScrollGeometry) + Send + Sync>;

/// Something that scrolls vertically and can be observed.
pub trait ScrollSurface {
    /// Current geometry.
    fn geometry(&self) -> ScrollGeometry;

    /// Register `listener` for scroll events until the returned
    /// [`Subscription`] is dropped or cancelled.
    fn subscribe(&self, listener: ScrollListener) -> Subscription;
}

/// Disposer for a registered listener.
#[must_use = "dropping a Subscription immediately removes the listener"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl Subscription {
    /// Wrap the function that deregisters the listener.
    pub fn new(release: impl FnOnce() + Send + Sync + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// Deregister now instead of at drop.
    pub fn cancel(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.release.is_some())
            .finish()
    }
}

/// In-process scroll surface.
///
/// Holds the geometry of one document viewport and dispatches a scroll event
/// to every listener whenever it is scrolled or resized. Clones share state.
#[derive(Clone, Default)]
pub struct Viewport {
    inner: Arc<Mutex<ViewportInner>>,
}

#[derive(Default)]
struct ViewportInner {
    geometry: ScrollGeometry,
    listeners: BTreeMap<u64, Arc<dyn Fn(ScrollGeometry) + Send + Sync>>,
    next_id: u64,
}

impl Viewport {
    /// Create a viewport with the given geometry.
    #[must_use]
    pub fn new(geometry: ScrollGeometry) -> Self {
        Self {
            inner: Arc::new(Mutex::new(ViewportInner {
                geometry,
                ..ViewportInner::default()
            })),
        }
    }

    /// Scroll to `scroll_top` and dispatch a scroll event.
    pub fn scroll_to(&self, scroll_top: f64) {
        self.update(|geometry| geometry.scroll_top = scroll_top);
    }

    /// Change content and viewport heights and dispatch a scroll event.
    pub fn resize(&self, scroll_height: f64, client_height: f64) {
        self.update(|geometry| {
            geometry.scroll_height = scroll_height;
            geometry.client_height = client_height;
        });
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        lock(&self.inner).listeners.len()
    }

    fn update(&self, change: impl FnOnce(&mut ScrollGeometry)) {
        let (geometry, listeners) = {
            let mut inner = lock(&self.inner);
            change(&mut inner.geometry);
            let listeners: Vec<_> = inner.listeners.values().cloned().collect();
            (inner.geometry, listeners)
        };

        // Listeners run unlocked so they may read the geometry or unsubscribe.
        for listener in listeners {
            listener(geometry);
        }
    }
}

impl ScrollSurface for Viewport {
    fn geometry(&self) -> ScrollGeometry {
        lock(&self.inner).geometry
    }

    fn subscribe(&self, listener: ScrollListener) -> Subscription {
        let id = {
            let mut inner = lock(&self.inner);
            let id = inner.next_id;
            inner.next_id += 1;
            inner.listeners.insert(id, Arc::from(listener));
            id
        };

        let viewport: Weak<Mutex<ViewportInner>> = Arc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = viewport.upgrade() {
                lock(&inner).listeners.remove(&id);
            }
        })
    }
}

impl std::fmt::Debug for Viewport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = lock(&self.inner);
        f.debug_struct("Viewport")
            .field("geometry", &inner.geometry)
            .field("listeners", &inner.listeners.len())
            .finish()
    }
}

/// Listener panics must not wedge the viewport.
fn lock(inner: &Mutex<ViewportInner>) -> MutexGuard<'_, ViewportInner> {
    inner.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    fn counting_listener(counter: &Arc<AtomicUsize>) -> ScrollListener {
        let counter = Arc::clone(counter);
        Box::new(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        })
    }

    #[test]
    fn test_scroll_dispatches_to_listeners() {
        let viewport = Viewport::new(ScrollGeometry::new(0.0, 2000.0, 1000.0));
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);

        let _subscription = viewport.subscribe(Box::new(move |geometry| {
            sink.lock().unwrap_or_else(PoisonError::into_inner).push(geometry.scroll_top);
        }));

        viewport.scroll_to(250.0);
        viewport.scroll_to(500.0);

        let seen = seen.lock().unwrap_or_else(PoisonError::into_inner).clone();
        assert_eq!(seen, vec![250.0, 500.0]);
        assert!((viewport.geometry().scroll_top - 500.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_drop_unsubscribes() {
        let viewport = Viewport::default();
        let counter = Arc::new(AtomicUsize::new(0));

        let subscription = viewport.subscribe(counting_listener(&counter));
        assert_eq!(viewport.listener_count(), 1);

        drop(subscription);
        assert_eq!(viewport.listener_count(), 0);

        viewport.scroll_to(10.0);
        assert_eq!(counter.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_cancel_unsubscribes_only_its_listener() {
        let viewport = Viewport::default();
        let first = Arc::new(AtomicUsize::new(0));
        let second = Arc::new(AtomicUsize::new(0));

        let a = viewport.subscribe(counting_listener(&first));
        let _b = viewport.subscribe(counting_listener(&second));

        a.cancel();
        viewport.resize(3000.0, 900.0);

        assert_eq!(first.load(Ordering::SeqCst), 0);
        assert_eq!(second.load(Ordering::SeqCst), 1);
        assert_eq!(viewport.listener_count(), 1);
    }

    #[test]
    fn test_subscription_outlives_viewport() {
        let viewport = Viewport::default();
        let counter = Arc::new(AtomicUsize::new(0));
        let subscription = viewport.subscribe(counting_listener(&counter));

        drop(viewport);
        // Releasing against a dropped viewport is a no-op.
        drop(subscription);
    }

    #[test]
    fn test_listener_may_read_viewport() {
        let viewport = Viewport::new(ScrollGeometry::new(0.0, 1000.0, 500.0));
        let reader = viewport.clone();
        let observed = Arc::new(Mutex::new(None));
        let slot = Arc::clone(&observed);

        let _subscription = viewport.subscribe(Box::new(move |_| {
            *slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(reader.geometry());
        }));

        viewport.scroll_to(125.0);

        let observed = observed.lock().unwrap_or_else(PoisonError::into_inner).take();
        assert_eq!(observed.map(|g| g.scroll_top), Some(125.0));
    }
}
