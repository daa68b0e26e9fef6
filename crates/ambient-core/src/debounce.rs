use instant::Instant;
use std::time::Duration;

/// Trailing-edge debounce: only the last value notified within `window`
/// is released, once the window has elapsed with no further notification.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    window: Duration,
    pending: Option<(T, Instant)>,
}

impl<T> Debouncer<T> {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            pending: None,
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Record `value`, replacing anything pending and restarting the window.
    pub fn notify(&mut self, value: T, now: Instant) {
        self.pending = Some((value, now + self.window));
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Take the pending value if its window has passed.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        let ready = matches!(&self.pending, Some((_, deadline)) if now >= *deadline);
        if ready {
            self.pending.take().map(|(v, _)| v)
        } else {
            None
        }
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }
}
