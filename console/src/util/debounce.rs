//! Trailing-edge debounce for the inventory search box.
//!
//! Callers feed every keystroke with [`Debouncer::push`] and ask
//! [`Debouncer::poll`] when a value has been quiet for the full delay. Time is
//! passed in, so the gate works the same under a real clock or a test clock.

#[cfg(test)]
#[path = "debounce_test.rs"]
mod debounce_test;

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<(T, Instant)>,
}

impl<T> Debouncer<T> {
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self { delay, pending: None }
    }

    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Replace any pending value and restart the quiet period.
    pub fn push(&mut self, value: T, now: Instant) {
        self.pending = Some((value, now));
    }

    /// Release the pending value once `delay` has passed since the last push.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        let due = self
            .pending
            .as_ref()
            .is_some_and(|(_, at)| now.saturating_duration_since(*at) >= self.delay);
        if due { self.flush() } else { None }
    }

    /// When the pending value becomes due. `None` if nothing is pending or
    /// the delay reaches past what [`Instant`] can represent.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().and_then(|(_, at)| at.checked_add(self.delay))
    }

    /// Take the pending value immediately (e.g. on Enter).
    pub fn flush(&mut self) -> Option<T> {
        self.pending.take().map(|(v, _)| v)
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
