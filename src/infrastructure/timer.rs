//! Cancellable deadline timer.
//!
//! The engine is single-threaded and event-driven: it never sleeps or spawns
//! timer threads. Instead, deferred work (debounced viewport commands, the
//! animation-in-flight window) is modeled as an explicit deadline that the
//! host polls by feeding the current time into the event loop. Cancellation is
//! a first-class operation on the handle, not a captured closure variable.

use std::time::Instant;

/// A single-shot deadline with explicit cancellation.
///
/// The timer is either idle or armed at an [`Instant`]. [`fire`](Self::fire)
/// reports `true` exactly once when polled at or past the deadline, then
/// disarms the timer. [`cancel`](Self::cancel) disarms it without firing, so a
/// cancelled timer can never fire on a later poll.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeadlineTimer {
    deadline: Option<Instant>,
}

impl DeadlineTimer {
    /// Creates an idle timer.
    #[must_use]
    pub const fn idle() -> Self {
        Self { deadline: None }
    }

    /// Arms (or re-arms) the timer at `at`. Re-arming an armed timer replaces
    /// the previous deadline, which is how debouncing resets its quiet period.
    pub fn schedule(&mut self, at: Instant) {
        self.deadline = Some(at);
    }

    /// Disarms the timer. A cancelled timer never fires.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Whether a deadline is currently armed.
    #[must_use]
    pub const fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Whether the armed deadline has been reached at `now`.
    ///
    /// Returns `false` for an idle timer. Does not disarm; use
    /// [`fire`](Self::fire) for one-shot consumption.
    #[must_use]
    pub fn is_due(&self, now: Instant) -> bool {
        self.deadline.is_some_and(|deadline| now >= deadline)
    }

    /// Consumes the deadline if it has been reached.
    ///
    /// Returns `true` at most once per scheduled deadline; the timer is idle
    /// afterwards.
    pub fn fire(&mut self, now: Instant) -> bool {
        if self.is_due(now) {
            self.deadline = None;
            true
        } else {
            false
        }
    }
}
