//! Viewport transition scheduling.
//!
//! Rapid repeated selection must not pile animated transitions onto the map
//! collaborator's queue. The scheduler enforces one of two policies observed
//! in the product:
//!
//! - **Debounce**: a new command resets a short quiet timer; the last command
//!   wins and is emitted when the quiet period elapses. If a transition is
//!   still in flight at that moment the pending command is dropped, mirroring
//!   the animation-in-flight guard of the contact-page map.
//! - **Lockout**: commands emit immediately, but anything arriving while a
//!   transition is in flight is ignored until the hold elapses, mirroring the
//!   hero-map variant.
//!
//! Non-animated commands (fit-bounds, set-view fallbacks) bypass scheduling
//! entirely. Time is always passed in by the caller, so every decision is
//! deterministic under test.

use super::viewport::ViewportCommand;
use crate::infrastructure::timer::DeadlineTimer;
use std::time::{Duration, Instant};

/// Grace added to a command's duration before the in-flight window releases,
/// so the collaborator has settled before the next transition starts.
const IN_FLIGHT_GRACE: Duration = Duration::from_millis(100);

/// Coalescing policy for animated viewport commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionPolicy {
    /// Hold each command for a quiet period; the last request wins.
    Debounce { quiet: Duration },

    /// Emit immediately, drop requests while a transition is in flight.
    Lockout { hold: Duration },
}

impl Default for TransitionPolicy {
    fn default() -> Self {
        Self::Debounce {
            quiet: Duration::from_millis(150),
        }
    }
}

/// Schedules animated viewport commands under a [`TransitionPolicy`].
///
/// The host drives the scheduler with [`request`](Self::request) when the
/// engine wants a transition and [`poll`](Self::poll) on its tick; both take
/// the current time explicitly. [`cancel_all`](Self::cancel_all) implements
/// unmount semantics: after it, no later poll may emit anything.
#[derive(Debug)]
pub struct TransitionScheduler {
    policy: TransitionPolicy,
    pending: Option<ViewportCommand>,
    debounce: DeadlineTimer,
    in_flight: DeadlineTimer,
}

impl TransitionScheduler {
    /// Creates an idle scheduler with the given policy.
    #[must_use]
    pub fn new(policy: TransitionPolicy) -> Self {
        Self {
            policy,
            pending: None,
            debounce: DeadlineTimer::idle(),
            in_flight: DeadlineTimer::idle(),
        }
    }

    /// Submits a command for emission.
    ///
    /// Returns `Some` when the command should reach the collaborator right
    /// now: always for non-animated commands, and for animated commands under
    /// `Lockout` when no transition is in flight. Under `Debounce` the command
    /// is parked and a later [`poll`](Self::poll) emits it.
    pub fn request(&mut self, command: ViewportCommand, now: Instant) -> Option<ViewportCommand> {
        if !command.is_animated() {
            return Some(command);
        }

        match self.policy {
            TransitionPolicy::Debounce { quiet } => {
                self.pending = Some(command);
                self.debounce.schedule(now + quiet);
                None
            }
            TransitionPolicy::Lockout { hold } => {
                if self.in_flight.is_armed() && !self.in_flight.is_due(now) {
                    tracing::debug!("transition in flight, dropping viewport command");
                    return None;
                }
                self.in_flight.schedule(now + hold);
                Some(command)
            }
        }
    }

    /// Releases a debounced command whose quiet period has elapsed.
    ///
    /// Returns `None` when nothing is due. A pending command that comes due
    /// while a previous transition is still in flight is dropped, not
    /// deferred.
    pub fn poll(&mut self, now: Instant) -> Option<ViewportCommand> {
        if !self.debounce.fire(now) {
            return None;
        }
        let command = self.pending.take()?;

        if self.in_flight.is_armed() && !self.in_flight.is_due(now) {
            tracing::debug!("transition in flight, dropping debounced viewport command");
            return None;
        }

        self.in_flight
            .schedule(now + Duration::from_millis(command.duration_ms()) + IN_FLIGHT_GRACE);
        Some(command)
    }

    /// Whether an animated transition is currently in flight.
    #[must_use]
    pub fn is_in_flight(&self, now: Instant) -> bool {
        self.in_flight.is_armed() && !self.in_flight.is_due(now)
    }

    /// Cancels the pending command and the in-flight window.
    ///
    /// Called on unmount so no callback can fire against a destroyed view.
    pub fn cancel_all(&mut self) {
        self.pending = None;
        self.debounce.cancel();
        self.in_flight.cancel();
    }
}

impl Default for TransitionScheduler {
    fn default() -> Self {
        Self::new(TransitionPolicy::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::LatLng;

    fn fly_to(lat: f64) -> ViewportCommand {
        ViewportCommand::fly_to(LatLng::new(lat, 39.0))
    }

    fn debounce_150() -> TransitionScheduler {
        TransitionScheduler::new(TransitionPolicy::Debounce {
            quiet: Duration::from_millis(150),
        })
    }

    #[test]
    fn debounce_last_command_wins() {
        let start = Instant::now();
        let mut scheduler = debounce_150();

        assert_eq!(scheduler.request(fly_to(21.0), start), None);
        assert_eq!(
            scheduler.request(fly_to(22.0), start + Duration::from_millis(50)),
            None
        );

        // Quiet period measured from the second request.
        assert_eq!(scheduler.poll(start + Duration::from_millis(150)), None);
        assert_eq!(
            scheduler.poll(start + Duration::from_millis(200)),
            Some(fly_to(22.0))
        );
    }

    #[test]
    fn debounce_emits_only_once() {
        let start = Instant::now();
        let mut scheduler = debounce_150();

        scheduler.request(fly_to(21.0), start);
        assert!(scheduler.poll(start + Duration::from_millis(150)).is_some());
        assert_eq!(scheduler.poll(start + Duration::from_millis(300)), None);
    }

    #[test]
    fn debounce_drops_command_due_while_in_flight() {
        let start = Instant::now();
        let mut scheduler = debounce_150();

        scheduler.request(fly_to(21.0), start);
        let emitted = scheduler.poll(start + Duration::from_millis(150));
        assert!(emitted.is_some());

        // Second request comes due while the first transition is in flight.
        scheduler.request(fly_to(22.0), start + Duration::from_millis(200));
        assert_eq!(scheduler.poll(start + Duration::from_millis(350)), None);
        assert!(scheduler.is_in_flight(start + Duration::from_millis(350)));
    }

    #[test]
    fn lockout_emits_first_and_drops_followers() {
        let start = Instant::now();
        let mut scheduler = TransitionScheduler::new(TransitionPolicy::Lockout {
            hold: Duration::from_millis(3100),
        });

        assert_eq!(scheduler.request(fly_to(21.0), start), Some(fly_to(21.0)));
        assert_eq!(
            scheduler.request(fly_to(22.0), start + Duration::from_millis(1000)),
            None
        );
        assert_eq!(
            scheduler.request(fly_to(23.0), start + Duration::from_millis(3100)),
            Some(fly_to(23.0))
        );
    }

    #[test]
    fn non_animated_commands_bypass_scheduling() {
        let start = Instant::now();
        let mut scheduler = TransitionScheduler::new(TransitionPolicy::Lockout {
            hold: Duration::from_millis(3100),
        });

        scheduler.request(fly_to(21.0), start);
        let fallback = ViewportCommand::set_view(LatLng::new(21.0, 39.0), 15.0);
        assert_eq!(scheduler.request(fallback.clone(), start), Some(fallback));
    }

    #[test]
    fn cancel_all_silences_every_later_poll() {
        let start = Instant::now();
        let mut scheduler = debounce_150();

        scheduler.request(fly_to(21.0), start);
        scheduler.cancel_all();

        assert_eq!(scheduler.poll(start + Duration::from_secs(60)), None);
        assert!(!scheduler.is_in_flight(start + Duration::from_secs(60)));
    }
}
