// SPDX-License-Identifier: MPL-2.0
//! One-shot auto-dismiss countdown.
//!
//! The timer is a plain deadline polled from the host's tick loop; it holds
//! no thread or runtime handle, so expiry can never race state mutation and
//! dropping the banner drops the deadline with it.

use std::time::{Duration, Instant};

/// Single-shot countdown driving the banner's auto-dismiss.
///
/// At most one expiry is pending at a time: re-arming replaces any earlier
/// deadline, and [`poll`](Self::poll) consumes the deadline on expiry so a
/// fired timer never fires again.
#[derive(Debug, Clone, Default)]
pub struct AutoDismissTimer {
    deadline: Option<Instant>,
}

impl AutoDismissTimer {
    /// Creates an unarmed timer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules a single expiry at `now + duration`.
    ///
    /// Any previously pending expiry is discarded.
    pub fn arm(&mut self, now: Instant, duration: Duration) {
        self.deadline = Some(now + duration);
    }

    /// Invalidates any pending expiry. A cancelled timer is inert.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Returns whether an expiry is still pending.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Returns true exactly once when the deadline has passed.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unarmed_timer_never_fires() {
        let mut timer = AutoDismissTimer::new();
        assert!(!timer.is_armed());
        assert!(!timer.poll(Instant::now()));
    }

    #[test]
    fn fires_once_at_deadline() {
        let start = Instant::now();
        let mut timer = AutoDismissTimer::new();
        timer.arm(start, Duration::from_secs(5));

        assert!(!timer.poll(start + Duration::from_secs(4)));
        assert!(timer.poll(start + Duration::from_secs(5)));
        // Consumed: a second poll after expiry stays quiet.
        assert!(!timer.poll(start + Duration::from_secs(6)));
        assert!(!timer.is_armed());
    }

    #[test]
    fn cancel_makes_timer_inert() {
        let start = Instant::now();
        let mut timer = AutoDismissTimer::new();
        timer.arm(start, Duration::from_secs(1));
        timer.cancel();

        assert!(!timer.poll(start + Duration::from_secs(10)));
    }

    #[test]
    fn rearming_replaces_the_pending_deadline() {
        let start = Instant::now();
        let mut timer = AutoDismissTimer::new();
        timer.arm(start, Duration::from_secs(1));
        timer.arm(start, Duration::from_secs(10));

        // The first deadline no longer exists.
        assert!(!timer.poll(start + Duration::from_secs(5)));
        // Exactly one expiry remains, at the second deadline.
        assert!(timer.poll(start + Duration::from_secs(10)));
        assert!(!timer.poll(start + Duration::from_secs(20)));
    }
}
