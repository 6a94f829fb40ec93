// SPDX-License-Identifier: MPL-2.0
//! Tick-driven height transitions.
//!
//! Animations are plain values advanced by the host's tick loop: the state
//! machine starts one, samples it on every tick, and reacts to its explicit
//! "finished" signal. Nothing here owns a clock or a thread.

use std::time::{Duration, Instant};

/// An eased transition of the banner height toward a target value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeightAnimation {
    from: f32,
    to: f32,
    started: Instant,
    duration: Duration,
}

impl HeightAnimation {
    /// Starts a transition from `from` to `to` at `started`.
    #[must_use]
    pub fn new(from: f32, to: f32, started: Instant, duration: Duration) -> Self {
        Self {
            from,
            to,
            started,
            duration,
        }
    }

    /// The value the animation settles on.
    #[must_use]
    pub fn target(&self) -> f32 {
        self.to
    }

    /// The interpolated value at `now`.
    ///
    /// Zero-duration animations report the target immediately.
    #[must_use]
    pub fn value_at(&self, now: Instant) -> f32 {
        let progress = self.progress(now);
        self.from + (self.to - self.from) * ease_out_cubic(progress)
    }

    /// Whether the transition has reached its target at `now`.
    #[must_use]
    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }

    fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }
}

fn ease_out_cubic(t: f32) -> f32 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_from_and_ends_at_target() {
        let start = Instant::now();
        let anim = HeightAnimation::new(0.0, 80.0, start, Duration::from_millis(350));

        assert_eq!(anim.value_at(start), 0.0);
        assert_eq!(anim.value_at(start + Duration::from_millis(350)), 80.0);
        assert!(anim.is_finished(start + Duration::from_millis(350)));
    }

    #[test]
    fn midway_value_is_between_endpoints() {
        let start = Instant::now();
        let anim = HeightAnimation::new(0.0, 80.0, start, Duration::from_millis(200));
        let mid = anim.value_at(start + Duration::from_millis(100));

        assert!(mid > 0.0 && mid < 80.0);
        assert!(!anim.is_finished(start + Duration::from_millis(100)));
    }

    #[test]
    fn progress_is_monotonic() {
        let start = Instant::now();
        let anim = HeightAnimation::new(80.0, 0.0, start, Duration::from_millis(200));
        let mut previous = anim.value_at(start);
        for ms in (20..=200).step_by(20) {
            let value = anim.value_at(start + Duration::from_millis(ms));
            assert!(value <= previous, "height rose during collapse at {ms}ms");
            previous = value;
        }
        assert_eq!(previous, 0.0);
    }

    #[test]
    fn zero_duration_finishes_immediately() {
        let start = Instant::now();
        let anim = HeightAnimation::new(80.0, 0.0, start, Duration::ZERO);
        assert!(anim.is_finished(start));
        assert_eq!(anim.value_at(start), 0.0);
    }

    #[test]
    fn value_before_start_is_the_origin() {
        let start = Instant::now() + Duration::from_secs(1);
        let anim = HeightAnimation::new(10.0, 50.0, start, Duration::from_millis(200));
        assert_eq!(anim.value_at(Instant::now()), 10.0);
    }
}
