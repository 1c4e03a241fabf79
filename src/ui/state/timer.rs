// SPDX-License-Identifier: MPL-2.0
//! Cancellable one-shot timer driven by UI ticks.
//!
//! Iced delivers time through subscriptions, so a `Timer` never wakes up on
//! its own: the owner feeds it the current `Instant` on every tick and asks
//! whether the deadline has passed. Dropping the owner drops the timer, which
//! means nothing can fire against a disposed component.

use std::time::{Duration, Instant};

/// One-shot deadline that can be armed, cancelled and polled.
///
/// The deadline is kept as a start plus an interval rather than a single
/// `Instant`, so arming with an interval too large to add to `now` (such as
/// `Duration::MAX`) is valid and simply never fires.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Timer {
    started_at: Option<Instant>,
    interval: Duration,
}

impl Timer {
    /// Creates a disarmed timer.
    #[must_use]
    pub fn idle() -> Self {
        Self::default()
    }

    /// Creates a timer already armed to fire `after` from `now`.
    #[must_use]
    pub fn armed(now: Instant, after: Duration) -> Self {
        let mut timer = Self::idle();
        timer.arm(now, after);
        timer
    }

    /// Arms (or re-arms) the timer to fire `after` from `now`.
    pub fn arm(&mut self, now: Instant, after: Duration) {
        self.started_at = Some(now);
        self.interval = after;
    }

    /// Disarms the timer. A cancelled timer never fires.
    pub fn cancel(&mut self) {
        self.started_at = None;
        self.interval = Duration::ZERO;
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.started_at.is_some()
    }

    /// Returns `true` exactly once when `now` reaches the deadline, then disarms.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.started_at {
            Some(start) if now.saturating_duration_since(start) >= self.interval => {
                self.cancel();
                true
            }
            _ => false,
        }
    }

    /// Time left before the deadline, `None` when disarmed.
    #[must_use]
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.started_at.map(|start| {
            self.interval
                .saturating_sub(now.saturating_duration_since(start))
        })
    }

    /// Fraction of the armed interval already elapsed, in `0.0..=1.0`.
    ///
    /// A zero-length interval counts as complete.
    #[must_use]
    pub fn progress(&self, now: Instant) -> Option<f32> {
        let start = self.started_at?;
        if self.interval.is_zero() {
            return Some(1.0);
        }
        let elapsed = now.saturating_duration_since(start);
        Some((elapsed.as_secs_f32() / self.interval.as_secs_f32()).clamp(0.0, 1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn idle_timer_never_fires() {
        let mut timer = Timer::idle();
        assert!(!timer.is_armed());
        assert!(!timer.fire(Instant::now() + Duration::from_secs(3600)));
    }

    #[test]
    fn fires_once_at_deadline() {
        let start = Instant::now();
        let mut timer = Timer::armed(start, 300 * MS);

        assert!(!timer.fire(start + 299 * MS));
        assert!(timer.fire(start + 300 * MS));
        assert!(!timer.is_armed());
        assert!(!timer.fire(start + 600 * MS));
    }

    #[test]
    fn cancelled_timer_does_not_fire() {
        let start = Instant::now();
        let mut timer = Timer::armed(start, 10 * MS);
        timer.cancel();
        assert!(!timer.fire(start + 20 * MS));
        assert_eq!(timer.remaining(start), None);
    }

    #[test]
    fn rearming_moves_the_deadline() {
        let start = Instant::now();
        let mut timer = Timer::armed(start, 10 * MS);
        timer.arm(start + 5 * MS, 10 * MS);
        assert!(!timer.fire(start + 10 * MS));
        assert!(timer.fire(start + 15 * MS));
    }

    #[test]
    fn remaining_saturates_at_zero() {
        let start = Instant::now();
        let timer = Timer::armed(start, 10 * MS);
        assert_eq!(timer.remaining(start + 4 * MS), Some(6 * MS));
        assert_eq!(timer.remaining(start + 40 * MS), Some(Duration::ZERO));
    }

    #[test]
    fn progress_tracks_elapsed_fraction() {
        let start = Instant::now();
        let timer = Timer::armed(start, 100 * MS);
        assert_eq!(timer.progress(start), Some(0.0));
        let half = timer.progress(start + 50 * MS).unwrap();
        assert!((half - 0.5).abs() < 1e-3);
        assert_eq!(timer.progress(start + 500 * MS), Some(1.0));
        assert_eq!(Timer::armed(start, Duration::ZERO).progress(start), Some(1.0));
        assert_eq!(Timer::idle().progress(start), None);
    }

    #[test]
    fn unbounded_interval_stays_armed_without_firing() {
        let start = Instant::now();
        let mut timer = Timer::armed(start, Duration::MAX);
        assert!(!timer.fire(start + Duration::from_secs(365 * 24 * 3600)));
        assert!(timer.is_armed());
        assert!(timer.progress(start + 10 * MS).unwrap() < 1e-6);
        assert!(timer.remaining(start).is_some());
        timer.cancel();
        assert!(!timer.is_armed());
    }
}
