// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trailing-edge debounce over a caller-supplied clock.
//!
//! ## Usage
//!
//! 1) Call [`Debouncer::trigger`] with the current time on every event.
//! 2) Sleep until [`Debouncer::deadline`] (or just poll on every frame).
//! 3) Call [`Debouncer::poll`]; it returns `true` once, after the burst goes quiet.
//!
//! Time is a [`Duration`] since any fixed epoch the caller chooses (a frame clock,
//! `Instant::elapsed` of a start instant, a test counter). Nothing here reads a
//! system clock, so behavior is deterministic.
//!
//! ```
//! use core::time::Duration;
//! use understory_ripple::debounce::Debouncer;
//!
//! let ms = Duration::from_millis;
//! let mut d = Debouncer::new(ms(750));
//! d.trigger(ms(0));
//! d.trigger(ms(500));
//! assert!(!d.poll(ms(1249)));
//! assert!(d.poll(ms(1250)));
//! assert!(!d.poll(ms(5000)));
//! ```

use core::time::Duration;

/// A reschedulable one-shot timer.
///
/// Each [`trigger`](Self::trigger) replaces any pending deadline, so only the last
/// event of a burst fires.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Debouncer {
    delay: Duration,
    deadline: Option<Duration>,
}

impl Debouncer {
    /// Create an idle debouncer with the given quiet period.
    pub const fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// Quiet period after the last trigger.
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedule the deadline at `now + delay`, superseding any pending one.
    pub fn trigger(&mut self, now: Duration) {
        self.deadline = Some(now.saturating_add(self.delay));
    }

    /// Drop the pending deadline, if any.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// The pending deadline, if any.
    pub const fn deadline(&self) -> Option<Duration> {
        self.deadline
    }

    /// Returns true if a deadline is pending.
    pub const fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Returns true exactly once when `now` has reached the pending deadline.
    pub fn poll(&mut self, now: Duration) -> bool {
        match self.deadline {
            Some(at) if now >= at => {
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

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn idle_never_fires() {
        let mut d = Debouncer::new(ms(750));
        assert!(!d.is_pending());
        assert!(!d.poll(ms(0)));
        assert!(!d.poll(ms(10_000)));
    }

    #[test]
    fn single_trigger_fires_once_at_deadline() {
        let mut d = Debouncer::new(ms(750));
        d.trigger(ms(100));
        assert_eq!(d.deadline(), Some(ms(850)));
        assert!(!d.poll(ms(849)));
        assert!(d.poll(ms(850)));
        assert!(!d.is_pending());
        assert!(!d.poll(ms(851)));
    }

    // Burst at 0 and 500: one fire, at 1250.
    #[test]
    fn burst_collapses_to_last_trigger() {
        let mut d = Debouncer::new(ms(750));
        let mut fired = 0;
        let mut fired_at = None;
        for t in 0..=3000_u64 {
            if t == 0 || t == 500 {
                d.trigger(ms(t));
            }
            if d.poll(ms(t)) {
                fired += 1;
                fired_at = Some(t);
            }
        }
        assert_eq!(fired, 1);
        assert_eq!(fired_at, Some(1250));
    }

    #[test]
    fn late_poll_still_fires() {
        let mut d = Debouncer::new(ms(750));
        d.trigger(ms(0));
        assert!(d.poll(ms(60_000)));
    }

    #[test]
    fn cancel_suppresses_fire() {
        let mut d = Debouncer::new(ms(750));
        d.trigger(ms(0));
        d.cancel();
        assert!(!d.poll(ms(750)));
    }

    #[test]
    fn saturates_at_clock_limit() {
        let mut d = Debouncer::new(ms(750));
        d.trigger(Duration::MAX);
        assert_eq!(d.deadline(), Some(Duration::MAX));
        assert!(d.poll(Duration::MAX));
    }
}
