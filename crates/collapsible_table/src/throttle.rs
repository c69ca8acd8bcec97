//! Rate limiter for bursty signals.
//!
//! [`Throttle`] lets at most one value through per interval. The first value
//! after a quiet period passes immediately (leading edge); values arriving
//! inside the interval are parked, keeping only the latest, and released by
//! [`Throttle::poll`] once the interval has elapsed (trailing edge). The final
//! value of a burst is therefore never lost.
//!
//! Time is always supplied by the caller, so the limiter does not depend on any
//! timer or event loop.
//!
//! # Example
//!
//! ```rust
//! use std::time::{Duration, Instant};
//! use collapsible_table::throttle::Throttle;
//!
//! let mut throttle = Throttle::new(Duration::from_millis(150));
//! let start = Instant::now();
//!
//! assert_eq!(throttle.offer(800, start), Some(800));
//! assert_eq!(throttle.offer(700, start + Duration::from_millis(10)), None);
//! assert_eq!(throttle.offer(600, start + Duration::from_millis(20)), None);
//!
//! assert_eq!(throttle.poll(start + Duration::from_millis(100)), None);
//! assert_eq!(throttle.poll(start + Duration::from_millis(150)), Some(600));
//! ```

use std::time::{Duration, Instant};

/// Default minimum spacing between layout recomputations.
pub const DEFAULT_RESIZE_INTERVAL: Duration = Duration::from_millis(150);

/// Leading- and trailing-edge rate limiter.
#[derive(Debug, Clone)]
pub struct Throttle<T> {
    interval: Duration,
    last_fired: Option<Instant>,
    pending: Option<T>,
}

impl<T> Throttle<T> {
    /// Creates a throttle letting one value through per `interval`.
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_fired: None,
            pending: None,
        }
    }

    /// Returns the configured interval.
    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    fn ready(&self, now: Instant) -> bool {
        self.last_fired
            .is_none_or(|last| now.saturating_duration_since(last) >= self.interval)
    }

    /// Offers a value. Returns it when it may be applied now, otherwise parks
    /// it for the trailing edge.
    pub fn offer(&mut self, value: T, now: Instant) -> Option<T> {
        if self.ready(now) {
            self.last_fired = Some(now);
            self.pending = None;
            tracing::trace!("throttle passed value on leading edge");
            Some(value)
        } else {
            self.pending = Some(value);
            tracing::trace!("throttle parked value");
            None
        }
    }

    /// Releases the parked value once the interval has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        if self.pending.is_none() || !self.ready(now) {
            return None;
        }
        self.last_fired = Some(now);
        tracing::trace!("throttle released value on trailing edge");
        self.pending.take()
    }

    /// Returns whether a value is waiting for the trailing edge.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// When the parked value becomes releasable, if there is one.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref()?;
        Some(self.last_fired.map_or_else(Instant::now, |last| last + self.interval))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn first_value_passes_immediately() {
        let mut t = Throttle::new(ms(150));
        assert_eq!(t.offer(1, Instant::now()), Some(1));
        assert!(!t.has_pending());
    }

    #[test]
    fn burst_keeps_only_latest_value() {
        let mut t = Throttle::new(ms(150));
        let start = Instant::now();
        assert_eq!(t.offer(1, start), Some(1));
        assert_eq!(t.offer(2, start + ms(50)), None);
        assert_eq!(t.offer(3, start + ms(100)), None);
        assert!(t.has_pending());
        assert_eq!(t.deadline(), Some(start + ms(150)));

        assert_eq!(t.poll(start + ms(149)), None);
        assert_eq!(t.poll(start + ms(150)), Some(3));
        assert_eq!(t.poll(start + ms(400)), None);
    }

    #[test]
    fn value_after_quiet_period_passes() {
        let mut t = Throttle::new(ms(150));
        let start = Instant::now();
        assert_eq!(t.offer(1, start), Some(1));
        assert_eq!(t.offer(2, start + ms(200)), Some(2));
    }

    #[test]
    fn trailing_release_restarts_interval() {
        let mut t = Throttle::new(ms(150));
        let start = Instant::now();
        t.offer(1, start);
        t.offer(2, start + ms(10));
        assert_eq!(t.poll(start + ms(160)), Some(2));
        assert_eq!(t.offer(3, start + ms(200)), None);
        assert_eq!(t.poll(start + ms(310)), Some(3));
    }

    #[test]
    fn leading_value_discards_stale_pending() {
        let mut t = Throttle::new(ms(150));
        let start = Instant::now();
        t.offer(1, start);
        t.offer(2, start + ms(10));
        assert_eq!(t.offer(3, start + ms(500)), Some(3));
        assert_eq!(t.poll(start + ms(1000)), None);
    }
}
