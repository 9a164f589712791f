//! Trailing-edge debounce
//!
//! Collapses a burst of submissions into a single delivery once submissions
//! have stopped arriving for the configured quiet period. The most recent
//! payload wins; suppressed submissions produce nothing.

use std::time::Duration;

/// A trailing-edge debouncer for payloads of type `T`.
///
/// The caller owns the timing: `submit` stores the latest payload and re-arms
/// the quiet timer, and `update(delta)` counts the timer down, yielding the
/// stored payload exactly once when the quiet period has fully elapsed.
#[derive(Debug)]
pub struct Debouncer<T> {
    /// Quiet period that must pass without submissions before firing
    wait: Duration,
    /// Latest payload plus the time remaining before it fires
    pending: Option<(T, Duration)>,
}

impl<T> Debouncer<T> {
    /// Create a debouncer with the given quiet period.
    pub fn new(wait: Duration) -> Self {
        Self {
            wait,
            pending: None,
        }
    }

    /// Record a submission. Replaces any pending payload and restarts the
    /// quiet timer.
    pub fn submit(&mut self, value: T) {
        self.pending = Some((value, self.wait));
    }

    /// Advance time. Returns the pending payload if the quiet period has
    /// elapsed since the last submission, otherwise `None`.
    pub fn update(&mut self, delta: Duration) -> Option<T> {
        let (value, remaining) = self.pending.take()?;
        if delta >= remaining {
            Some(value)
        } else {
            self.pending = Some((value, remaining - delta));
            None
        }
    }

    /// Whether a payload is waiting to fire.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Drop any pending payload without firing it.
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn fires_once_after_quiet_period() {
        let mut debouncer = Debouncer::new(Duration::from_millis(250));
        debouncer.submit(1);

        assert_eq!(debouncer.update(Duration::from_millis(100)), None);
        assert_eq!(debouncer.update(Duration::from_millis(150)), Some(1));
        assert_eq!(debouncer.update(Duration::from_millis(500)), None);
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn burst_collapses_to_last_payload() {
        let mut debouncer = Debouncer::new(Duration::from_millis(250));

        // Submissions arriving faster than the quiet period keep resetting
        // the timer; only the final payload may fire.
        for value in 1..=5 {
            debouncer.submit(value);
            assert_eq!(debouncer.update(Duration::from_millis(100)), None);
        }

        assert_eq!(debouncer.update(Duration::from_millis(250)), Some(5));
        assert_eq!(debouncer.update(Duration::from_millis(250)), None);
    }

    #[test]
    fn resubmission_after_fire_rearms() {
        let mut debouncer = Debouncer::new(Duration::from_millis(50));

        debouncer.submit("a");
        assert_eq!(debouncer.update(Duration::from_millis(60)), Some("a"));

        debouncer.submit("b");
        assert_eq!(debouncer.update(Duration::from_millis(60)), Some("b"));
    }

    #[test]
    fn cancel_drops_pending() {
        let mut debouncer = Debouncer::new(Duration::from_millis(50));
        debouncer.submit(42);
        debouncer.cancel();

        assert_eq!(debouncer.update(Duration::from_secs(1)), None);
    }

    #[test]
    fn oversized_delta_fires_immediately() {
        let mut debouncer = Debouncer::new(Duration::from_millis(250));
        debouncer.submit(7);

        // A single large tick covers the whole quiet period.
        assert_eq!(debouncer.update(Duration::from_secs(10)), Some(7));
    }
}
