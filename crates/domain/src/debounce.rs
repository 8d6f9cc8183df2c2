//! Key-event debouncing.
//!
//! A trigger at monotonic time `T` passes iff `T - last >= window`, where `last`
//! is the time of the previous trigger that passed. The first event always passes.

use std::time::{Duration, Instant};

/// Default minimum spacing between two triggers.
pub const DEFAULT_DEBOUNCE_WINDOW: Duration = Duration::from_secs(1);

/// Collapses bursts of key-down events into single triggers.
#[derive(Debug, Clone)]
pub struct Debouncer {
    window: Duration,
    last_trigger: Option<Instant>,
}

impl Debouncer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            last_trigger: None,
        }
    }

    /// Returns `true` if an event at `at` should be forwarded, recording it as
    /// the latest trigger. Dropped events leave the state untouched.
    pub fn accept(&mut self, at: Instant) -> bool {
        if let Some(last) = self.last_trigger {
            // saturating: an event stamped before the last trigger is inside the window
            if at.saturating_duration_since(last) < self.window {
                return false;
            }
        }
        self.last_trigger = Some(at);
        true
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE_WINDOW)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offsets(debouncer: &mut Debouncer, base: Instant, millis: &[u64]) -> Vec<u64> {
        millis
            .iter()
            .copied()
            .filter(|ms| debouncer.accept(base + Duration::from_millis(*ms)))
            .collect()
    }

    #[test]
    fn first_event_always_passes() {
        let mut debouncer = Debouncer::default();
        assert!(debouncer.accept(Instant::now()));
    }

    #[test]
    fn burst_collapses_to_one_trigger() {
        let mut debouncer = Debouncer::default();
        let base = Instant::now();
        let passed = offsets(&mut debouncer, base, &[0, 10, 50, 300, 999]);
        assert_eq!(passed, vec![0]);
    }

    #[test]
    fn window_is_measured_from_last_forwarded_event() {
        let mut debouncer = Debouncer::default();
        let base = Instant::now();
        // 900 is dropped, so 1500 is measured against 0 and passes; 2400 is 900ms after 1500
        let passed = offsets(&mut debouncer, base, &[0, 900, 1500, 2400, 2500]);
        assert_eq!(passed, vec![0, 1500, 2500]);
    }

    #[test]
    fn exactly_one_window_apart_passes() {
        let mut debouncer = Debouncer::new(Duration::from_millis(250));
        let base = Instant::now();
        let passed = offsets(&mut debouncer, base, &[0, 250, 499, 500]);
        assert_eq!(passed, vec![0, 250, 500]);
    }
}
