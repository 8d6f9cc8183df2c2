//! Playback gate.
//!
//! Holds `last_played_at`, the wall-clock time of the last decoder launch. It starts
//! at the Unix epoch on every process start and is never persisted. A launch is
//! allowed iff `now - last_played_at >= delay`.
//!
//! The gate itself is a plain value; callers that share it across requests must
//! serialize `try_acquire` (see the player's `PlaybackThrottle`).

use chrono::{DateTime, Duration, Utc};

/// Outcome of a gate check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    /// Launch now; `last_played_at` has been moved to `at`.
    Launch { at: DateTime<Utc> },
    /// Too soon after the previous launch; nothing changed.
    Throttled { remaining: Duration },
}

impl GateDecision {
    pub fn is_launch(&self) -> bool {
        matches!(self, Self::Launch { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackGate {
    last_played_at: DateTime<Utc>,
}

impl PlaybackGate {
    pub fn new() -> Self {
        Self {
            last_played_at: DateTime::<Utc>::UNIX_EPOCH,
        }
    }

    pub fn last_played_at(&self) -> DateTime<Utc> {
        self.last_played_at
    }

    /// Check-and-set in one step.
    pub fn try_acquire(&mut self, now: DateTime<Utc>, delay_secs: u32) -> GateDecision {
        let delay = Duration::seconds(i64::from(delay_secs));
        let elapsed = now - self.last_played_at;
        if elapsed < delay {
            return GateDecision::Throttled {
                remaining: delay - elapsed,
            };
        }
        self.last_played_at = now;
        GateDecision::Launch { at: now }
    }
}

impl Default for PlaybackGate {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn t(secs: i64) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap() + Duration::seconds(secs)
    }

    #[test]
    fn starts_at_epoch() {
        assert_eq!(PlaybackGate::new().last_played_at(), DateTime::<Utc>::UNIX_EPOCH);
    }

    #[test]
    fn throttles_within_delay_and_launches_after() {
        let mut gate = PlaybackGate::new();
        assert!(gate.try_acquire(t(0), 10).is_launch());
        assert_eq!(gate.last_played_at(), t(0));

        let decision = gate.try_acquire(t(5), 10);
        assert_eq!(
            decision,
            GateDecision::Throttled {
                remaining: Duration::seconds(5)
            }
        );
        assert_eq!(gate.last_played_at(), t(0));

        assert!(gate.try_acquire(t(15), 10).is_launch());
        assert_eq!(gate.last_played_at(), t(15));
    }

    #[test]
    fn exactly_delay_apart_launches() {
        let mut gate = PlaybackGate::new();
        assert!(gate.try_acquire(t(0), 10).is_launch());
        assert!(gate.try_acquire(t(10), 10).is_launch());
    }

    #[test]
    fn zero_delay_never_throttles_forward_time() {
        let mut gate = PlaybackGate::new();
        assert!(gate.try_acquire(t(0), 0).is_launch());
        assert!(gate.try_acquire(t(0), 0).is_launch());
    }

    #[test]
    fn last_played_at_never_moves_backwards() {
        let mut gate = PlaybackGate::new();
        let mut previous = gate.last_played_at();
        // a wall clock that jumps backwards must not rewind the gate
        for secs in [0, 30, 12, 45, 44, 100] {
            gate.try_acquire(t(secs), 10);
            assert!(gate.last_played_at() >= previous);
            previous = gate.last_played_at();
        }
    }
}
