//! The player's one piece of shared mutable state.

use std::sync::{Mutex, PoisonError};

use chrono::{DateTime, Utc};
use milkbutton_domain::{GateDecision, PlaybackGate};

/// Serialized access to the playback gate.
///
/// The gate is only reachable through `try_acquire`, which checks and updates
/// `last_played_at` under one lock, so two concurrent announces can never both
/// observe an open gate.
#[derive(Debug, Default)]
pub struct PlaybackThrottle {
    gate: Mutex<PlaybackGate>,
}

impl PlaybackThrottle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn try_acquire(&self, now: DateTime<Utc>, delay_secs: u32) -> GateDecision {
        // the gate is a plain timestamp, so a poisoned lock still holds a valid value
        let mut gate = self.gate.lock().unwrap_or_else(PoisonError::into_inner);
        gate.try_acquire(now, delay_secs)
    }

    pub fn last_played_at(&self) -> DateTime<Utc> {
        self.gate
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last_played_at()
    }
}
