//! Player playback settings.
//!
//! Persisted as one record and read fresh on every announce. Every field has an
//! allowed range; out-of-range input is clamped, never rejected.

use serde::{Deserialize, Serialize};

pub const REPEATS_MIN: u32 = 1;
pub const REPEATS_MAX: u32 = 10;
pub const DELAY_MIN: u32 = 0;
pub const DELAY_MAX: u32 = 60;
pub const VOLUME_MIN: u32 = 1;
pub const VOLUME_MAX: u32 = 500_000;

const DEFAULT_REPEATS: u32 = 2;
const DEFAULT_DELAY: u32 = 10;
const DEFAULT_VOLUME: u32 = 32_768;

/// How the player turns an accepted announce into a decoder launch.
///
/// Deserialization never fails on a value out of range: missing fields take
/// their default and present ones are clamped, so one bad field cannot cost
/// the rest of the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "StoredPlayerConfig")]
pub struct PlayerConfig {
    /// Times the requested file sequence is played back to back.
    pub repeats: u32,
    /// Minimum seconds between two launches.
    pub delay: u32,
    /// Decoder output scale factor.
    pub volume: u32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            repeats: DEFAULT_REPEATS,
            delay: DEFAULT_DELAY,
            volume: DEFAULT_VOLUME,
        }
    }
}

impl PlayerConfig {
    /// Returns a copy with every field forced into its allowed range.
    pub fn clamped(self) -> Self {
        Self {
            repeats: self.repeats.clamp(REPEATS_MIN, REPEATS_MAX),
            delay: self.delay.clamp(DELAY_MIN, DELAY_MAX),
            volume: self.volume.clamp(VOLUME_MIN, VOLUME_MAX),
        }
    }

    /// Apply a partial update, clamping each provided field.
    pub fn apply(&mut self, patch: &PlayerConfigPatch) {
        if let Some(repeats) = patch.repeats {
            self.repeats = clamp_i64(repeats, REPEATS_MIN, REPEATS_MAX);
        }
        if let Some(delay) = patch.delay {
            self.delay = clamp_i64(delay, DELAY_MIN, DELAY_MAX);
        }
        if let Some(volume) = patch.volume {
            self.volume = clamp_i64(volume, VOLUME_MIN, VOLUME_MAX);
        }
    }
}

/// On-disk shape, wide enough to hold whatever was written.
#[derive(Deserialize)]
struct StoredPlayerConfig {
    #[serde(default)]
    repeats: Option<i64>,
    #[serde(default)]
    delay: Option<i64>,
    #[serde(default)]
    volume: Option<i64>,
}

impl From<StoredPlayerConfig> for PlayerConfig {
    fn from(stored: StoredPlayerConfig) -> Self {
        let mut config = PlayerConfig::default();
        config.apply(&PlayerConfigPatch {
            repeats: stored.repeats,
            delay: stored.delay,
            volume: stored.volume,
        });
        config
    }
}

/// Partial player config update; absent fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerConfigPatch {
    #[serde(default)]
    pub repeats: Option<i64>,
    #[serde(default)]
    pub delay: Option<i64>,
    #[serde(default)]
    pub volume: Option<i64>,
}

fn clamp_i64(value: i64, min: u32, max: u32) -> u32 {
    // min/max are u32 so the clamped value always fits
    value.clamp(i64::from(min), i64::from(max)) as u32
}
