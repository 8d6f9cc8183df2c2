//! Port traits for infrastructure boundaries.
//!
//! Ports exist for:
//! - Time (the throttle compares wall-clock timestamps)
//! - Decoder launch (tests assert on play list and volume without producing audio)

use chrono::{DateTime, Utc};
use milkbutton_domain::PlayList;
use std::path::PathBuf;

#[cfg_attr(test, mockall::automock)]
pub trait ClockPort: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Starts playback of a play list. Fire-and-forget: implementations must not
/// wait for playback to finish.
#[cfg_attr(test, mockall::automock)]
pub trait AudioLauncher: Send + Sync {
    fn launch(&self, play_list: &PlayList<PathBuf>, volume: u32) -> Result<(), LaunchError>;
}

#[derive(Debug, thiserror::Error)]
pub enum LaunchError {
    #[error("Failed to start decoder {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
}
