//! Test doubles for the player ports.
//!
//! Available to this crate's tests and, behind the `testing` feature, to other
//! crates that run a real player router in-process.

use std::path::PathBuf;
use std::sync::{Arc, Mutex, PoisonError};

use chrono::{DateTime, Duration, Utc};
use milkbutton_domain::PlayList;

use super::ports::{AudioLauncher, ClockPort, LaunchError};

/// One recorded decoder launch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedLaunch {
    pub files: Vec<PathBuf>,
    pub volume: u32,
}

impl RecordedLaunch {
    /// File names only, for assertions independent of the audio directory.
    pub fn file_names(&self) -> Vec<String> {
        self.files
            .iter()
            .filter_map(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .collect()
    }
}

/// Records launches instead of spawning a decoder.
#[derive(Debug, Clone, Default)]
pub struct RecordingLauncher {
    launches: Arc<Mutex<Vec<RecordedLaunch>>>,
}

impl RecordingLauncher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn launches(&self) -> Vec<RecordedLaunch> {
        self.launches
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl AudioLauncher for RecordingLauncher {
    fn launch(&self, play_list: &PlayList<PathBuf>, volume: u32) -> Result<(), LaunchError> {
        self.launches
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(RecordedLaunch {
                files: play_list.entries().to_vec(),
                volume,
            });
        Ok(())
    }
}

/// A clock that only moves when told to.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Arc<Mutex<DateTime<Utc>>>,
}

impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            now: Arc::new(Mutex::new(start)),
        }
    }

    pub fn set(&self, at: DateTime<Utc>) {
        *self.now.lock().unwrap_or_else(PoisonError::into_inner) = at;
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap_or_else(PoisonError::into_inner);
        *now += by;
    }
}

impl ClockPort for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
