//! Announce use case - validate, throttle, launch.

use std::path::PathBuf;
use std::sync::Arc;

use milkbutton_domain::{AudioFileName, GateDecision, PlayList, PlayerConfig};

use super::throttle::PlaybackThrottle;
use crate::infrastructure::library::AudioLibrary;
use crate::infrastructure::ports::{AudioLauncher, ClockPort, LaunchError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnnounceOutcome {
    /// The decoder was started with this many play list entries.
    Launched { entries: usize },
    /// Within the configured delay of the previous launch; nothing was started.
    Throttled,
}

#[derive(Debug, thiserror::Error)]
pub enum AnnounceError {
    #[error("No file provided to play")]
    NoFiles,

    #[error("Unknown file: {0}")]
    UnknownFile(String),

    #[error("Failed to play audio: {0}")]
    Launch(#[from] LaunchError),
}

/// Turns a list of requested filenames into at most one decoder launch.
///
/// The request names an atomic set: one unknown file rejects the whole request
/// before the throttle is consulted.
pub struct Announce {
    library: AudioLibrary,
    throttle: Arc<PlaybackThrottle>,
    launcher: Arc<dyn AudioLauncher>,
    clock: Arc<dyn ClockPort>,
}

impl Announce {
    pub fn new(
        library: AudioLibrary,
        throttle: Arc<PlaybackThrottle>,
        launcher: Arc<dyn AudioLauncher>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        Self {
            library,
            throttle,
            launcher,
            clock,
        }
    }

    pub fn execute(
        &self,
        requested: &[String],
        config: &PlayerConfig,
    ) -> Result<AnnounceOutcome, AnnounceError> {
        if requested.is_empty() {
            return Err(AnnounceError::NoFiles);
        }

        let paths = self.resolve_all(requested)?;

        let now = self.clock.now();
        match self.throttle.try_acquire(now, config.delay) {
            GateDecision::Throttled { remaining } => {
                tracing::debug!(
                    remaining_ms = remaining.num_milliseconds(),
                    "Announce throttled"
                );
                Ok(AnnounceOutcome::Throttled)
            }
            GateDecision::Launch { .. } => {
                let play_list = PlayList::expand(&paths, config.repeats);
                // the gate stays claimed even if the launch fails
                self.launcher.launch(&play_list, config.volume)?;
                tracing::info!(
                    files = ?requested,
                    repeats = config.repeats,
                    volume = config.volume,
                    "Playback started"
                );
                Ok(AnnounceOutcome::Launched {
                    entries: play_list.len(),
                })
            }
        }
    }

    fn resolve_all(&self, requested: &[String]) -> Result<Vec<PathBuf>, AnnounceError> {
        requested
            .iter()
            .map(|name| {
                AudioFileName::new(name.as_str())
                    .ok()
                    .and_then(|valid| self.library.resolve(&valid))
                    .ok_or_else(|| {
                        tracing::warn!(file = %name, "Announce rejected: unknown file");
                        AnnounceError::UnknownFile(name.clone())
                    })
            })
            .collect()
    }
}
