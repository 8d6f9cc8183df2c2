//! Application state and composition.

use std::sync::Arc;

use milkbutton_domain::PlayerConfig;
use milkbutton_shared::{JsonFileStore, StoreError};

use crate::infrastructure::{
    clock::SystemClock,
    launcher::DecoderLauncher,
    library::AudioLibrary,
    ports::{AudioLauncher, ClockPort},
};
use crate::settings::Settings;
use crate::use_cases::{Announce, PlaybackThrottle};

/// Main application state.
///
/// Bundles everything the handlers need - config store, audio directory and the
/// throttle cell - so nothing is reached through process-wide globals.
/// Passed to HTTP handlers via Axum state.
pub struct App {
    pub config: JsonFileStore<PlayerConfig>,
    pub library: AudioLibrary,
    pub throttle: Arc<PlaybackThrottle>,
    pub announce: Announce,
}

impl App {
    /// Create a new App with explicit dependencies.
    pub fn new(
        config: JsonFileStore<PlayerConfig>,
        library: AudioLibrary,
        launcher: Arc<dyn AudioLauncher>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        let throttle = Arc::new(PlaybackThrottle::new());
        let announce = Announce::new(library.clone(), throttle.clone(), launcher, clock);
        Self {
            config,
            library,
            throttle,
            announce,
        }
    }

    /// Production wiring: real clock and decoder.
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            JsonFileStore::new(settings.config_path()),
            AudioLibrary::new(&settings.audio_dir),
            Arc::new(DecoderLauncher::new(&settings.decoder)),
            Arc::new(SystemClock::new()),
        )
    }

    /// The persisted config, read fresh and clamped into range.
    pub fn load_config(&self) -> PlayerConfig {
        self.config.load().clamped()
    }

    pub fn save_config(&self, config: &PlayerConfig) -> Result<(), StoreError> {
        self.config.save(config)
    }
}
