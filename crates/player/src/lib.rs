//! Milk Button Player library.
//!
//! Runs on the device with the speaker. Accepts announce calls, validates the
//! requested files against the audio directory, applies the playback throttle
//! and launches the decoder detached.
//!
//! ## Structure
//!
//! - `use_cases/` - announce orchestration and the shared playback throttle
//! - `infrastructure/` - ports and their adapters (clock, decoder, audio directory, mDNS)
//! - `api/` - HTTP entry points
//! - `app` - application composition
//! - `settings` - process settings from the environment

pub mod api;
pub mod app;
pub mod infrastructure;
pub mod settings;
pub mod use_cases;

pub use app::App;
pub use settings::Settings;
