//! Use cases - orchestration of the announce flow.

pub mod announce;
pub mod throttle;

pub use announce::{Announce, AnnounceError, AnnounceOutcome};
pub use throttle::PlaybackThrottle;
