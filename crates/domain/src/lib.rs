//! Milk Button Domain - the rules of the button-to-speaker pipeline.
//!
//! Pure types with no I/O:
//!
//! - `value_objects/` - validated audio filenames, the two persisted config records
//!   and the play list handed to the decoder
//! - `debounce` - collapses bursts of key-down events into triggers
//! - `throttle` - the playback gate guarding the last launch timestamp

pub mod debounce;
pub mod error;
pub mod throttle;
pub mod value_objects;

pub use debounce::{Debouncer, DEFAULT_DEBOUNCE_WINDOW};
pub use error::DomainError;
pub use throttle::{GateDecision, PlaybackGate};
pub use value_objects::{
    AudioFileName, PlayList, PlayerConfig, PlayerConfigPatch, SenderConfig, DELAY_MAX, DELAY_MIN,
    REPEATS_MAX, REPEATS_MIN, VOLUME_MAX, VOLUME_MIN,
};
