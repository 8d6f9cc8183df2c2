//! Milk Button Key Listener library.
//!
//! Reads key-down events from every key-capable input device, debounces them
//! and posts one trigger per accepted press to the sender. The loop is strictly
//! sequential: the next event is read only after the previous trigger returns.

pub mod event_loop;
pub mod input;
pub mod settings;
pub mod trigger;

pub use settings::Settings;
