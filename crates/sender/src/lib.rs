//! Milk Button Sender library.
//!
//! Runs next to the button. Turns a trigger into one announce call on the
//! configured player, finds the player by multicast discovery when no address
//! is configured, and mirrors the player's file inventory into its own config.
//!
//! ## Structure
//!
//! - `use_cases/` - send, startup reconciliation, config mutations
//! - `infrastructure/` - ports and adapters (mDNS resolver, player HTTP client)
//! - `api/` - HTTP entry points
//! - `app` - application composition

pub mod api;
pub mod app;
pub mod infrastructure;
pub mod settings;
pub mod use_cases;

pub use app::App;
pub use settings::Settings;
