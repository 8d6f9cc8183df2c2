//! Use cases - the sender's workflows over its ports.

mod config;
mod send;
mod startup;

pub use config::{ConfigError, SenderConfigService};
pub use send::{SendAnnounce, SendError};
pub use startup::{StartupReconciliation, StartupReport};
