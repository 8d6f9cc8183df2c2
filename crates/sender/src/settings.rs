//! Sender process settings from the environment.

use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub config_path: PathBuf,
    /// How long one discovery attempt listens for advertisements.
    pub discovery_timeout: Duration,
    /// Bound on the player's file-listing call.
    pub files_timeout: Duration,
    /// Bound on the announce call; longer than the trigger's because it also
    /// waits on the player's playback decision.
    pub announce_timeout: Duration,
}

impl Settings {
    pub fn from_env() -> Self {
        Self {
            host: env_or("SENDER_HOST", "0.0.0.0"),
            port: parse_env("SENDER_PORT", 8000),
            config_path: PathBuf::from(env_or("SENDER_CONFIG_PATH", "config.json")),
            discovery_timeout: Duration::from_secs(parse_env("DISCOVERY_TIMEOUT_SECS", 5)),
            files_timeout: Duration::from_secs(parse_env("FILES_TIMEOUT_SECS", 5)),
            announce_timeout: Duration::from_secs(parse_env("ANNOUNCE_TIMEOUT_SECS", 10)),
        }
    }
}

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

fn parse_env<T: std::str::FromStr + std::fmt::Display>(name: &str, default: T) -> T {
    match std::env::var(name) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(var = name, value = %raw, default = %default, "Invalid value, using default");
            default
        }),
        Err(_) => default,
    }
}
