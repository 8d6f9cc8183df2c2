//! Key listener settings from the environment.

use std::path::PathBuf;
use std::time::Duration;

use milkbutton_domain::DEFAULT_DEBOUNCE_WINDOW;

#[derive(Debug, Clone)]
pub struct Settings {
    /// Trigger endpoint on the sender.
    pub sender_url: String,
    pub debounce: Duration,
    pub trigger_timeout: Duration,
    /// Directory scanned for `event*` device nodes.
    pub input_dir: PathBuf,
}

impl Settings {
    pub fn from_env() -> Self {
        let debounce_secs = parse_env("DEBOUNCE_SECS", DEFAULT_DEBOUNCE_WINDOW.as_secs_f64());
        let debounce = Duration::try_from_secs_f64(debounce_secs).unwrap_or_else(|_| {
            tracing::warn!(value = debounce_secs, "Invalid debounce window, using default");
            DEFAULT_DEBOUNCE_WINDOW
        });

        Self {
            sender_url: env_or("SENDER_URL", "http://127.0.0.1:8000/send"),
            debounce,
            trigger_timeout: Duration::from_secs(parse_env("TRIGGER_TIMEOUT_SECS", 5)),
            input_dir: PathBuf::from(env_or("INPUT_DIR", "/dev/input")),
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
