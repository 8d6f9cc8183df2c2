//! Player process settings.
//!
//! Read once at startup from the environment (after `.env` is loaded). These
//! are distinct from `PlayerConfig`, which is persisted and read per request.

use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    /// Directory holding `config.json`.
    pub data_dir: PathBuf,
    /// Directory the announce endpoint plays from.
    pub audio_dir: PathBuf,
    /// Decoder binary, invoked as `<decoder> -f <volume> -q <files..>`.
    pub decoder: String,
    /// Register the player on multicast DNS so senders can discover it.
    pub advertise: bool,
    pub instance_name: String,
}

impl Settings {
    pub fn from_env() -> Self {
        let data_dir = PathBuf::from(env_or("PLAYER_DATA_DIR", "."));
        let audio_dir = std::env::var("PLAYER_AUDIO_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| data_dir.join("audio"));

        Self {
            host: env_or("PLAYER_HOST", "0.0.0.0"),
            port: parse_env("PLAYER_PORT", 8000),
            data_dir,
            audio_dir,
            decoder: env_or("PLAYER_DECODER", "mpg123"),
            advertise: parse_env("PLAYER_ADVERTISE", true),
            instance_name: env_or("PLAYER_INSTANCE_NAME", "milkbutton-player"),
        }
    }

    pub fn config_path(&self) -> PathBuf {
        self.data_dir.join("config.json")
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
