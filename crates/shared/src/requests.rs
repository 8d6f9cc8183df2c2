//! Request bodies.

use serde::{Deserialize, Deserializer, Serialize};

/// Partial sender config update.
///
/// `server` distinguishes "absent" (`None`) from "present but null or blank"
/// (`Some(None)` / `Some(Some(""))`), which clears the player.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SenderConfigPatch {
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub server: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_files_to_send: Option<Vec<String>>,
}

fn deserialize_present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}
