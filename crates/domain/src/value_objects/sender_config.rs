//! Sender configuration record.
//!
//! `files_to_send` is always a subset of `available_files`; every mutation
//! goes through a method here that re-establishes that.

use serde::{Deserialize, Deserializer, Serialize};

/// Which player the sender targets and what it asks it to play.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SenderConfig {
    /// Player base URL, e.g. `http://192.168.1.2:8000`.
    #[serde(rename = "server")]
    pub server_address: Option<String>,
    /// Mirror of the player's inventory, in the player's order.
    #[serde(rename = "available_audio_files", deserialize_with = "null_as_empty")]
    pub available_files: Vec<String>,
    /// Files named in each announce, in order.
    #[serde(rename = "audio_files_to_send", deserialize_with = "null_as_empty")]
    pub files_to_send: Vec<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Vec<String>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl SenderConfig {
    /// Normalises a user- or discovery-supplied address: trimmed, no trailing `/`.
    ///
    /// Returns `None` when nothing is left.
    pub fn normalize_server(raw: &str) -> Option<String> {
        let trimmed = raw.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }

    /// The configured server address, normalised, if any.
    pub fn server(&self) -> Option<String> {
        self.server_address
            .as_deref()
            .and_then(Self::normalize_server)
    }

    /// Files to send with blank entries dropped.
    pub fn sendable_files(&self) -> Vec<String> {
        self.files_to_send
            .iter()
            .filter(|f| !f.trim().is_empty())
            .cloned()
            .collect()
    }

    /// Point at a player; does not touch the file lists.
    pub fn set_server(&mut self, server: impl Into<String>) {
        self.server_address = Some(server.into());
    }

    /// Forget the player and everything mirrored from it.
    pub fn clear_server(&mut self) {
        self.server_address = None;
        self.available_files.clear();
        self.files_to_send.clear();
    }

    /// Replace the mirrored inventory.
    ///
    /// Selected files no longer on the player are dropped; if nothing is left
    /// selected, the first available file becomes the selection.
    pub fn replace_available_files(&mut self, files: Vec<String>) {
        self.available_files = files;
        self.retain_available();
        if self.files_to_send.is_empty() {
            if let Some(first) = self.available_files.first() {
                self.files_to_send = vec![first.clone()];
            }
        }
    }

    /// Replace the selection, keeping only entries that are available.
    ///
    /// Order and duplicates of `requested` are preserved.
    pub fn select_files(&mut self, requested: Vec<String>) {
        self.files_to_send = requested;
        self.retain_available();
    }

    fn retain_available(&mut self) {
        let available = &self.available_files;
        self.files_to_send.retain(|f| available.contains(f));
        debug_assert!(self.is_consistent());
    }

    /// Whether `files_to_send` is contained in `available_files`.
    pub fn is_consistent(&self) -> bool {
        self.files_to_send
            .iter()
            .all(|f| self.available_files.contains(f))
    }
}
