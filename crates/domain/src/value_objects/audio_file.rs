//! Validated audio filename.
//!
//! Filenames arrive from query strings and config records and are joined onto the
//! player's audio directory, so construction rejects anything that could escape it.

use regex_lite::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

use crate::error::DomainError;

static ALLOWED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9._ -]+$").expect("valid regex"));

/// A filename from the allow-list: letters, digits, space, `.`, `_`, `-`.
///
/// Never contains a path separator or `..`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AudioFileName(String);

impl AudioFileName {
    /// Create a new validated filename.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the name is empty, contains `..`,
    /// a `/` or `\`, or any character outside the allow-list.
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        if name.is_empty() {
            return Err(DomainError::validation("Audio filename cannot be empty"));
        }
        if name.contains("..") || name.contains('/') || name.contains('\\') {
            return Err(DomainError::validation(format!(
                "Audio filename must not contain a path: {name}"
            )));
        }
        if !ALLOWED_RE.is_match(&name) {
            return Err(DomainError::validation(
                "Invalid filename (use only letters, numbers, spaces, . _ -)",
            ));
        }
        Ok(Self(name))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AudioFileName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for AudioFileName {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<AudioFileName> for String {
    fn from(name: AudioFileName) -> String {
        name.0
    }
}

impl AsRef<str> for AudioFileName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
