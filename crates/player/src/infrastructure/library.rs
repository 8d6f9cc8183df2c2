//! Audio directory access.
//!
//! Upload and delete are handled outside this service; the player only lists
//! the directory and resolves names against it.

use std::fs;
use std::path::PathBuf;

use milkbutton_domain::AudioFileName;

#[derive(Debug, Clone)]
pub struct AudioLibrary {
    dir: PathBuf,
}

impl AudioLibrary {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Names of the playable regular files in the directory, sorted. Files
    /// whose names fail `AudioFileName` are left out. A missing directory is
    /// an empty library.
    pub fn list(&self) -> Vec<String> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) => {
                if e.kind() != std::io::ErrorKind::NotFound {
                    tracing::warn!(dir = %self.dir.display(), error = %e, "Failed to read audio directory");
                }
                return Vec::new();
            }
        };

        let mut names: Vec<String> = entries
            .filter_map(Result::ok)
            .filter(|entry| entry.path().is_file())
            .filter_map(|entry| {
                let name = entry.file_name().to_string_lossy().into_owned();
                match AudioFileName::new(name.as_str()) {
                    Ok(valid) => Some(valid.into()),
                    Err(_) => {
                        // announce would refuse it, so it is not offered
                        tracing::warn!(file = %name, "Skipping audio file with unplayable name");
                        None
                    }
                }
            })
            .collect();
        names.sort();
        names
    }

    /// Path of an existing regular file with this name.
    pub fn resolve(&self, name: &AudioFileName) -> Option<PathBuf> {
        let path = self.dir.join(name.as_str());
        path.is_file().then_some(path)
    }
}
