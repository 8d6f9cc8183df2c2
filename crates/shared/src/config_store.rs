//! Whole-record JSON config store.
//!
//! Each process keeps one small config record in one file. Loads read the
//! whole file or fall back to the record's default; saves rewrite the whole
//! file. There is no field-level persistence and no cross-save transaction:
//! two writers that load, modify and save concurrently can lose one update.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

/// Errors writing a config record. Reads never fail.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to write config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize config: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl StoreError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// File-backed store for one config record of type `T`.
#[derive(Debug)]
pub struct JsonFileStore<T> {
    path: PathBuf,
    _record: PhantomData<fn() -> T>,
}

impl<T> Clone for JsonFileStore<T> {
    fn clone(&self) -> Self {
        Self::new(self.path.clone())
    }
}

impl<T> JsonFileStore<T> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _record: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl<T> JsonFileStore<T>
where
    T: Serialize + DeserializeOwned + Default,
{
    /// Read the whole record.
    ///
    /// A missing file yields the default silently; an unreadable or corrupt
    /// file yields the default with a warning.
    pub fn load(&self) -> T {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "No config file, using defaults");
                return T::default();
            }
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Failed to read config file, using defaults");
                return T::default();
            }
        };

        match serde_json::from_str(&data) {
            Ok(record) => record,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Failed to parse config file, using defaults");
                T::default()
            }
        }
    }

    /// Replace the whole record.
    ///
    /// The record is written to a temporary file in the same directory and
    /// renamed over the old one, so readers see either the old or the new record.
    pub fn save(&self, record: &T) -> Result<(), StoreError> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir).map_err(|e| StoreError::io(&dir, e))?;

        let data = serde_json::to_string_pretty(record)?;
        let mut tmp = tempfile::NamedTempFile::new_in(&dir).map_err(|e| StoreError::io(&dir, e))?;
        tmp.write_all(data.as_bytes())
            .and_then(|_| tmp.as_file().sync_all())
            .map_err(|e| StoreError::io(tmp.path(), e))?;
        tmp.persist(&self.path)
            .map_err(|e| StoreError::io(&self.path, e.error))?;

        tracing::debug!(path = %self.path.display(), "Config saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    #[serde(default)]
    struct Record {
        name: String,
        count: u32,
    }

    #[test]
    fn missing_file_loads_default() {
        let dir = tempfile::tempdir().unwrap();
        let store: JsonFileStore<Record> = JsonFileStore::new(dir.path().join("config.json"));
        assert_eq!(store.load(), Record::default());
    }

    #[test]
    fn corrupt_file_loads_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();
        let store: JsonFileStore<Record> = JsonFileStore::new(&path);
        assert_eq!(store.load(), Record::default());
    }

    #[test]
    fn save_then_load_returns_record() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("nested").join("config.json"));
        let record = Record {
            name: "bell".into(),
            count: 3,
        };
        store.save(&record).unwrap();
        assert_eq!(store.load(), record);
    }

    #[test]
    fn save_rewrites_whole_record() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"name": "old", "count": 1, "stale": true}"#).unwrap();
        let store: JsonFileStore<Record> = JsonFileStore::new(&path);

        let mut record = store.load();
        record.count = 2;
        store.save(&record).unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        assert!(!raw.contains("stale"));
        assert_eq!(store.load().count, 2);
        // no temp files left behind
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }
}
