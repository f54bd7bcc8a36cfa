//! Key-value storage backends
//!
//! `FileStorage` keeps one file per record under a data directory, writing
//! through a temp file and rename so a crash mid-write never leaves a
//! half-written record. `MemoryStorage` backs tests.

use directories::ProjectDirs;
use rustc_hash::FxHashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Error type for storage writes
///
/// Reads never error: missing or unreadable records surface as `None`.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage I/O failure: {0}")]
    Io(#[from] std::io::Error),
}

/// String-valued key-value store
///
/// Absence of a key is a valid, non-error state.
pub trait Storage {
    /// Read the value stored under `key`, if any
    fn get(&self, key: &str) -> Option<String>;

    /// Durably store `value` under `key`, replacing any previous value
    ///
    /// # Errors
    /// Returns `StorageError` if the value could not be written.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove the value stored under `key`; removing a missing key is a no-op
    ///
    /// # Errors
    /// Returns `StorageError` if an existing value could not be removed.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// Platform data directory for the game's records
///
/// `None` if the platform provides no home directory.
#[must_use]
pub fn default_data_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "hangman_rescue").map(|dirs| dirs.data_dir().to_path_buf())
}

/// File-per-record storage under a base directory
///
/// Records are stored as `{key}.json`. Writes go to a temp file first and
/// are moved into place with an atomic rename.
pub struct FileStorage {
    base_dir: PathBuf,
}

impl FileStorage {
    /// Open storage rooted at `base_dir`, creating the directory if needed
    ///
    /// # Errors
    /// Returns `StorageError` if the directory cannot be created.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self, StorageError> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir)?;
        Ok(Self { base_dir })
    }

    fn record_path(&self, key: &str) -> PathBuf {
        self.base_dir.join(format!("{key}.json"))
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        let path = self.record_path(key);
        match fs::read_to_string(&path) {
            Ok(value) => Some(value),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => {
                tracing::warn!("Failed to read {}: {e}", path.display());
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.record_path(key);
        let temp_path = path.with_extension("json.tmp");

        fs::write(&temp_path, value)?;
        fs::rename(&temp_path, &path)?;

        tracing::debug!("Saved record '{key}' to {}", path.display());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        let path = self.record_path(key);
        if path.exists() {
            fs::remove_file(&path)?;
            tracing::debug!("Removed record '{key}'");
        }
        Ok(())
    }
}

/// In-memory storage for tests
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    records: FxHashMap<String, String>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.records.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.records.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.records.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_storage_round_trip() {
        let mut storage = MemoryStorage::new();
        assert_eq!(storage.get("session"), None);

        storage.set("session", "{}").unwrap();
        assert_eq!(storage.get("session").as_deref(), Some("{}"));

        storage.remove("session").unwrap();
        assert_eq!(storage.get("session"), None);
    }

    #[test]
    fn memory_storage_remove_missing_is_noop() {
        let mut storage = MemoryStorage::new();
        assert!(storage.remove("never-set").is_ok());
    }

    #[test]
    fn file_storage_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = FileStorage::new(dir.path()).unwrap();

        assert_eq!(storage.get("statistics"), None);
        storage.set("statistics", r#"{"victories":1}"#).unwrap();
        assert_eq!(
            storage.get("statistics").as_deref(),
            Some(r#"{"victories":1}"#)
        );

        storage.remove("statistics").unwrap();
        assert_eq!(storage.get("statistics"), None);
    }

    #[test]
    fn file_storage_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = FileStorage::new(dir.path()).unwrap();

        storage.set("session", "first").unwrap();
        storage.set("session", "second").unwrap();
        assert_eq!(storage.get("session").as_deref(), Some("second"));
    }

    #[test]
    fn file_storage_keys_are_independent() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = FileStorage::new(dir.path()).unwrap();

        storage.set("session", "a").unwrap();
        storage.set("sound-preference", "b").unwrap();
        storage.remove("session").unwrap();

        assert_eq!(storage.get("session"), None);
        assert_eq!(storage.get("sound-preference").as_deref(), Some("b"));
    }

    #[test]
    fn file_storage_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("deep").join("nested");
        let storage = FileStorage::new(&nested).unwrap();

        assert!(nested.is_dir());
        assert_eq!(storage.get("session"), None);
    }
}
