//! Storage adapters for the persisted builder record.

use crate::errors::StorageError;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Name of the persisted record.
pub const STORAGE_KEY: &str = "web-builder-storage";

/// Default file name used by [`FileStorage`].
pub const DEFAULT_STORAGE_FILE: &str = "web-builder-storage.json";

/// Load/save access to a single serialized state record.
pub trait Storage {
    /// Read the record, `Ok(None)` when nothing has been saved yet.
    fn load(&self) -> Result<Option<String>, StorageError>;

    /// Overwrite the record.
    fn save(&mut self, record: &str) -> Result<(), StorageError>;
}

/// In-memory storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    record: Option<String>,
    saves: usize,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-seeded with a record.
    pub fn with_record(record: impl Into<String>) -> Self {
        Self {
            record: Some(record.into()),
            saves: 0,
        }
    }

    pub fn record(&self) -> Option<&str> {
        self.record.as_deref()
    }

    /// Number of saves performed.
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl Storage for MemoryStorage {
    fn load(&self) -> Result<Option<String>, StorageError> {
        Ok(self.record.clone())
    }

    fn save(&mut self, record: &str) -> Result<(), StorageError> {
        self.record = Some(record.to_string());
        self.saves += 1;
        Ok(())
    }
}

/// A JSON file on disk.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Storage for FileStorage {
    fn load(&self) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(record) => Ok(Some(record)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Read {
                path: self.path.clone(),
                source,
            }),
        }
    }

    fn save(&mut self, record: &str) -> Result<(), StorageError> {
        // Write beside the target, then rename over it.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, record)
            .and_then(|_| fs::rename(&tmp, &self.path))
            .map_err(|source| StorageError::Write {
                path: self.path.clone(),
                source,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage() {
        let mut storage = MemoryStorage::new();
        assert_eq!(storage.load().unwrap(), None);
        storage.save("{}").unwrap();
        assert_eq!(storage.load().unwrap().as_deref(), Some("{}"));
        assert_eq!(storage.saves(), 1);
    }

    #[test]
    fn test_file_storage_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join(DEFAULT_STORAGE_FILE));
        assert_eq!(storage.load().unwrap(), None);
    }

    #[test]
    fn test_file_storage_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = FileStorage::new(dir.path().join(DEFAULT_STORAGE_FILE));
        storage.save(r#"{"components":[],"framework":"vue"}"#).unwrap();
        assert_eq!(
            storage.load().unwrap().as_deref(),
            Some(r#"{"components":[],"framework":"vue"}"#)
        );
    }

    #[test]
    fn test_file_storage_write_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = FileStorage::new(dir.path().join("missing").join("state.json"));
        assert!(matches!(
            storage.save("{}"),
            Err(StorageError::Write { .. })
        ));
    }
}
