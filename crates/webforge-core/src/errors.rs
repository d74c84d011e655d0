//! Error types for the component store.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by store mutations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Index {index} is out of range for a sequence of {len} components")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Errors from a storage adapter.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}
