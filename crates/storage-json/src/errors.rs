//! Storage-specific error types for file operations.
//!
//! This module wraps `std::io` and `serde_json` errors and converts them to
//! the storage-agnostic error types defined in `termfolio_core`.

use std::io;

use thiserror::Error;
use termfolio_core::errors::{Error, StorageError as CoreStorageError};

/// File storage errors.
///
/// These errors are internal to the storage layer and are converted to
/// `termfolio_core::Error` before being returned to callers.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Snapshot file not found: {0}")]
    NotFound(String),

    #[error("Failed to read {path}: {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    WriteFailed {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<StorageError> for Error {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::NotFound(path) => Error::Storage(CoreStorageError::NotFound(path)),
            e @ StorageError::ReadFailed { .. } => {
                Error::Storage(CoreStorageError::ReadFailed(e.to_string()))
            }
            e @ StorageError::WriteFailed { .. } => {
                Error::Storage(CoreStorageError::WriteFailed(e.to_string()))
            }
            StorageError::SerializationError(e) => Error::Unexpected(e),
        }
    }
}

/// Extension trait for converting storage results to core results.
pub trait IntoCore<T> {
    fn into_core(self) -> termfolio_core::Result<T>;
}

impl<T> IntoCore<T> for std::result::Result<T, StorageError> {
    fn into_core(self) -> termfolio_core::Result<T> {
        self.map_err(Error::from)
    }
}
