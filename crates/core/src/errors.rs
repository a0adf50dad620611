//! Core error types for the termfolio engine.
//!
//! This module defines storage-agnostic error types. Storage-specific errors
//! (file system, temp files) are converted to these types by the storage layer.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the engine.
///
/// Every failure is local to the operation that produced it. None of these
/// leave an account or asset partially mutated.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Asset not found: {0}")]
    NotFound(String),

    #[error("Snapshot decode failed: {0}")]
    Decode(#[from] DecodeError),

    #[error("Storage operation failed: {0}")]
    Storage(#[from] StorageError),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Validation errors for user input and configuration values.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Failures turning a stored snapshot back into an account.
///
/// Decoding is all-or-nothing: no partially built account is ever returned.
#[derive(Error, Debug)]
pub enum DecodeError {
    /// The payload is not valid snapshot JSON (syntax, missing field, wrong type).
    #[error("Malformed snapshot: {0}")]
    Malformed(String),

    /// The payload parsed but a record breaks an asset invariant.
    #[error("Invalid asset record '{name}': {reason}")]
    InvalidRecord { name: String, reason: String },

    /// Two records in the snapshot share a name.
    #[error("Duplicate asset name in snapshot: {0}")]
    DuplicateAsset(String),
}

/// Storage-agnostic error type for snapshot persistence.
///
/// Uses `String` details so storage crates can convert their own error
/// types without this crate depending on them.
#[derive(Error, Debug)]
pub enum StorageError {
    /// No snapshot exists at the configured location.
    #[error("Snapshot not found: {0}")]
    NotFound(String),

    /// Reading the snapshot failed.
    #[error("Failed to read snapshot: {0}")]
    ReadFailed(String),

    /// Writing or replacing the snapshot failed.
    #[error("Failed to write snapshot: {0}")]
    WriteFailed(String),
}

impl From<serde_json::Error> for DecodeError {
    fn from(err: serde_json::Error) -> Self {
        DecodeError::Malformed(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Decode(DecodeError::from(err))
    }
}

impl Error {
    /// Shorthand for an `InvalidInput` validation error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Error::Validation(ValidationError::InvalidInput(message.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_is_validation_error() {
        let err = Error::invalid_input("Principal must be positive");
        assert!(matches!(
            err,
            Error::Validation(ValidationError::InvalidInput(ref msg)) if msg == "Principal must be positive"
        ));
        assert_eq!(
            err.to_string(),
            "Input validation failed: Invalid input: Principal must be positive"
        );
    }

    #[test]
    fn test_json_error_becomes_malformed_decode_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{ not json").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Decode(DecodeError::Malformed(_))));
    }
}
