//! Error handling utilities for the gratia application.
//!
//! This module provides the central error type `AppError` which represents all
//! possible error conditions that might occur in the application, as well as the
//! convenience type alias `AppResult` for functions that can return these errors.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Represents specific error cases that can occur when interacting with the
/// persistent key-value store.
///
/// Every store access is a whole-file read or a read-merge-write cycle, so the
/// failure modes are reading, parsing, locking, and writing the backing file.
/// Each variant captures the path involved and the underlying cause so errors
/// can be surfaced to the user with enough context to act on.
///
/// # Examples
///
/// ```
/// use gratia::errors::StorageError;
/// use std::io::{self, ErrorKind};
/// use std::path::PathBuf;
///
/// let io_error = io::Error::new(ErrorKind::PermissionDenied, "permission denied");
/// let error = StorageError::ReadFailed {
///     path: PathBuf::from("/data/store.json"),
///     source: io_error,
/// };
///
/// assert!(format!("{}", error).contains("Failed to read"));
/// assert!(format!("{}", error).contains("store.json"));
/// ```
#[derive(Debug, Error)]
pub enum StorageError {
    /// Error when the store backing file cannot be read.
    #[error("Failed to read store file {path}: {source}. Please check file permissions and that the data directory is accessible.")]
    ReadFailed {
        /// The path to the store backing file
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Error when the store backing file cannot be written.
    #[error("Failed to write store file {path}: {source}. Please check disk space and file permissions.")]
    WriteFailed {
        /// The path to the store backing file
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Error when the advisory lock on the store file cannot be acquired.
    #[error("Failed to lock store file {path}: {source}. Another gratia process may be holding the lock.")]
    LockFailed {
        /// The path to the store backing file
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Error when the store contents are not a valid JSON object.
    #[error("Store file {path} is corrupt: {message}")]
    Corrupt {
        /// The path to the store backing file
        path: PathBuf,
        /// A description of what was malformed
        message: String,
    },

    /// Error when a stored value cannot be decoded into the expected shape.
    #[error("Stored value under key '{key}' has an unexpected shape: {source}")]
    Decode {
        /// The store key whose value failed to decode
        key: String,
        /// The underlying serde error
        #[source]
        source: serde_json::Error,
    },
}

/// Represents error cases that can occur while producing the export document.
///
/// The layout engine itself is infallible; these errors come from the backend
/// that renders the laid-out document to disk. Export failures are surfaced to
/// the user for a manual retry and are never retried automatically.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Error when the export backend fails to write the output file.
    #[error("Failed to write export file {path}: {source}. Please retry the export.")]
    WriteFailed {
        /// The path of the export artifact
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Error when there is nothing to export.
    #[error("No journal entries to export")]
    Empty,
}

/// Represents all possible errors that can occur in the gratia application.
///
/// This enum is the central error type used across the application, with variants
/// for different error categories. It uses `thiserror` for deriving the `Error`
/// trait implementation and formatted error messages.
///
/// # Examples
///
/// Creating a validation error:
/// ```
/// use gratia::errors::AppError;
///
/// let error = AppError::Validation("Entry text cannot be empty".to_string());
/// assert_eq!(
///     format!("{}", error),
///     "Validation error: Entry text cannot be empty"
/// );
/// ```
///
/// Converting from an IO error:
/// ```
/// use gratia::errors::AppError;
/// use std::io::{self, ErrorKind};
///
/// let io_error = io::Error::new(ErrorKind::NotFound, "file not found");
/// let app_error: AppError = io_error.into();
///
/// match app_error {
///     AppError::Io(inner) => assert_eq!(inner.kind(), ErrorKind::NotFound),
///     _ => panic!("Expected Io variant"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Errors related to configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input/output errors from filesystem operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Errors from rejected user input, caught before any persistence attempt.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Errors from the persistent key-value store.
    ///
    /// This variant uses a dedicated StorageError type to provide detailed
    /// information about what went wrong with the store backing file.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Errors from the export backend.
    #[error("Export error: {0}")]
    Export(#[from] ExportError),
}

/// A type alias for `Result<T, AppError>` to simplify function signatures.
pub type AppResult<T> = Result<T, AppError>;
