//! Error types for the contact management core.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::validation::FieldError;
use thiserror::Error;

/// Errors raised by a contact store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The composite uniqueness constraint rejected the insert.
    ///
    /// This is an expected, recoverable outcome under concurrent writers,
    /// not a generic fault.
    #[error("A duplicate entry for this contact already exists")]
    DuplicateContact,

    /// No contact with the given ID exists.
    #[error("Contact not found: {0}")]
    NotFound(String),

    /// The storage backend failed.
    #[error("Storage backend error: {0}")]
    Backend(String),
}

/// File-level errors that abort a bulk import.
///
/// Row-level problems never surface here; they are aggregated into the
/// import report instead.
#[derive(Error, Debug)]
pub enum ImportError {
    /// The file name does not carry the expected `.tsv` extension.
    #[error("Invalid file type: expected a .tsv file, got '{0}'")]
    InvalidFileType(String),

    /// Reading the file itself failed (I/O or encoding).
    #[error("Failed to read import file: {0}")]
    FileRead(String),
}

/// Errors raised when creating a single contact through the service layer.
#[derive(Error, Debug)]
pub enum CreateContactError {
    /// The candidate failed validation; field-level details attached.
    #[error("Contact validation failed")]
    Invalid(Vec<FieldError>),

    /// The store rejected the insert (duplicate key or backend failure).
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Errors that can occur during configuration loading.
///
/// Every variable currently has a default, so only invalid values fail.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with StoreError
pub type StoreResult<T> = Result<T, StoreError>;

/// Convenience type alias for Results with ImportError
pub type ImportResult<T> = Result<T, ImportError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
