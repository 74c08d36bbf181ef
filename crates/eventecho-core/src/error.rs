use std::path::PathBuf;

use thiserror::Error;

/// The vendor catalog could not be loaded.
///
/// This is fatal at startup: nothing can be recommended without a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog not readable at {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed catalog: {0}")]
    Csv(#[from] csv::Error),

    #[error("catalog is missing required column '{0}'")]
    MissingColumn(&'static str),
}

/// A booking row could not be persisted.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("I/O error on booking log {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not encode booking row: {0}")]
    Csv(#[from] csv::Error),

    #[error("malformed booking row {row}: {message}")]
    Malformed { row: usize, message: String },

    #[error("booking log lock poisoned")]
    Poisoned,
}

/// User input was rejected before any state was touched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("guest count must be between {min} and {max}, got {value}")]
    GuestCountOutOfRange { value: u32, min: u32, max: u32 },
}

pub type CatalogResult<T> = std::result::Result<T, CatalogError>;
pub type PersistenceResult<T> = std::result::Result<T, PersistenceError>;
