//! Error types for weather-grid-db
//!
//! Every variant is recoverable: a failed operation leaves the store unchanged.

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// weather-grid-db error types
#[derive(Error, Debug)]
pub enum Error {
    /// A key axis was empty at construction
    #[error("Invalid dimension: {0} must contain at least one key")]
    InvalidDimension(&'static str),

    /// The absent-cell fill value is not a finite number
    #[error("Invalid sentinel: {0} (sentinel must be finite)")]
    InvalidSentinel(f64),

    /// A key appears twice in an axis under the reject policy
    #[error("Duplicate key on {axis} axis: {key}")]
    DuplicateKey {
        /// Axis name ("year" or "city")
        axis: &'static str,
        /// Offending key, formatted
        key: String,
    },

    /// Year is not part of the fixed row key set
    #[error("Unknown year: {0} is not a row of this store")]
    UnknownRow(i32),

    /// City is not part of the fixed column key set
    #[error("Unknown city: {0} is not a column of this store")]
    UnknownColumn(String),

    /// Date string does not follow DD/MM/YYYY or names no calendar day
    #[error("Malformed date: {0:?} (expected DD/MM/YYYY)")]
    MalformedDate(String),

    /// The shared store lock was poisoned by a panicking writer
    #[error("Store lock poisoned (a writer panicked while holding it)")]
    LockPoisoned,

    /// Configuration could not be parsed
    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    /// Arrow error
    #[error("Arrow error: {0}")]
    Arrow(#[from] arrow::error::ArrowError),

    /// Generic error
    #[error("{0}")]
    Other(String),
}
