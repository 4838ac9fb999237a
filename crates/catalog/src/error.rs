//! Error types for the catalog crate.
//!
//! Everything here is an ingestion-time problem: a catalog file that can't be
//! read, a JSON document that doesn't describe venues, or venues that break
//! the catalog invariants. The filtering engine itself never fails.

use thiserror::Error;

/// Errors that can occur while loading or validating a venue catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// File could not be found or opened
    #[error("Failed to open catalog file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading the catalog
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The document is not a valid venue list
    ///
    /// `line` and `column` point at the offending position in the source
    #[error("Parse error at line {line}, column {column}: {reason}")]
    ParseError {
        line: usize,
        column: usize,
        reason: String,
    },

    /// A venue field had an invalid value
    #[error("Invalid value for {field} on venue {id}: {value}")]
    InvalidValue {
        id: u32,
        field: String,
        value: String,
    },

    /// Two venues share the same id
    #[error("Duplicate venue id: {id}")]
    DuplicateId { id: u32 },
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::ParseError {
            line: err.line(),
            column: err.column(),
            reason: err.to_string(),
        }
    }
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
