//! Catalog definition violations and errors.

use thiserror::Error;

/// A single problem found in a catalog definition.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogViolation {
    #[error("Key '{key}' contains unknown symbol character '{character}' at position {position}")]
    UnparseableKey {
        key: String,
        character: char,
        position: usize,
    },

    #[error("Empty key: an empty sequence would match an untouched buffer")]
    EmptyKey,

    #[error("Duplicate key '{key}': catalog keys must be unique")]
    DuplicateKey { key: String },

    #[error("Key '{key}' maps to an empty trigger identifier")]
    EmptyTrigger { key: String },
}

/// Errors returned by the `Result`-based catalog constructors.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// One or more entries were rejected; every violation is listed
    #[error("Invalid catalog definition ({} violations)", .0.len())]
    Invalid(Vec<CatalogViolation>),

    /// The JSON form of the catalog could not be parsed
    #[error("Catalog JSON failed to parse: {0}")]
    Json(#[from] serde_json::Error),
}
