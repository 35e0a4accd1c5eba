//! Error types for the catalogue storage layer.

use thiserror::Error;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors that can occur while loading or persisting a collection document.
///
/// A missing or unreadable document surfaces as `Io`; a document that exists
/// but does not parse surfaces as `Json`. Callers treat both as a
/// service-level storage failure.
#[derive(Error, Debug)]
pub enum StoreError {
    /// I/O error reading or writing a collection document.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The document exists but is not valid JSON for the expected shape.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
