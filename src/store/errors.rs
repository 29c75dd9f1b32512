//! Record store error types.

use std::io;

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Record store errors
///
/// Validation and not-found failures are raised before any write, so a
/// failed operation never touches the backing file.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Create was attempted without a reference id
    #[error("Referans ID is required")]
    MissingReference,

    /// No record carries the given identifier
    #[error("no record with id {0}")]
    NotFound(String),

    /// Backing file exists but could not be read or rewritten
    #[error("backing file I/O failure: {0}")]
    Io(#[from] io::Error),
}
