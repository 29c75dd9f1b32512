//! CLI-specific error types.
//!
//! All CLI errors are fatal: main prints them to stderr and exits non-zero.

use thiserror::Error;

use crate::store::StoreError;

/// Result type for CLI commands
pub type CliResult<T> = Result<T, CliError>;

/// CLI errors
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file missing, unparseable or invalid
    #[error("configuration error: {0}")]
    Config(String),

    /// Init found existing backing files
    #[error("already initialized: backing files exist in {0}")]
    AlreadyInitialized(String),

    /// A store operation failed during a command
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Server failed to boot or run
    #[error("boot failure: {0}")]
    Boot(String),
}
