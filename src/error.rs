//! Error types for poetry-layout.
//!
//! All operations return `Result<T>` which aliases `Result<T, LayoutError>`.

use thiserror::Error;

/// Errors from layout operations.
#[derive(Debug, Error)]
pub enum LayoutError {
    /// File system operation failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// TOML parse or serialization error.
    #[error("TOML error: {0}")]
    Toml(#[from] toml_edit::TomlError),

    /// Unexpected error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for poetry-layout operations.
pub type Result<T> = std::result::Result<T, LayoutError>;
