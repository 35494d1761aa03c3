//! Error types for Rewatch
//!
//! Toolchain failures are never errors here: they travel as `RunResult`s and
//! end up as report lines. These variants cover the infrastructure around them.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Rewatch operations
pub type RewatchResult<T> = Result<T, RewatchError>;

/// Main error type for Rewatch operations
#[derive(Error, Debug)]
pub enum RewatchError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Filesystem watcher could not be created or attached
    #[error("watch error: {0}")]
    Watch(#[from] notify::Error),

    /// Watch pattern is not a valid glob
    #[error("invalid watch pattern: {0}")]
    InvalidPattern(#[from] globset::Error),

    /// Configuration file could not be parsed
    #[error("invalid config in {file}: {message}")]
    Config { file: PathBuf, message: String },

    /// Watched root does not exist
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// The action worker hung up before the loop finished
    #[error("action worker is no longer running")]
    WorkerUnavailable,
}
