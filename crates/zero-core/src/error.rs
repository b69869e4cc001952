//! Error types for config-zero core.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while preparing a command context.
///
/// Building and running commands never fails with this type: builder output
/// is infallible and the runner reports through [`crate::ScriptOutcome`].
#[derive(Debug, Error)]
pub enum ZeroError {
    /// Working directory does not exist or is not a directory.
    #[error("working directory not found: {path}")]
    WorkingDirNotFound {
        /// Path that was requested.
        path: PathBuf,
    },

    /// Could not locate the directory holding bundled tool configs.
    #[error("could not locate bundled config directory: {message}")]
    BundledConfigDir {
        /// Reason the lookup failed.
        message: String,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for config-zero core operations.
pub type ZeroResult<T> = Result<T, ZeroError>;
