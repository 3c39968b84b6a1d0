//! Error types for bujomark

use thiserror::Error;

/// Main error type for bujomark operations.
///
/// The transcoder itself is best-effort and has no error path; these
/// variants exist for the configuration and CLI layers.
#[derive(Error, Debug)]
pub enum BujomarkError {
    /// IO error during file operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for bujomark operations
pub type Result<T> = std::result::Result<T, BujomarkError>;
