//! Error types for timetrack.

use thiserror::Error;

use crate::remote::RemoteError;

/// Errors that can occur in timetrack operations.
#[derive(Error, Debug)]
pub enum TimetrackError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Remote error: {0}")]
    Remote(#[from] RemoteError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for timetrack operations.
pub type TimetrackResult<T> = Result<T, TimetrackError>;
