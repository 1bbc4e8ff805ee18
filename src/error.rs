//! Error types for phone-signin
//!
//! Uses `thiserror` for library errors. A malformed phone number is not an
//! error here: it is an `ErrorMessage` value shown on screen.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::services::NavigationError;

/// Result type alias for phone-signin operations
pub type SigninResult<T> = Result<T, SigninError>;

/// Main error type for phone-signin operations
#[derive(Error, Debug)]
pub enum SigninError {
    /// Config file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Replay script line could not be understood
    #[error("invalid replay script at line {line}: {message}")]
    InvalidScript { line: usize, message: String },

    /// Navigation attempted along a missing edge
    #[error(transparent)]
    Navigation(#[from] NavigationError),

    /// Interactive mode needs a terminal on stdin and stdout
    #[error("interactive sign-in requires a terminal (use 'replay' to feed input from a file or pipe)")]
    NotATerminal,
}
