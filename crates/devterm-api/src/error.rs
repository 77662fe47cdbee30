//! Error types for devterm-api

use thiserror::Error;

/// devterm-api error type
///
/// Tool failures never reach this type; they are reported inside the
/// response envelope. This covers server startup and IO only.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid bind address: {0}")]
    BindAddress(String),

    #[error("Server error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, ApiError>;
