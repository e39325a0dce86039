//! Custom error types for OneSky API operations

use thiserror::Error;

/// Errors produced by the OneSky client
#[derive(Error, Debug)]
pub enum OneSkyError {
    /// API returned a non-success HTTP status
    #[error("API error: {status} - {body}")]
    ApiError {
        status: u16,
        body: String,
    },

    /// Network-level failure (connection, timeout)
    #[error("Network error: {message}")]
    NetworkError {
        message: String,
    },

    /// Response could not be decoded
    #[error("Invalid response: {message}")]
    InvalidResponseError {
        message: String,
    },

    /// Local file could not be read
    #[error("File error: {path} - {message}")]
    FileError {
        path: String,
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
    },

    /// A required argument was empty or malformed
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        message: String,
    },

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Reqwest error
    #[error("HTTP client error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Result type for OneSky operations
pub type Result<T> = std::result::Result<T, OneSkyError>;
