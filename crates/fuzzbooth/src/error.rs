//! Common error types for fuzzbooth hosts.

use fuzzbooth_core::MatchError;
use thiserror::Error;

/// Common error type for fuzzbooth operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Search rejected before scanning
    #[error(transparent)]
    Match(#[from] MatchError),

    /// IO error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type alias using fuzzbooth Error.
pub type Result<T> = std::result::Result<T, Error>;
