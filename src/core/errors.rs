//! Error types for the application

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SentryxError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Input error: {0}")]
    Input(String),
}

/// Result type alias
pub type SentryxResult<T> = Result<T, SentryxError>;
