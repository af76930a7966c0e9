//! Error types for the consciousness monitor.

use thiserror::Error;

/// Errors raised by the monitor.
///
/// Assessment itself degrades gracefully; these only cover malformed input
/// and configuration the engine cannot make sense of.
#[derive(Debug, Error)]
pub enum MonitorError {
    /// A state carried a value the engine cannot score.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration file could not be parsed.
    #[error("configuration parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Configuration file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for monitor operations.
pub type MonitorResult<T> = Result<T, MonitorError>;
