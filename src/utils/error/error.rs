//! Error handling for the Redis facade
//!
//! Redis errors are carried through unchanged; the remaining variants belong
//! to the configuration, logging and CLI layers around the facade.

use thiserror::Error;

/// Result type alias for the facade
pub type Result<T> = std::result::Result<T, FacadeError>;

/// Main error type for the facade
#[derive(Error, Debug)]
pub enum FacadeError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Redis errors, as reported by the client
    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Timeout errors
    #[error("Timeout error: {0}")]
    Timeout(String),

    /// Logging setup errors
    #[error("Logging error: {0}")]
    Logging(String),
}

impl FacadeError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a timeout error
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::Timeout(message.into())
    }

    /// Whether the error means the server could not be reached or the link dropped
    pub fn is_connection_error(&self) -> bool {
        match self {
            Self::Redis(e) => {
                e.is_connection_refusal() || e.is_connection_dropped() || e.is_io_error()
            }
            _ => false,
        }
    }

    /// Whether the error is a timeout, either ours or the client's
    pub fn is_timeout(&self) -> bool {
        match self {
            Self::Timeout(_) => true,
            Self::Redis(e) => e.is_timeout(),
            _ => false,
        }
    }
}
