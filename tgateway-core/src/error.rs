// Error types for gateway configuration and request parameters

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Environment variable not set: {0}")]
    MissingVar(String),

    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// A request parameter outside the bounds the gateway accepts.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Verification code has the wrong number of characters
    #[error("code length must be between {min} and {max} characters, got {actual}")]
    CodeLength { min: u32, max: u32, actual: usize },

    /// Verification code contains something other than digits
    #[error("code must contain only digits")]
    CodeNotNumeric,

    /// Requested generated-code length is out of range
    #[error("code_length must be between {min} and {max} characters, got {actual}")]
    CodeLengthParam { min: u32, max: u32, actual: u32 },

    /// Tracking payload is too long
    #[error("payload must be at most {max} bytes, got {actual}")]
    PayloadTooLong { max: usize, actual: usize },

    /// Message time-to-live is out of range
    #[error("ttl must be between {min} and {max} seconds, got {actual}")]
    Ttl { min: u64, max: u64, actual: u64 },
}
