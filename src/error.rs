//! SpeakText Error Types
//!
//! Centralized error handling for the normalizer.

use thiserror::Error;

/// Central error type for SpeakText
#[derive(Error, Debug)]
pub enum NormalizeError {
    #[error("Invalid roman numeral: {0:?}")]
    InvalidRomanNumeral(String),

    #[error("Malformed number: {0:?}")]
    MalformedNumber(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result type alias for SpeakText operations
pub type NormResult<T> = Result<T, NormalizeError>;
