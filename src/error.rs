//! Error types for the number filter
//!
//! Every error is terminal: the binary reports it and exits without printing
//! any partial result.

use std::num::ParseIntError;
use thiserror::Error;

/// Main error type for the number filter
#[derive(Error, Debug)]
pub enum FilterError {
    /// A positional argument is not a base-10 integer
    #[error("invalid number: {token:?}")]
    InvalidNumber {
        token: String,
        #[source]
        source: ParseIntError,
    },

    /// An option value was rejected before filtering
    #[error("Validation error: {message}")]
    Validation { message: String },
}

impl FilterError {
    /// Create a new invalid number error
    pub fn invalid_number(token: impl Into<String>, source: ParseIntError) -> Self {
        Self::InvalidNumber {
            token: token.into(),
            source,
        }
    }

    /// Create a new validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, FilterError>;
