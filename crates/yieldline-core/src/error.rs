//! Error types for the Yieldline core types.

use thiserror::Error;

/// A specialized Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// The error type for core type construction and parsing.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// Unrecognised payment frequency.
    #[error("Invalid frequency: {input} (expected annual, semi-annual or quarterly)")]
    InvalidFrequency {
        /// The text that failed to parse.
        input: String,
    },
}

impl CoreError {
    /// Creates an invalid frequency error.
    #[must_use]
    pub fn invalid_frequency(input: impl Into<String>) -> Self {
        Self::InvalidFrequency {
            input: input.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CoreError::invalid_frequency("weekly");
        assert!(err.to_string().contains("weekly"));
        assert!(err.to_string().contains("Invalid frequency"));
    }
}
