//! Error types for curve operations.

use thiserror::Error;

use yieldline_math::MathError;

/// A specialized Result type for curve operations.
pub type CurveResult<T> = Result<T, CurveError>;

/// Error types for curve construction.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CurveError {
    /// Times and rates were supplied with different lengths.
    #[error("Curve construction failed: {times} times but {rates} rates")]
    LengthMismatch {
        /// Number of times supplied.
        times: usize,
        /// Number of rates supplied.
        rates: usize,
    },

    /// No points were supplied.
    #[error("Curve construction failed: no points supplied")]
    EmptyCurve,

    /// Point data is unusable.
    #[error("Invalid curve data: {reason}")]
    InvalidData {
        /// Description of the problem.
        reason: String,
    },

    /// An instrument could not report an implied rate.
    #[error("Invalid instrument: {reason}")]
    InvalidInstrument {
        /// Description of what's wrong with the instrument.
        reason: String,
    },

    /// Interpolation setup failed.
    #[error("Interpolation error: {0}")]
    Math(#[from] MathError),
}

impl CurveError {
    /// Creates an invalid data error.
    #[must_use]
    pub fn invalid_data(reason: impl Into<String>) -> Self {
        Self::InvalidData {
            reason: reason.into(),
        }
    }

    /// Creates an invalid instrument error.
    #[must_use]
    pub fn invalid_instrument(reason: impl Into<String>) -> Self {
        Self::InvalidInstrument {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_mismatch_display() {
        let err = CurveError::LengthMismatch { times: 3, rates: 2 };
        assert_eq!(
            err.to_string(),
            "Curve construction failed: 3 times but 2 rates"
        );
    }

    #[test]
    fn test_from_math_error() {
        let err: CurveError = MathError::invalid_input("x values must be strictly increasing").into();
        assert!(err.to_string().contains("strictly increasing"));
    }
}
