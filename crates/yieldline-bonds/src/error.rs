//! Error types for bond operations.

use thiserror::Error;

/// A specialized Result type for bond operations.
pub type BondResult<T> = Result<T, BondError>;

/// Errors that can occur during bond operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BondError {
    /// Yield calculation failed to converge.
    #[error(
        "Yield calculation failed to converge after {iterations} iterations (price gap: {residual:.4})"
    )]
    YieldConvergenceFailed {
        /// Number of iterations attempted.
        iterations: u32,
        /// Absolute gap between model and target price at the last trial yield.
        residual: f64,
    },

    /// The bond carries no observed market price.
    #[error("Missing market price: {bond}")]
    MissingPrice {
        /// Description of the bond.
        bond: String,
    },

    /// Numerical routine error.
    #[error("Math error: {0}")]
    Math(#[from] yieldline_math::MathError),

    /// Curve error.
    #[error("Curve error: {0}")]
    Curve(#[from] yieldline_curves::CurveError),
}

impl BondError {
    /// Creates a yield convergence failure.
    #[must_use]
    pub fn convergence_failed(iterations: u32, residual: f64) -> Self {
        Self::YieldConvergenceFailed {
            iterations,
            residual,
        }
    }

    /// Creates a missing price error.
    #[must_use]
    pub fn missing_price(bond: impl Into<String>) -> Self {
        Self::MissingPrice { bond: bond.into() }
    }
}
