//! Root-finding algorithms.
//!
//! - [`bisection`]: Interval halving for a decreasing function, stopping on
//!   an absolute residual tolerance
//!
//! # Example: Yield from Price
//!
//! ```rust
//! use yieldline_math::solvers::{bisection, SolverConfig};
//!
//! // 5% annual coupon, 3 years, continuously discounted
//! let price = |y: f64| {
//!     5.0 * (-y).exp() + 5.0 * (-2.0 * y).exp() + 105.0 * (-3.0 * y).exp()
//! };
//! let target = price(0.04);
//!
//! let config = SolverConfig::new(1e-8, 200);
//! let result = bisection(|y| price(y) - target, 0.0, 1.0, &config).unwrap();
//! assert!((result.root - 0.04).abs() < 1e-6);
//! ```

mod bisection;

pub use bisection::bisection;

/// Default tolerance for root-finding algorithms.
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

/// Default maximum iterations for root-finding algorithms.
pub const DEFAULT_MAX_ITERATIONS: u32 = 200;

/// Configuration for root-finding algorithms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    /// Absolute tolerance on the residual `|f(x)|`.
    pub tolerance: f64,
    /// Maximum number of function evaluations.
    pub max_iterations: u32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl SolverConfig {
    /// Creates a new solver configuration.
    #[must_use]
    pub fn new(tolerance: f64, max_iterations: u32) -> Self {
        Self {
            tolerance,
            max_iterations,
        }
    }
}

/// Result of a root-finding operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverResult {
    /// The root found.
    pub root: f64,
    /// Number of function evaluations performed.
    pub iterations: u32,
    /// Function value at the root.
    pub residual: f64,
}
