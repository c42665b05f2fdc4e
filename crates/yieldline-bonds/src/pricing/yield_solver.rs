//! Yield-to-maturity solver.
//!
//! Two conventions coexist, selected by bond kind:
//!
//! - **Zero-coupon**: closed form `(face / price)^(1 / maturity) - 1`, an
//!   annually compounded yield.
//! - **Coupon-bearing**: bisection on the continuously compounded price
//!   function over a fixed bracket, stopping once the model price is within
//!   an absolute currency threshold of the target.
//!
//! The two yields are therefore not directly comparable; [`YieldResult`]
//! records which method (and so which compounding) produced each one.
//!
//! # Example
//!
//! ```rust
//! use yieldline_bonds::{Bond, YieldSolver};
//! use yieldline_bonds::pricing::YieldMethod;
//!
//! let bond = Bond::zero_coupon(1000.0, 895.0, 1.0);
//! let result = YieldSolver::new().solve(&bond, 895.0).unwrap();
//!
//! assert_eq!(result.method, YieldMethod::ClosedForm);
//! assert!((result.ytm - 0.11732).abs() < 1e-5);
//! ```

use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;

use yieldline_core::Compounding;
use yieldline_math::solvers::{bisection, SolverConfig};
use yieldline_math::MathError;

use crate::error::{BondError, BondResult};
use crate::instruments::Bond;
use crate::pricing::price_from_ytm;

/// Default absolute price tolerance for bisection, in currency units.
pub const DEFAULT_PRICE_THRESHOLD: f64 = 1.0;

/// Default bisection cap.
pub const DEFAULT_MAX_ITERATIONS: u32 = 200;

/// How a yield was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum YieldMethod {
    /// Zero-coupon closed form, annually compounded.
    ClosedForm,
    /// Bisection on the continuously compounded price.
    Bisection,
}

impl YieldMethod {
    /// Compounding convention of yields produced by this method.
    #[must_use]
    pub fn compounding(&self) -> Compounding {
        match self {
            YieldMethod::ClosedForm => Compounding::Annual,
            YieldMethod::Bisection => Compounding::Continuous,
        }
    }
}

impl fmt::Display for YieldMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            YieldMethod::ClosedForm => "Closed Form",
            YieldMethod::Bisection => "Bisection",
        };
        write!(f, "{name}")
    }
}

/// Result of a yield calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct YieldResult {
    /// The calculated yield (as a decimal, e.g., 0.05 for 5%).
    pub ytm: f64,
    /// Number of price evaluations (0 for the closed form).
    pub iterations: u32,
    /// Model price minus target price at `ytm`, under the method's own compounding.
    pub residual: f64,
    /// Method used.
    pub method: YieldMethod,
}

/// Solver settings.
///
/// Deserializes from partial input; missing fields take their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YieldSolverConfig {
    /// Absolute price tolerance in currency units.
    #[serde(default = "default_threshold")]
    pub threshold: f64,

    /// Lower end of the yield bracket.
    #[serde(default = "default_lower")]
    pub lower: f64,

    /// Upper end of the yield bracket.
    #[serde(default = "default_upper")]
    pub upper: f64,

    /// Maximum number of bisection steps.
    #[serde(default = "default_max_iterations")]
    pub max_iterations: u32,
}

fn default_threshold() -> f64 {
    DEFAULT_PRICE_THRESHOLD
}

fn default_lower() -> f64 {
    0.0
}

fn default_upper() -> f64 {
    1.0
}

fn default_max_iterations() -> u32 {
    DEFAULT_MAX_ITERATIONS
}

impl Default for YieldSolverConfig {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            lower: default_lower(),
            upper: default_upper(),
            max_iterations: default_max_iterations(),
        }
    }
}

/// Yield-to-maturity solver.
///
/// The bracket is fixed: yields outside `[lower, upper]` are not searched
/// for and end in [`BondError::YieldConvergenceFailed`].
#[derive(Debug, Clone, Default)]
pub struct YieldSolver {
    config: YieldSolverConfig,
}

impl YieldSolver {
    /// Creates a solver with default settings.
    ///
    /// Threshold: 1.0, bracket: [0, 1], max iterations: 200
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a solver from explicit settings.
    #[must_use]
    pub fn with_config(config: YieldSolverConfig) -> Self {
        Self { config }
    }

    /// Sets the absolute price threshold.
    #[must_use]
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.config.threshold = threshold;
        self
    }

    /// Sets the maximum number of bisection steps.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.config.max_iterations = max_iterations;
        self
    }

    /// Sets the yield bracket.
    #[must_use]
    pub fn with_bracket(mut self, lower: f64, upper: f64) -> Self {
        self.config.lower = lower;
        self.config.upper = upper;
        self
    }

    /// Returns the settings.
    #[must_use]
    pub fn config(&self) -> &YieldSolverConfig {
        &self.config
    }

    /// Solves for the yield that reprices `bond` at `price`.
    pub fn solve(&self, bond: &Bond, price: f64) -> BondResult<YieldResult> {
        if bond.is_zero_coupon() {
            Ok(self.closed_form(bond, price))
        } else {
            self.bisect(bond, price)
        }
    }

    fn closed_form(&self, bond: &Bond, price: f64) -> YieldResult {
        let ytm = (bond.face_value() / price).powf(1.0 / bond.maturity()) - 1.0;
        let residual = bond.price_from_yield(ytm, Compounding::Annual) - price;

        debug!("closed-form yield {:.8} for {} at {}", ytm, bond, price);

        YieldResult {
            ytm,
            iterations: 0,
            residual,
            method: YieldMethod::ClosedForm,
        }
    }

    fn bisect(&self, bond: &Bond, price: f64) -> BondResult<YieldResult> {
        let config = SolverConfig::new(self.config.threshold, self.config.max_iterations);

        let result = bisection(
            |ytm| price_from_ytm(bond, ytm) - price,
            self.config.lower,
            self.config.upper,
            &config,
        )
        .map_err(|e| match e {
            MathError::ConvergenceFailed {
                iterations,
                residual,
            } => BondError::convergence_failed(iterations, residual),
            other => BondError::from(other),
        })?;

        debug!(
            "bisection yield {:.8} for {} at {} after {} iterations",
            result.root, bond, price, result.iterations
        );

        Ok(YieldResult {
            ytm: result.root,
            iterations: result.iterations,
            residual: result.residual,
            method: YieldMethod::Bisection,
        })
    }
}

/// Yield-to-maturity with the default solver settings.
///
/// # Example
///
/// ```rust
/// use yieldline_bonds::{yield_to_maturity, Bond};
///
/// let bond = Bond::zero_coupon(100.0, 95.0, 0.5);
/// let ytm = yield_to_maturity(&bond, 95.0).unwrap();
/// assert_eq!(ytm, (100.0_f64 / 95.0).powf(1.0 / 0.5) - 1.0);
/// ```
pub fn yield_to_maturity(bond: &Bond, price: f64) -> BondResult<f64> {
    YieldSolver::new().solve(bond, price).map(|r| r.ytm)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use yieldline_core::Frequency;

    #[test]
    fn test_zero_coupon_closed_form() {
        let bond = Bond::zero_coupon(1000.0, 895.0, 1.0);
        let result = YieldSolver::new().solve(&bond, 895.0).unwrap();

        assert_eq!(result.ytm, (1000.0_f64 / 895.0).powf(1.0) - 1.0);
        assert_relative_eq!(result.ytm, 0.117318, epsilon = 1e-6);
        assert_eq!(result.iterations, 0);
        assert_eq!(result.method.compounding(), Compounding::Annual);
        assert!(result.residual.abs() < 1e-9);
    }

    #[test]
    fn test_zero_coupon_half_year() {
        let bond = Bond::zero_coupon(100.0, 95.0, 0.5);
        let ytm = yield_to_maturity(&bond, 95.0).unwrap();

        // (100/95)^2 - 1
        assert_relative_eq!(ytm, 0.1080332410, epsilon = 1e-9);
    }

    #[test]
    fn test_coupon_bond_recovers_yield() {
        let bond = Bond::coupon_bearing(500.0, 0.05, 3.0, Frequency::SemiAnnual);
        let target = bond.price_from_ytm(0.042);

        let result = YieldSolver::new().solve(&bond, target).unwrap();

        assert_eq!(result.method, YieldMethod::Bisection);
        assert!(result.residual.abs() < 1.0);
        assert!((bond.price_from_ytm(result.ytm) - target).abs() < 1.0);
        assert!((result.ytm - 0.042).abs() < 1e-3);
        assert!(result.iterations > 1);
    }

    #[test]
    fn test_tighter_threshold_is_more_precise() {
        let bond = Bond::coupon_bearing(500.0, 0.05, 3.0, Frequency::SemiAnnual);
        let target = bond.price_from_ytm(0.042);

        let result = YieldSolver::new()
            .with_threshold(1e-8)
            .solve(&bond, target)
            .unwrap();

        assert_relative_eq!(result.ytm, 0.042, epsilon = 1e-9);
    }

    #[test]
    fn test_price_above_bracket_fails() {
        // Price above the undiscounted total needs a negative yield
        let bond = Bond::coupon_bearing(500.0, 0.05, 3.0, Frequency::SemiAnnual);

        let result = YieldSolver::new().solve(&bond, 700.0);

        match result {
            Err(BondError::YieldConvergenceFailed { iterations, .. }) => {
                assert_eq!(iterations, DEFAULT_MAX_ITERATIONS);
            }
            other => panic!("Expected YieldConvergenceFailed, got {other:?}"),
        }
    }

    #[test]
    fn test_price_below_bracket_fails() {
        let bond = Bond::coupon_bearing(500.0, 0.05, 3.0, Frequency::SemiAnnual);

        let result = YieldSolver::new().with_max_iterations(50).solve(&bond, 10.0);

        assert!(matches!(
            result,
            Err(BondError::YieldConvergenceFailed { iterations: 50, .. })
        ));
    }

    #[test]
    fn test_wider_bracket() {
        let bond = Bond::coupon_bearing(100.0, 0.05, 2.0, Frequency::Annual);
        let target = bond.price_from_ytm(1.5);

        assert!(YieldSolver::new().solve(&bond, target).is_err());

        let result = YieldSolver::new()
            .with_bracket(0.0, 4.0)
            .with_threshold(1e-6)
            .solve(&bond, target)
            .unwrap();
        assert_relative_eq!(result.ytm, 1.5, epsilon = 1e-6);
    }

    #[test]
    fn test_config_defaults_from_partial_input() {
        let config: YieldSolverConfig = serde_json::from_str(r#"{"max_iterations": 50}"#).unwrap();
        assert_eq!(config.max_iterations, 50);
        assert_eq!(config.threshold, 1.0);
        assert_eq!(config.lower, 0.0);
        assert_eq!(config.upper, 1.0);
    }

    #[test]
    fn test_with_config() {
        let config = YieldSolverConfig {
            threshold: 0.01,
            ..YieldSolverConfig::default()
        };
        let solver = YieldSolver::with_config(config);
        assert_eq!(solver.config().threshold, 0.01);
    }
}
