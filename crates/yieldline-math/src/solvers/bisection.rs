//! Bisection root-finding algorithm.

use log::{debug, warn};

use crate::error::{MathError, MathResult};
use crate::solvers::{SolverConfig, SolverResult};

/// Bisection for a decreasing function.
///
/// Starts at the midpoint of `[lower, upper]` and halves the interval on
/// every step: a negative residual means the trial point is past the root,
/// so the upper bound moves down to it; otherwise the lower bound moves up.
/// Stops as soon as `|f(x)| < config.tolerance`.
///
/// The bracket is neither validated nor widened. If the root lies outside
/// `[lower, upper]` the trial point collapses onto one bound and the search
/// ends with [`MathError::ConvergenceFailed`] after `config.max_iterations`
/// evaluations.
///
/// # Arguments
///
/// * `f` - Decreasing function whose root is sought
/// * `lower` - Lower bound of the search interval
/// * `upper` - Upper bound of the search interval
/// * `config` - Absolute residual tolerance and evaluation cap
///
/// # Example
///
/// ```rust
/// use yieldline_math::solvers::{bisection, SolverConfig};
///
/// let f = |x: f64| 0.3 - x;
/// let result = bisection(f, 0.0, 1.0, &SolverConfig::default()).unwrap();
/// assert!((result.root - 0.3).abs() < 1e-9);
/// ```
pub fn bisection<F>(f: F, lower: f64, upper: f64, config: &SolverConfig) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
{
    let mut lo = lower;
    let mut hi = upper;
    let mut x = lo + (hi - lo) / 2.0;
    let mut fx = f64::NAN;

    for iteration in 0..config.max_iterations {
        fx = f(x);

        if fx.abs() < config.tolerance {
            debug!(
                "bisection converged: x={:.10} residual={:.3e} iterations={}",
                x,
                fx,
                iteration + 1
            );
            return Ok(SolverResult {
                root: x,
                iterations: iteration + 1,
                residual: fx,
            });
        }

        if fx < 0.0 {
            hi = x;
            x = lo + (x - lo) / 2.0;
        } else {
            lo = x;
            x = hi - (hi - x) / 2.0;
        }
    }

    warn!(
        "bisection did not converge in {} iterations on [{}, {}] (last x={:.10}, residual={:.3e})",
        config.max_iterations, lower, upper, x, fx
    );
    Err(MathError::convergence_failed(config.max_iterations, fx.abs()))
}
