//! Interpolation methods for yield curve construction.
//!
//! - [`LinearInterpolator`]: Piecewise-linear between knots, flat beyond them
//!
//! Knot values are returned exactly; no arithmetic is applied when the
//! query hits an existing abscissa.

mod linear;

pub use linear::LinearInterpolator;

/// Trait for interpolation methods.
///
/// Implementations are total over `f64`: queries outside the data range are
/// answered by the method's extrapolation rule rather than by an error.
pub trait Interpolator: Send + Sync {
    /// Returns the interpolated value at x.
    fn interpolate(&self, x: f64) -> f64;

    /// Returns the minimum x value in the data.
    fn min_x(&self) -> f64;

    /// Returns the maximum x value in the data.
    fn max_x(&self) -> f64;

    /// Checks if x is within the interpolation range.
    fn in_range(&self, x: f64) -> bool {
        x >= self.min_x() && x <= self.max_x()
    }
}
