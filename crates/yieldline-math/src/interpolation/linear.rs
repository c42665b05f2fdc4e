//! Linear interpolation with flat extrapolation.

use crate::error::{MathError, MathResult};
use crate::interpolation::Interpolator;

/// Linear interpolation between data points.
///
/// Consecutive points are joined by straight lines. Below the first point
/// the first value is returned, above the last point the last value.
/// A single point gives a constant function.
///
/// # Example
///
/// ```rust
/// use yieldline_math::interpolation::{Interpolator, LinearInterpolator};
///
/// let xs = vec![1.0, 2.0, 3.0];
/// let ys = vec![0.02, 0.023, 0.03];
///
/// let interp = LinearInterpolator::new(xs, ys).unwrap();
/// assert_eq!(interp.interpolate(2.0), 0.023);
/// assert_eq!(interp.interpolate(0.5), 0.02);
/// assert_eq!(interp.interpolate(5.0), 0.03);
/// assert!((interp.interpolate(1.5) - 0.0215).abs() < 1e-15);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LinearInterpolator {
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl LinearInterpolator {
    /// Creates a new linear interpolator.
    ///
    /// # Arguments
    ///
    /// * `xs` - X coordinates (finite, strictly increasing)
    /// * `ys` - Y coordinates
    ///
    /// # Errors
    ///
    /// Returns an error if there are no points, if lengths differ, or if the
    /// x values are not finite and strictly increasing.
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> MathResult<Self> {
        if xs.len() != ys.len() {
            return Err(MathError::invalid_input(format!(
                "xs and ys must have same length: {} vs {}",
                xs.len(),
                ys.len()
            )));
        }
        if xs.is_empty() {
            return Err(MathError::insufficient_data(1, 0));
        }
        if let Some(bad) = xs.iter().find(|x| !x.is_finite()) {
            return Err(MathError::invalid_input(format!(
                "x values must be finite, got {bad}"
            )));
        }
        if xs.windows(2).any(|w| w[1] <= w[0]) {
            return Err(MathError::invalid_input(
                "x values must be strictly increasing",
            ));
        }

        Ok(Self { xs, ys })
    }

    /// Returns the x coordinates.
    #[must_use]
    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    /// Returns the y coordinates.
    #[must_use]
    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    /// Returns the number of data points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// Always false; an interpolator holds at least one point.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }
}

impl Interpolator for LinearInterpolator {
    fn interpolate(&self, x: f64) -> f64 {
        let n = self.xs.len();

        match self.xs.binary_search_by(|candidate| candidate.total_cmp(&x)) {
            Ok(i) => self.ys[i],
            Err(0) => self.ys[0],
            Err(i) if i == n => self.ys[n - 1],
            Err(i) => {
                // Tightest bracket: xs[i-1] < x < xs[i]
                let (x0, x1) = (self.xs[i - 1], self.xs[i]);
                let (y0, y1) = (self.ys[i - 1], self.ys[i]);
                y0 + (y1 - y0) * (x - x0) / (x1 - x0)
            }
        }
    }

    fn min_x(&self) -> f64 {
        self.xs[0]
    }

    fn max_x(&self) -> f64 {
        self.xs[self.xs.len() - 1]
    }
}
