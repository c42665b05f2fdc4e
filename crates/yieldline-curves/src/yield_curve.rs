//! Interpolated zero-rate yield curve.

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fmt;

use yieldline_math::interpolation::{Interpolator, LinearInterpolator};

use crate::error::{CurveError, CurveResult};
use crate::instruments::CurveInstrument;
use crate::traits::RateCurve;

/// A single `(time, rate)` pillar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    /// Time in years.
    pub time: f64,
    /// Continuously compounded per-year rate.
    pub rate: f64,
}

impl CurvePoint {
    /// Creates a new curve point.
    #[must_use]
    pub fn new(time: f64, rate: f64) -> Self {
        Self { time, rate }
    }
}

impl CurveInstrument for CurvePoint {
    fn pillar(&self) -> f64 {
        self.time
    }

    fn implied_rate(&self) -> CurveResult<f64> {
        Ok(self.rate)
    }

    fn description(&self) -> String {
        format!("point ({}, {})", self.time, self.rate)
    }
}

/// A zero-rate yield curve.
///
/// Pillars are held in ascending time order with unique times and never
/// change after construction. Rate lookups interpolate linearly between
/// pillars and extrapolate flat beyond the first and last pillar.
///
/// `Display` writes one `Year: <t>, Rate: <r>%` line per pillar. Each line
/// ends directly after `%` with no trailing space, so text from printers
/// using `"%.2f%% \n"` differs from this output by one space per line.
///
/// # Example
///
/// ```rust
/// use yieldline_curves::YieldCurve;
///
/// let curve = YieldCurve::from_points(&[1.0, 2.0, 3.0], &[0.02, 0.023, 0.03]).unwrap();
///
/// assert_eq!(curve.len(), 3);
/// assert_eq!(curve.interest_rate(0.5), 0.02);
/// assert_eq!(
///     curve.to_string(),
///     "Year: 1, Rate: 2.00%\nYear: 2, Rate: 2.30%\nYear: 3, Rate: 3.00%\n"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YieldCurve {
    /// Pillars in ascending time order.
    points: Vec<CurvePoint>,

    #[serde(skip)]
    interpolator: LinearInterpolator,
}

impl YieldCurve {
    /// Builds a curve from parallel lists of times and rates.
    ///
    /// Points may arrive in any order; a repeated time keeps the rate that
    /// appears last.
    ///
    /// # Errors
    ///
    /// - [`CurveError::LengthMismatch`] if the lists differ in length
    /// - [`CurveError::EmptyCurve`] if no points are given
    /// - [`CurveError::InvalidData`] if a time is not finite
    pub fn from_points(times: &[f64], rates: &[f64]) -> CurveResult<Self> {
        if times.len() != rates.len() {
            return Err(CurveError::LengthMismatch {
                times: times.len(),
                rates: rates.len(),
            });
        }

        let points: Vec<CurvePoint> = times
            .iter()
            .zip(rates)
            .map(|(&t, &r)| CurvePoint::new(t, r))
            .collect();

        Self::from_instruments(&points)
    }

    /// Builds a curve with one pillar per instrument.
    ///
    /// Each instrument contributes `(pillar, implied rate)`. Two instruments
    /// on the same pillar are not an error: the later one wins.
    ///
    /// # Errors
    ///
    /// Fails on the first instrument that cannot report a rate, or if the
    /// list is empty.
    pub fn from_instruments<I: CurveInstrument>(instruments: &[I]) -> CurveResult<Self> {
        let mut points: Vec<CurvePoint> = Vec::with_capacity(instruments.len());

        for instrument in instruments {
            let time = instrument.pillar();
            if !time.is_finite() {
                return Err(CurveError::invalid_data(format!(
                    "{}: pillar time must be finite, got {time}",
                    instrument.description()
                )));
            }
            let rate = instrument.implied_rate()?;

            match points.binary_search_by(|p| p.time.total_cmp(&time)) {
                Ok(i) => {
                    warn!(
                        "{} overwrites pillar {} (rate {} -> {})",
                        instrument.description(),
                        time,
                        points[i].rate,
                        rate
                    );
                    points[i].rate = rate;
                }
                Err(i) => points.insert(i, CurvePoint::new(time, rate)),
            }
        }

        Self::build(points)
    }

    fn build(points: Vec<CurvePoint>) -> CurveResult<Self> {
        if points.is_empty() {
            return Err(CurveError::EmptyCurve);
        }

        let interpolator = LinearInterpolator::new(
            points.iter().map(|p| p.time).collect(),
            points.iter().map(|p| p.rate).collect(),
        )?;

        debug!(
            "built yield curve with {} pillars on [{}, {}]",
            points.len(),
            interpolator.min_x(),
            interpolator.max_x()
        );

        Ok(Self {
            points,
            interpolator,
        })
    }

    /// Returns the pillars in ascending time order.
    #[must_use]
    pub fn points(&self) -> &[CurvePoint] {
        &self.points
    }

    /// Returns the pillar times.
    #[must_use]
    pub fn times(&self) -> &[f64] {
        self.interpolator.xs()
    }

    /// Returns the pillar rates.
    #[must_use]
    pub fn rates(&self) -> &[f64] {
        self.interpolator.ys()
    }

    /// Returns the number of pillars.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false; construction rejects empty input.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the stored rate if `t` is exactly a pillar.
    #[must_use]
    pub fn rate_at_pillar(&self, t: f64) -> Option<f64> {
        self.points
            .binary_search_by(|p| p.time.total_cmp(&t))
            .ok()
            .map(|i| self.points[i].rate)
    }

    /// Per-year interest rate for time `t`.
    ///
    /// Exact pillar hits return the stored rate; times before the first or
    /// after the last pillar take that pillar's rate; anything else is
    /// linearly interpolated between the two nearest pillars.
    #[must_use]
    pub fn interest_rate(&self, t: f64) -> f64 {
        self.interpolator.interpolate(t)
    }

    /// Discount factor `e^(-r(t) t)`.
    #[must_use]
    pub fn discount_factor(&self, t: f64) -> f64 {
        RateCurve::discount_factor(self, t)
    }

    /// Forward rate between `t1` and `t2`.
    ///
    /// # Panics
    ///
    /// Panics if `t1 == t2`.
    #[must_use]
    pub fn forward_rate(&self, t1: f64, t2: f64) -> f64 {
        RateCurve::forward_rate(self, t1, t2)
    }
}

impl RateCurve for YieldCurve {
    fn interest_rate(&self, t: f64) -> f64 {
        self.interpolator.interpolate(t)
    }
}

impl fmt::Display for YieldCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for point in &self.points {
            if point.time.round() == point.time {
                write!(f, "Year: {:.0}", point.time)?;
            } else {
                write!(f, "Year: {:.2}", point.time)?;
            }
            writeln!(f, ", Rate: {:.2}%", point.rate * 100.0)?;
        }
        Ok(())
    }
}
