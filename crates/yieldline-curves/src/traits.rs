//! Core trait for yield curve queries.

use yieldline_core::Compounding;

/// Compounding convention of every curve rate.
pub const CURVE_COMPOUNDING: Compounding = Compounding::Continuous;

/// A term structure of continuously compounded zero rates.
///
/// Implementors supply [`interest_rate`](RateCurve::interest_rate); discount
/// factors and forward rates are derived from it.
///
/// # Example
///
/// ```rust
/// use yieldline_curves::RateCurve;
///
/// struct Flat(f64);
///
/// impl RateCurve for Flat {
///     fn interest_rate(&self, _t: f64) -> f64 {
///         self.0
///     }
/// }
///
/// let curve = Flat(0.05);
/// assert!((curve.discount_factor(2.0) - (-0.1_f64).exp()).abs() < 1e-15);
/// assert!((curve.forward_rate(1.0, 3.0) - 0.05).abs() < 1e-15);
/// ```
pub trait RateCurve: Send + Sync {
    /// Per-year zero rate for a payment `t` years out.
    fn interest_rate(&self, t: f64) -> f64;

    /// Discount factor `e^(-r(t) t)`.
    fn discount_factor(&self, t: f64) -> f64 {
        CURVE_COMPOUNDING.discount_factor(self.interest_rate(t), t)
    }

    /// Continuously compounded forward rate between `t1` and `t2`.
    ///
    /// `F(t1, t2) = (r(t2) t2 - r(t1) t1) / (t2 - t1)`
    ///
    /// # Panics
    ///
    /// Panics if `t1 == t2`; the forward period must have non-zero length.
    fn forward_rate(&self, t1: f64, t2: f64) -> f64 {
        assert!(
            t1 != t2,
            "forward rate requires distinct times (t1 = t2 = {t1})"
        );
        let r1 = self.interest_rate(t1);
        let r2 = self.interest_rate(t2);
        (r2 * t2 - r1 * t1) / (t2 - t1)
    }
}
