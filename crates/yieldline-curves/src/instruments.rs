//! Instruments that contribute a pillar to a yield curve.

use crate::error::CurveResult;

/// An instrument that pins down one point of a yield curve.
///
/// Each instrument reports the time of its pillar and the zero rate it
/// implies there. Bonds with an observed price implement this in
/// `yieldline-bonds`; plain [`CurvePoint`](crate::CurvePoint)s implement it
/// trivially.
pub trait CurveInstrument {
    /// Pillar time in years.
    fn pillar(&self) -> f64;

    /// Rate implied at the pillar.
    fn implied_rate(&self) -> CurveResult<f64>;

    /// Short label for logging.
    fn description(&self) -> String {
        format!("instrument at {:.2}y", self.pillar())
    }
}

impl<T: CurveInstrument + ?Sized> CurveInstrument for &T {
    fn pillar(&self) -> f64 {
        (**self).pillar()
    }

    fn implied_rate(&self) -> CurveResult<f64> {
        (**self).implied_rate()
    }

    fn description(&self) -> String {
        (**self).description()
    }
}
