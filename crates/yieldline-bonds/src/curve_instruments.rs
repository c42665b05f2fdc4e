//! Priced bonds as yield curve pillars.
//!
//! A bond with an observed market price pins its maturity to its
//! yield-to-maturity. Zero-coupon bonds use the closed-form yield;
//! coupon-bearing bonds go through bisection.
//!
//! # Example
//!
//! ```rust
//! use yieldline_bonds::curve_instruments::curve_from_bonds;
//! use yieldline_bonds::Bond;
//!
//! let bonds = vec![
//!     Bond::zero_coupon(100.0, 95.0, 0.5),
//!     Bond::zero_coupon(1000.0, 895.0, 1.0),
//! ];
//! let curve = curve_from_bonds(&bonds).unwrap();
//!
//! assert_eq!(curve.times(), &[0.5, 1.0]);
//! ```

use yieldline_curves::{CurveError, CurveInstrument, CurveResult, YieldCurve};

use crate::error::{BondError, BondResult};
use crate::instruments::Bond;
use crate::pricing::YieldSolver;

/// A bond paired with the solver that extracts its pillar rate.
#[derive(Debug, Clone, Copy)]
pub struct BondPillar<'a> {
    bond: &'a Bond,
    solver: &'a YieldSolver,
}

impl<'a> BondPillar<'a> {
    /// Creates a pillar for `bond` solved with `solver`.
    #[must_use]
    pub fn new(bond: &'a Bond, solver: &'a YieldSolver) -> Self {
        Self { bond, solver }
    }

    /// Returns the underlying bond.
    pub fn bond(&self) -> &'a Bond {
        self.bond
    }
}

impl CurveInstrument for BondPillar<'_> {
    fn pillar(&self) -> f64 {
        self.bond.maturity()
    }

    fn implied_rate(&self) -> CurveResult<f64> {
        implied_rate(self.bond, self.solver)
    }

    fn description(&self) -> String {
        self.bond.to_string()
    }
}

impl CurveInstrument for Bond {
    fn pillar(&self) -> f64 {
        self.maturity()
    }

    fn implied_rate(&self) -> CurveResult<f64> {
        implied_rate(self, &YieldSolver::new())
    }

    fn description(&self) -> String {
        self.to_string()
    }
}

fn implied_rate(bond: &Bond, solver: &YieldSolver) -> CurveResult<f64> {
    let price = bond
        .price()
        .ok_or_else(|| BondError::missing_price(bond.to_string()))
        .map_err(to_curve_error)?;

    solver
        .solve(bond, price)
        .map(|result| result.ytm)
        .map_err(to_curve_error)
}

fn to_curve_error(err: BondError) -> CurveError {
    match err {
        BondError::Curve(inner) => inner,
        other => CurveError::invalid_instrument(other.to_string()),
    }
}

/// Builds a yield curve from priced bonds with the default solver.
pub fn curve_from_bonds(bonds: &[Bond]) -> BondResult<YieldCurve> {
    Ok(YieldCurve::from_instruments(bonds)?)
}

/// Builds a yield curve from priced bonds with an explicit solver.
pub fn curve_from_bonds_with(bonds: &[Bond], solver: &YieldSolver) -> BondResult<YieldCurve> {
    let pillars: Vec<BondPillar<'_>> = bonds.iter().map(|b| BondPillar::new(b, solver)).collect();
    Ok(YieldCurve::from_instruments(&pillars)?)
}
