//! Bond pricing calculations.
//!
//! This module provides:
//! - [`price_from_curve`]: Discount each cash flow on a yield curve
//! - [`price_from_ytm`]: Discount each cash flow at one continuously compounded yield
//! - [`YieldSolver`]: Yield-to-maturity from a market price
//! - [`PortfolioPricer`]: Curve pricing for a batch of bonds

mod portfolio;
mod yield_solver;

pub use portfolio::{PortfolioPricer, PortfolioValuation};
pub use yield_solver::{yield_to_maturity, YieldMethod, YieldResult, YieldSolver, YieldSolverConfig};

use yieldline_curves::{RateCurve, CURVE_COMPOUNDING};

use crate::instruments::Bond;

/// Prices a bond on a yield curve.
///
/// `Σ amount × curve.discount_factor(time)` over the bond's cash flows.
pub fn price_from_curve<C: RateCurve + ?Sized>(curve: &C, bond: &Bond) -> f64 {
    bond.cash_flows()
        .present_value(|t| curve.discount_factor(t))
}

/// Prices a bond at a continuously compounded yield.
///
/// - Zero-coupon: `face × e^(-ytm × maturity)`
/// - Coupon-bearing: `Σ amount × e^(-ytm × time)`
pub fn price_from_ytm(bond: &Bond, ytm: f64) -> f64 {
    if bond.is_zero_coupon() {
        bond.face_value() * CURVE_COMPOUNDING.discount_factor(ytm, bond.maturity())
    } else {
        bond.cash_flows()
            .present_value(|t| CURVE_COMPOUNDING.discount_factor(ytm, t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use yieldline_core::Frequency;
    use yieldline_curves::YieldCurve;

    struct Flat(f64);

    impl RateCurve for Flat {
        fn interest_rate(&self, _t: f64) -> f64 {
            self.0
        }
    }

    #[test]
    fn test_zero_coupon_from_ytm() {
        let bond = Bond::zero_coupon(1000.0, 895.0, 1.0);
        assert_relative_eq!(
            price_from_ytm(&bond, 0.05),
            1000.0 * (-0.05_f64).exp(),
            epsilon = 1e-10
        );
    }

    #[test]
    fn test_coupon_from_ytm() {
        let bond = Bond::coupon_bearing(100.0, 0.06, 2.0, Frequency::Annual);
        let expected = 6.0 * (-0.04_f64).exp() + 106.0 * (-0.08_f64).exp();
        assert_relative_eq!(price_from_ytm(&bond, 0.04), expected, epsilon = 1e-10);
    }

    #[test]
    fn test_zero_yield_returns_undiscounted_total() {
        let bond = Bond::coupon_bearing(500.0, 0.05, 3.0, Frequency::SemiAnnual);
        assert_relative_eq!(price_from_ytm(&bond, 0.0), 575.0, epsilon = 1e-10);
    }

    #[test]
    fn test_flat_curve_matches_ytm_pricing() {
        let bond = Bond::coupon_bearing(500.0, 0.05, 3.0, Frequency::SemiAnnual);
        assert_relative_eq!(
            price_from_curve(&Flat(0.03), &bond),
            price_from_ytm(&bond, 0.03),
            epsilon = 1e-10
        );
    }

    #[test]
    fn test_price_from_curve_sample() {
        let curve = YieldCurve::from_points(&[1.0, 2.0, 3.0], &[0.02, 0.023, 0.03]).unwrap();
        let bond = Bond::coupon_bearing(500.0, 0.05, 3.0, Frequency::SemiAnnual);

        let expected = 12.5 * (-0.02_f64 * 0.5).exp()
            + 12.5 * (-0.02_f64).exp()
            + 12.5 * (-0.0215_f64 * 1.5).exp()
            + 12.5 * (-0.046_f64).exp()
            + 12.5 * (-0.0265_f64 * 2.5).exp()
            + 512.5 * (-0.09_f64).exp();

        assert_relative_eq!(price_from_curve(&curve, &bond), expected, epsilon = 1e-9);
        assert_relative_eq!(bond.price_from_curve(&curve), expected, epsilon = 1e-9);
    }

    #[test]
    fn test_price_from_curve_dyn() {
        let curve: Box<dyn RateCurve> = Box::new(Flat(0.01));
        let bond = Bond::zero_coupon(100.0, 99.0, 1.0);
        assert_relative_eq!(
            price_from_curve(curve.as_ref(), &bond),
            100.0 * (-0.01_f64).exp(),
            epsilon = 1e-12
        );
    }
}
