//! Batch pricing of bonds against one curve.

use serde::Serialize;

use yieldline_curves::RateCurve;

use crate::instruments::Bond;
use crate::pricing::price_from_curve;

/// Curve prices for a batch of bonds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortfolioValuation {
    /// Price of each bond, in input order.
    pub prices: Vec<f64>,
    /// Sum of `prices`.
    pub total: f64,
}

impl PortfolioValuation {
    /// Number of priced bonds.
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    /// Returns true if no bonds were priced.
    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}

/// Prices many bonds against a single curve.
///
/// With the `parallel` feature the bonds are priced on the rayon pool;
/// results keep the input order either way.
///
/// # Example
///
/// ```rust
/// use yieldline_bonds::pricing::PortfolioPricer;
/// use yieldline_bonds::Bond;
/// use yieldline_curves::YieldCurve;
///
/// let curve = YieldCurve::from_points(&[1.0, 2.0], &[0.02, 0.03]).unwrap();
/// let bonds = vec![
///     Bond::zero_coupon(100.0, 98.0, 1.0),
///     Bond::zero_coupon(100.0, 94.0, 2.0),
/// ];
///
/// let valuation = PortfolioPricer::new(&curve).price(&bonds);
/// assert_eq!(valuation.len(), 2);
/// assert!((valuation.total - valuation.prices.iter().sum::<f64>()).abs() < 1e-12);
/// ```
pub struct PortfolioPricer<'a, C: RateCurve + ?Sized> {
    curve: &'a C,
}

impl<'a, C: RateCurve + ?Sized> PortfolioPricer<'a, C> {
    /// Creates a pricer over `curve`.
    #[must_use]
    pub fn new(curve: &'a C) -> Self {
        Self { curve }
    }

    /// Prices every bond on the curve.
    pub fn price(&self, bonds: &[Bond]) -> PortfolioValuation {
        let prices = self.price_each(bonds);
        let total = prices.iter().sum();

        PortfolioValuation { prices, total }
    }

    #[cfg(feature = "parallel")]
    fn price_each(&self, bonds: &[Bond]) -> Vec<f64> {
        use rayon::prelude::*;

        bonds
            .par_iter()
            .map(|bond| price_from_curve(self.curve, bond))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    fn price_each(&self, bonds: &[Bond]) -> Vec<f64> {
        bonds
            .iter()
            .map(|bond| price_from_curve(self.curve, bond))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use yieldline_core::Frequency;
    use yieldline_curves::YieldCurve;

    fn sample_curve() -> YieldCurve {
        YieldCurve::from_points(&[1.0, 2.0, 3.0], &[0.02, 0.023, 0.03]).unwrap()
    }

    #[test]
    fn test_prices_in_input_order() {
        let curve = sample_curve();
        let bonds: Vec<Bond> = (1..=20)
            .map(|i| Bond::coupon_bearing(100.0 * f64::from(i), 0.04, 3.0, Frequency::SemiAnnual))
            .collect();

        let valuation = PortfolioPricer::new(&curve).price(&bonds);

        assert_eq!(valuation.len(), bonds.len());
        for (bond, price) in bonds.iter().zip(&valuation.prices) {
            assert_eq!(*price, bond.price_from_curve(&curve));
        }
        assert_relative_eq!(
            valuation.total,
            valuation.prices.iter().sum::<f64>(),
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_empty_portfolio() {
        let curve = sample_curve();
        let valuation = PortfolioPricer::new(&curve).price(&[]);
        assert!(valuation.is_empty());
        assert_eq!(valuation.total, 0.0);
    }

    #[test]
    fn test_dyn_curve() {
        let curve: Box<dyn RateCurve> = Box::new(sample_curve());
        let bonds = [Bond::zero_coupon(100.0, 97.0, 1.0)];

        let valuation = PortfolioPricer::new(curve.as_ref()).price(&bonds);
        assert_relative_eq!(valuation.total, 100.0 * (-0.02_f64).exp(), epsilon = 1e-12);
    }
}
