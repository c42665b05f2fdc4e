//! Zero-coupon and coupon-bearing bonds.

use serde::{Deserialize, Serialize};
use std::fmt;

use yieldline_core::{CashFlowSchedule, Compounding, Frequency};
use yieldline_curves::RateCurve;

use crate::cashflows::CashFlowGenerator;
use crate::pricing;

/// The structure of a bond's payments.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BondKind {
    /// Single payment of face value at maturity.
    ZeroCoupon,
    /// Periodic coupons plus face value at the end.
    CouponBearing {
        /// Annual coupon rate as a fraction (0.05 = 5%).
        coupon_rate: f64,
        /// Coupon payment frequency.
        frequency: Frequency,
    },
}

/// A bond with its cash flow schedule.
///
/// All fields are fixed at construction and the cash flow schedule is
/// generated before the constructor returns. Inputs are taken as given:
/// face value, maturity and rates are expected to be positive and finite.
///
/// # Example
///
/// ```rust
/// use yieldline_bonds::Bond;
/// use yieldline_core::Frequency;
///
/// let zero = Bond::zero_coupon(1000.0, 895.0, 1.0);
/// assert_eq!(zero.cash_flows().get(1.0), Some(1000.0));
/// assert_eq!(zero.price(), Some(895.0));
///
/// let coupon = Bond::coupon_bearing(500.0, 0.05, 3.0, Frequency::SemiAnnual);
/// assert_eq!(coupon.coupon_amount(), 12.5);
/// assert_eq!(coupon.cash_flows().len(), 6);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bond {
    kind: BondKind,
    face_value: f64,
    /// Years until the final payment.
    maturity: f64,
    /// Observed market price, if any.
    price: Option<f64>,
    cash_flows: CashFlowSchedule,
}

impl Bond {
    /// Creates a coupon-bearing bond.
    ///
    /// The per-period coupon is `face_value * coupon_rate * period`.
    ///
    /// # Panics
    ///
    /// Panics if `maturity` is not finite.
    #[must_use]
    pub fn coupon_bearing(
        face_value: f64,
        coupon_rate: f64,
        maturity: f64,
        frequency: Frequency,
    ) -> Self {
        let coupon_amount = face_value * coupon_rate * frequency.period();
        let cash_flows =
            CashFlowGenerator::coupon_bearing(face_value, coupon_amount, maturity, frequency);

        Self {
            kind: BondKind::CouponBearing {
                coupon_rate,
                frequency,
            },
            face_value,
            maturity,
            price: None,
            cash_flows,
        }
    }

    /// Creates a zero-coupon bond with an observed price.
    #[must_use]
    pub fn zero_coupon(face_value: f64, price: f64, maturity: f64) -> Self {
        Self {
            kind: BondKind::ZeroCoupon,
            face_value,
            maturity,
            price: Some(price),
            cash_flows: CashFlowGenerator::zero_coupon(face_value, maturity),
        }
    }

    /// Returns a copy carrying an observed market price.
    #[must_use]
    pub fn with_market_price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    /// Returns the bond kind.
    pub fn kind(&self) -> BondKind {
        self.kind
    }

    /// Returns true for a zero-coupon bond.
    pub fn is_zero_coupon(&self) -> bool {
        matches!(self.kind, BondKind::ZeroCoupon)
    }

    /// Returns the face value.
    pub fn face_value(&self) -> f64 {
        self.face_value
    }

    /// Returns the maturity in years.
    pub fn maturity(&self) -> f64 {
        self.maturity
    }

    /// Returns the annual coupon rate (0 for zero-coupon bonds).
    pub fn coupon_rate(&self) -> f64 {
        match self.kind {
            BondKind::ZeroCoupon => 0.0,
            BondKind::CouponBearing { coupon_rate, .. } => coupon_rate,
        }
    }

    /// Returns the coupon frequency (`None` for zero-coupon bonds).
    pub fn frequency(&self) -> Option<Frequency> {
        match self.kind {
            BondKind::ZeroCoupon => None,
            BondKind::CouponBearing { frequency, .. } => Some(frequency),
        }
    }

    /// Returns the per-period coupon amount (0 for zero-coupon bonds).
    pub fn coupon_amount(&self) -> f64 {
        match self.kind {
            BondKind::ZeroCoupon => 0.0,
            BondKind::CouponBearing {
                coupon_rate,
                frequency,
            } => self.face_value * coupon_rate * frequency.period(),
        }
    }

    /// Returns the observed market price, if any.
    pub fn price(&self) -> Option<f64> {
        self.price
    }

    /// Returns the cash flow schedule in ascending time order.
    pub fn cash_flows(&self) -> &CashFlowSchedule {
        &self.cash_flows
    }

    /// Present value of the cash flows discounted on `curve`.
    pub fn price_from_curve<C: RateCurve + ?Sized>(&self, curve: &C) -> f64 {
        pricing::price_from_curve(curve, self)
    }

    /// Price implied by a continuously compounded yield.
    pub fn price_from_ytm(&self, ytm: f64) -> f64 {
        pricing::price_from_ytm(self, ytm)
    }

    /// Price implied by a yield under an explicit compounding convention.
    ///
    /// Every cash flow is discounted at `ytm`. Under
    /// [`Compounding::Annual`] this inverts the closed-form zero-coupon
    /// yield; under [`Compounding::Continuous`] it matches
    /// [`price_from_ytm`](Self::price_from_ytm).
    pub fn price_from_yield(&self, ytm: f64, compounding: Compounding) -> f64 {
        self.cash_flows
            .present_value(|t| compounding.discount_factor(ytm, t))
    }
}

impl fmt::Display for Bond {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            BondKind::ZeroCoupon => write!(
                f,
                "zero-coupon bond (face {:.2}, maturity {:.2}y)",
                self.face_value, self.maturity
            ),
            BondKind::CouponBearing {
                coupon_rate,
                frequency,
            } => write!(
                f,
                "{:.2}% {} coupon bond (face {:.2}, maturity {:.2}y)",
                coupon_rate * 100.0,
                frequency,
                self.face_value,
                self.maturity
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_zero_coupon_fields() {
        let bond = Bond::zero_coupon(100.0, 95.0, 0.5);

        assert!(bond.is_zero_coupon());
        assert_eq!(bond.face_value(), 100.0);
        assert_eq!(bond.maturity(), 0.5);
        assert_eq!(bond.price(), Some(95.0));
        assert_eq!(bond.coupon_rate(), 0.0);
        assert_eq!(bond.coupon_amount(), 0.0);
        assert_eq!(bond.frequency(), None);
        assert_eq!(bond.cash_flows().len(), 1);
        assert_eq!(bond.cash_flows().get(0.5), Some(100.0));
    }

    #[test]
    fn test_coupon_bearing_fields() {
        let bond = Bond::coupon_bearing(500.0, 0.05, 3.0, Frequency::SemiAnnual);

        assert!(!bond.is_zero_coupon());
        assert_eq!(bond.coupon_rate(), 0.05);
        assert_eq!(bond.frequency(), Some(Frequency::SemiAnnual));
        assert_eq!(bond.coupon_amount(), 12.5);
        assert_eq!(bond.price(), None);
        assert_eq!(bond.cash_flows().last().unwrap().amount(), 512.5);
    }

    #[test]
    #[should_panic(expected = "finite maturity")]
    fn test_coupon_bearing_rejects_infinite_maturity() {
        let _ = Bond::coupon_bearing(100.0, 0.05, f64::INFINITY, Frequency::Annual);
    }

    #[test]
    fn test_with_market_price() {
        let bond = Bond::coupon_bearing(100.0, 0.04, 2.0, Frequency::Annual).with_market_price(99.0);
        assert_eq!(bond.price(), Some(99.0));
        assert_eq!(bond.cash_flows().len(), 2);
    }

    #[test]
    fn test_price_from_yield_annual_inverts_closed_form() {
        let bond = Bond::zero_coupon(1000.0, 895.0, 1.0);
        let ytm = 1000.0 / 895.0 - 1.0;
        assert_relative_eq!(
            bond.price_from_yield(ytm, Compounding::Annual),
            895.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_price_from_yield_continuous_matches_ytm_pricing() {
        let bond = Bond::coupon_bearing(500.0, 0.05, 3.0, Frequency::SemiAnnual);
        assert_relative_eq!(
            bond.price_from_yield(0.03, Compounding::Continuous),
            bond.price_from_ytm(0.03),
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_display() {
        let zero = Bond::zero_coupon(1000.0, 895.0, 1.0);
        assert_eq!(
            zero.to_string(),
            "zero-coupon bond (face 1000.00, maturity 1.00y)"
        );

        let coupon = Bond::coupon_bearing(500.0, 0.05, 3.0, Frequency::SemiAnnual);
        assert_eq!(
            coupon.to_string(),
            "5.00% Semi-Annual coupon bond (face 500.00, maturity 3.00y)"
        );
    }

    #[test]
    fn test_serialize_kind() {
        let bond = Bond::coupon_bearing(100.0, 0.05, 1.0, Frequency::Annual);
        let json = serde_json::to_value(bond.kind()).unwrap();
        assert_eq!(json["type"], "coupon_bearing");
        assert_eq!(json["frequency"], "annual");
    }
}
