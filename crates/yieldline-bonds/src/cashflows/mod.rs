//! Cash flow generation.
//!
//! Coupon times are laid out by counting whole periods inside the maturity:
//! `n = floor(maturity / period)`. Coupons are paid at `period, 2 period,
//! ..., (n-1) period` and the final coupon plus principal at `n period`.
//! The final time therefore equals the maturity only when the maturity is a
//! whole number of periods; a 2.75y semi-annual bond redeems at 2.5y. A bond
//! shorter than one period redeems at `period`.

use yieldline_core::{CashFlow, CashFlowSchedule, Frequency};

/// Builds cash flow schedules for bonds.
pub struct CashFlowGenerator;

impl CashFlowGenerator {
    /// Single principal payment of `face_value` at `maturity`.
    #[must_use]
    pub fn zero_coupon(face_value: f64, maturity: f64) -> CashFlowSchedule {
        CashFlowSchedule::new(vec![CashFlow::principal(maturity, face_value)])
    }

    /// Periodic coupons with principal folded into the last one.
    ///
    /// # Example
    ///
    /// ```rust
    /// use yieldline_bonds::cashflows::CashFlowGenerator;
    /// use yieldline_core::Frequency;
    ///
    /// let schedule = CashFlowGenerator::coupon_bearing(500.0, 12.5, 3.0, Frequency::SemiAnnual);
    /// assert_eq!(schedule.len(), 6);
    /// assert_eq!(schedule.get(0.5), Some(12.5));
    /// assert_eq!(schedule.get(3.0), Some(512.5));
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `maturity` is not finite.
    #[must_use]
    pub fn coupon_bearing(
        face_value: f64,
        coupon_amount: f64,
        maturity: f64,
        frequency: Frequency,
    ) -> CashFlowSchedule {
        assert!(
            maturity.is_finite(),
            "coupon schedule requires a finite maturity, got {maturity}"
        );

        let period = frequency.period();
        let n = Self::coupon_count(maturity, frequency);

        let mut flows = Vec::with_capacity(n.max(1));
        for i in 1..n {
            flows.push(CashFlow::coupon(i as f64 * period, coupon_amount));
        }
        let final_time = n.max(1) as f64 * period;
        flows.push(CashFlow::final_payment(final_time, coupon_amount, face_value));

        CashFlowSchedule::new(flows)
    }

    /// Whole coupon periods inside `maturity`, `floor(maturity / period)`.
    #[must_use]
    pub fn coupon_count(maturity: f64, frequency: Frequency) -> usize {
        (maturity / frequency.period()).floor() as usize
    }
}
