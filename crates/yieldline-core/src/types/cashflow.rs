//! Cash flow types for bond analytics.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Type of cash flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CashFlowType {
    /// Regular coupon payment
    Coupon,
    /// Principal repayment at maturity (zero-coupon redemption)
    Principal,
    /// Combined coupon and principal (final payment)
    CouponAndPrincipal,
}

impl fmt::Display for CashFlowType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CashFlowType::Coupon => "Coupon",
            CashFlowType::Principal => "Principal",
            CashFlowType::CouponAndPrincipal => "Coupon+Principal",
        };
        write!(f, "{name}")
    }
}

/// A single cash flow paid `time` years from the valuation point.
///
/// # Example
///
/// ```rust
/// use yieldline_core::types::{CashFlow, CashFlowType};
///
/// let cf = CashFlow::coupon(0.5, 12.5);
/// assert_eq!(cf.time(), 0.5);
/// assert_eq!(cf.amount(), 12.5);
/// assert_eq!(cf.kind(), CashFlowType::Coupon);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CashFlow {
    /// Payment time in years
    time: f64,
    /// Cash amount
    amount: f64,
    /// Type of cash flow
    kind: CashFlowType,
}

impl CashFlow {
    /// Creates a new cash flow.
    #[must_use]
    pub fn new(time: f64, amount: f64, kind: CashFlowType) -> Self {
        Self { time, amount, kind }
    }

    /// Creates a coupon cash flow.
    #[must_use]
    pub fn coupon(time: f64, amount: f64) -> Self {
        Self::new(time, amount, CashFlowType::Coupon)
    }

    /// Creates a principal cash flow.
    #[must_use]
    pub fn principal(time: f64, amount: f64) -> Self {
        Self::new(time, amount, CashFlowType::Principal)
    }

    /// Creates a final coupon-plus-principal cash flow.
    #[must_use]
    pub fn final_payment(time: f64, coupon: f64, principal: f64) -> Self {
        Self::new(time, coupon + principal, CashFlowType::CouponAndPrincipal)
    }

    /// Returns the payment time in years.
    #[must_use]
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Returns the cash amount.
    #[must_use]
    pub fn amount(&self) -> f64 {
        self.amount
    }

    /// Returns the cash flow type.
    #[must_use]
    pub fn kind(&self) -> CashFlowType {
        self.kind
    }
}

impl fmt::Display for CashFlow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t={:.2}: {:.4} ({})", self.time, self.amount, self.kind)
    }
}

/// An ordered schedule of cash flows.
///
/// Flows are kept in ascending time order with unique times. When two flows
/// share a time the later one replaces the earlier, mirroring map insertion.
/// The schedule is read-only once built.
///
/// # Example
///
/// ```rust
/// use yieldline_core::types::{CashFlow, CashFlowSchedule};
///
/// let schedule = CashFlowSchedule::new(vec![
///     CashFlow::final_payment(1.0, 25.0, 500.0),
///     CashFlow::coupon(0.5, 25.0),
/// ]);
///
/// assert_eq!(schedule.len(), 2);
/// assert_eq!(schedule.times(), vec![0.5, 1.0]);
/// assert_eq!(schedule.total(), 550.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CashFlowSchedule {
    flows: Vec<CashFlow>,
}

impl CashFlowSchedule {
    /// Builds a schedule from flows in any order.
    #[must_use]
    pub fn new(flows: Vec<CashFlow>) -> Self {
        let mut ordered: Vec<CashFlow> = Vec::with_capacity(flows.len());
        for cf in flows {
            match ordered.binary_search_by(|candidate| candidate.time.total_cmp(&cf.time)) {
                Ok(i) => ordered[i] = cf,
                Err(i) => ordered.insert(i, cf),
            }
        }
        Self { flows: ordered }
    }

    /// Returns the number of cash flows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.flows.len()
    }

    /// Returns true if the schedule holds no flows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.flows.is_empty()
    }

    /// Iterates over the flows in ascending time order.
    pub fn iter(&self) -> impl Iterator<Item = &CashFlow> {
        self.flows.iter()
    }

    /// Returns the flows as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[CashFlow] {
        &self.flows
    }

    /// Returns the final cash flow.
    #[must_use]
    pub fn last(&self) -> Option<&CashFlow> {
        self.flows.last()
    }

    /// Returns the amount paid at exactly `time`, if any.
    #[must_use]
    pub fn get(&self, time: f64) -> Option<f64> {
        self.flows
            .binary_search_by(|candidate| candidate.time.total_cmp(&time))
            .ok()
            .map(|i| self.flows[i].amount)
    }

    /// Returns the payment times in ascending order.
    #[must_use]
    pub fn times(&self) -> Vec<f64> {
        self.flows.iter().map(|cf| cf.time).collect()
    }

    /// Returns the undiscounted sum of all amounts.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.flows.iter().map(|cf| cf.amount).sum()
    }

    /// Present value of the schedule under a discount function of time.
    pub fn present_value<F>(&self, discount: F) -> f64
    where
        F: Fn(f64) -> f64,
    {
        self.flows
            .iter()
            .map(|cf| cf.amount * discount(cf.time))
            .sum()
    }
}

impl<'a> IntoIterator for &'a CashFlowSchedule {
    type Item = &'a CashFlow;
    type IntoIter = std::slice::Iter<'a, CashFlow>;

    fn into_iter(self) -> Self::IntoIter {
        self.flows.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_cash_flow_accessors() {
        let cf = CashFlow::final_payment(3.0, 12.5, 500.0);
        assert_eq!(cf.time(), 3.0);
        assert_eq!(cf.amount(), 512.5);
        assert_eq!(cf.kind(), CashFlowType::CouponAndPrincipal);
        assert_eq!(CashFlow::coupon(1.0, 5.0).kind(), CashFlowType::Coupon);
    }

    #[test]
    fn test_schedule_sorts_by_time() {
        let schedule = CashFlowSchedule::new(vec![
            CashFlow::coupon(1.5, 1.0),
            CashFlow::coupon(0.5, 1.0),
            CashFlow::coupon(1.0, 1.0),
        ]);
        assert_eq!(schedule.times(), vec![0.5, 1.0, 1.5]);
    }

    #[test]
    fn test_schedule_duplicate_time_replaces() {
        let schedule = CashFlowSchedule::new(vec![
            CashFlow::coupon(1.0, 5.0),
            CashFlow::principal(1.0, 100.0),
        ]);
        assert_eq!(schedule.len(), 1);
        assert_eq!(schedule.get(1.0), Some(100.0));
    }

    #[test]
    fn test_schedule_lookup() {
        let schedule = CashFlowSchedule::new(vec![CashFlow::principal(2.0, 1000.0)]);
        assert_eq!(schedule.get(2.0), Some(1000.0));
        assert_eq!(schedule.get(1.0), None);
        assert_eq!(schedule.last().map(CashFlow::time), Some(2.0));
    }

    #[test]
    fn test_present_value() {
        let schedule = CashFlowSchedule::new(vec![
            CashFlow::coupon(1.0, 5.0),
            CashFlow::final_payment(2.0, 5.0, 100.0),
        ]);
        let pv = schedule.present_value(|t| (-0.05 * t).exp());
        let expected = 5.0 * (-0.05_f64).exp() + 105.0 * (-0.10_f64).exp();
        assert_relative_eq!(pv, expected, epsilon = 1e-12);
    }

    #[test]
    fn test_empty_schedule() {
        let schedule = CashFlowSchedule::default();
        assert!(schedule.is_empty());
        assert_eq!(schedule.total(), 0.0);
    }
}
