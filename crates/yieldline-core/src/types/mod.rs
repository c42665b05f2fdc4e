//! Domain types.

mod cashflow;
mod frequency;

pub use cashflow::{CashFlow, CashFlowSchedule, CashFlowType};
pub use frequency::{Compounding, Frequency};
