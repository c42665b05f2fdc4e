//! # Yieldline Core
//!
//! Core types shared by the Yieldline fixed income analytics crates.
//!
//! This crate provides the foundational building blocks:
//!
//! - **Frequency**: Coupon payment period lengths (annual, semi-annual, quarterly)
//! - **Compounding**: The annual and continuous rate conventions used for discounting
//! - **Cash Flows**: Time-indexed payment schedules, ordered and immutable
//!
//! Times are expressed in years from the valuation point; there is no date or
//! day-count layer.
//!
//! ## Example
//!
//! ```rust
//! use yieldline_core::prelude::*;
//!
//! let period = Frequency::SemiAnnual.period();
//! assert_eq!(period, 0.5);
//!
//! let df = Compounding::Continuous.discount_factor(0.05, 2.0);
//! assert!((df - (-0.1_f64).exp()).abs() < 1e-15);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::float_cmp)]

pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::types::{CashFlow, CashFlowSchedule, CashFlowType, Compounding, Frequency};
}

// Re-export commonly used types at crate root
pub use error::{CoreError, CoreResult};
pub use types::{CashFlow, CashFlowSchedule, CashFlowType, Compounding, Frequency};
