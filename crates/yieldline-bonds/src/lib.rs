//! # Yieldline Bonds
//!
//! Bond cash flows, pricing and yield-to-maturity.
//!
//! This crate provides:
//!
//! - **Instruments**: Zero-coupon and coupon-bearing bonds as immutable values
//! - **Cash Flows**: Coupon schedule generation by period count
//! - **Pricing**: Present value off a yield curve or off a single yield
//! - **Yield**: Closed-form zero-coupon yield and bounded bisection for coupon bonds
//! - **Curve Instruments**: Priced bonds as yield curve pillars
//!
//! ## Example
//!
//! ```rust
//! use yieldline_bonds::prelude::*;
//! use yieldline_core::Frequency;
//! use yieldline_curves::YieldCurve;
//!
//! let curve = YieldCurve::from_points(&[1.0, 2.0, 3.0], &[0.02, 0.023, 0.03]).unwrap();
//! let bond = Bond::coupon_bearing(500.0, 0.05, 3.0, Frequency::SemiAnnual);
//!
//! let price = bond.price_from_curve(&curve);
//! let ytm = yield_to_maturity(&bond, price).unwrap();
//!
//! assert!((bond.price_from_ytm(ytm) - price).abs() < 1.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::float_cmp)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::return_self_not_must_use)]

pub mod cashflows;
pub mod curve_instruments;
pub mod error;
pub mod instruments;
pub mod pricing;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::cashflows::CashFlowGenerator;
    pub use crate::curve_instruments::{curve_from_bonds, curve_from_bonds_with, BondPillar};
    pub use crate::error::{BondError, BondResult};
    pub use crate::instruments::{Bond, BondKind};
    pub use crate::pricing::{
        price_from_curve, price_from_ytm, yield_to_maturity, PortfolioPricer, PortfolioValuation,
        YieldMethod, YieldResult, YieldSolver, YieldSolverConfig,
    };
}

pub use error::{BondError, BondResult};
pub use instruments::{Bond, BondKind};
pub use pricing::{yield_to_maturity, YieldSolver, YieldSolverConfig};
