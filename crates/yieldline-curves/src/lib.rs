//! # Yieldline Curves
//!
//! Zero-rate yield curves keyed by time in years.
//!
//! A [`YieldCurve`] stores continuously compounded rates at a set of pillar
//! times and answers rate, discount factor and forward rate queries:
//!
//! - exact pillar hits return the stored rate unchanged
//! - between pillars the rate is linearly interpolated
//! - outside the pillar range the nearest pillar's rate is used (flat)
//!
//! Curves are built either from explicit `(time, rate)` points or from any
//! set of [`CurveInstrument`]s that can report an implied rate, such as
//! zero-coupon bonds with an observed price.
//!
//! ## Example
//!
//! ```rust
//! use yieldline_curves::prelude::*;
//!
//! let curve = YieldCurve::from_points(&[1.0, 2.0, 3.0], &[0.02, 0.023, 0.03]).unwrap();
//!
//! assert_eq!(curve.interest_rate(2.0), 0.023);
//! assert!((curve.interest_rate(1.5) - 0.0215).abs() < 1e-12);
//! assert_eq!(curve.interest_rate(10.0), 0.03);
//!
//! let df = curve.discount_factor(2.0);
//! assert!((df - (-0.046_f64).exp()).abs() < 1e-15);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::float_cmp)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod instruments;
pub mod traits;
pub mod yield_curve;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{CurveError, CurveResult};
    pub use crate::instruments::CurveInstrument;
    pub use crate::traits::{RateCurve, CURVE_COMPOUNDING};
    pub use crate::yield_curve::{CurvePoint, YieldCurve};
}

pub use error::{CurveError, CurveResult};
pub use instruments::CurveInstrument;
pub use traits::{RateCurve, CURVE_COMPOUNDING};
pub use yield_curve::{CurvePoint, YieldCurve};
