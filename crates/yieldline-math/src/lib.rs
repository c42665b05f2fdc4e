//! # Yieldline Math
//!
//! Numerical routines for the Yieldline fixed income analytics library.
//!
//! This crate provides:
//!
//! - **Solvers**: Bounded bisection for monotone decreasing functions such as
//!   price as a function of yield
//! - **Interpolation**: Piecewise-linear interpolation with flat extrapolation
//!   beyond the data range

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
pub mod interpolation;
pub mod solvers;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::interpolation::{Interpolator, LinearInterpolator};
    pub use crate::solvers::{bisection, SolverConfig, SolverResult};
}

pub use error::{MathError, MathResult};
