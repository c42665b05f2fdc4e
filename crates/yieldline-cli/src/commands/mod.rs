//! CLI command implementations.

pub mod curve;
pub mod demo;
pub mod price;
pub mod ytm;

pub use curve::CurveArgs;
pub use price::PriceArgs;
pub use ytm::YtmArgs;

use clap::Args;

use yieldline_bonds::Bond;
use yieldline_core::Frequency;
use yieldline_curves::YieldCurve;

use crate::error::{CliError, CliResult};

/// Bond terms shared by `price` and `ytm`.
#[derive(Args, Debug, Clone)]
pub struct BondArgs {
    /// Face value
    #[arg(long, default_value = "100")]
    pub face: f64,

    /// Annual coupon rate as a decimal (0.05 = 5%)
    #[arg(long, default_value = "0", conflicts_with = "zero")]
    pub coupon: f64,

    /// Years to maturity
    #[arg(short, long)]
    pub maturity: f64,

    /// Coupon frequency: annual, semi-annual or quarterly (or 1, 2, 4)
    #[arg(long, default_value = "semi-annual")]
    pub frequency: Frequency,

    /// Treat the bond as zero-coupon
    #[arg(long)]
    pub zero: bool,
}

impl BondArgs {
    /// Builds the bond; `price` is attached to zero-coupon bonds.
    pub fn build(&self, price: f64) -> CliResult<Bond> {
        validate_face(self.face)?;
        validate_maturity(self.maturity)?;

        if self.zero {
            Ok(Bond::zero_coupon(self.face, price, self.maturity))
        } else {
            Ok(Bond::coupon_bearing(
                self.face,
                self.coupon,
                self.maturity,
                self.frequency,
            ))
        }
    }
}

/// Curve points shared by `curve` and `price`.
#[derive(Args, Debug, Clone)]
pub struct CurvePointArgs {
    /// Pillar times in years (comma-separated, e.g. "1,2,3")
    #[arg(short, long, value_delimiter = ',', num_args = 1..)]
    pub times: Vec<f64>,

    /// Zero rates as decimals (comma-separated, e.g. "0.02,0.023,0.03")
    #[arg(short, long, value_delimiter = ',', num_args = 1..)]
    pub rates: Vec<f64>,
}

impl CurvePointArgs {
    /// Builds the curve.
    pub fn build(&self) -> anyhow::Result<YieldCurve> {
        Ok(YieldCurve::from_points(&self.times, &self.rates)?)
    }

    /// Returns true if no points were given.
    pub fn is_empty(&self) -> bool {
        self.times.is_empty() && self.rates.is_empty()
    }
}

/// Validates a price value.
pub fn validate_price(price: f64) -> CliResult<f64> {
    if price.is_nan() || price <= 0.0 {
        return Err(CliError::InvalidPrice(price));
    }
    Ok(price)
}

/// Validates a face value.
pub fn validate_face(face: f64) -> CliResult<f64> {
    if face.is_nan() || face <= 0.0 {
        return Err(CliError::InvalidFace(face));
    }
    Ok(face)
}

/// Validates a maturity.
pub fn validate_maturity(maturity: f64) -> CliResult<f64> {
    if maturity.is_nan() || maturity <= 0.0 {
        return Err(CliError::InvalidMaturity(maturity));
    }
    Ok(maturity)
}
