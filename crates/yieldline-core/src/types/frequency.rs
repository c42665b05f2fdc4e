//! Frequency and compounding types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// Payment frequency for coupon bonds.
///
/// Each variant carries a fixed period length in years, used to space
/// coupon payment times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Frequency {
    /// Annual payments (period of 1 year)
    Annual,
    /// Semi-annual payments (period of 0.5 years)
    #[default]
    SemiAnnual,
    /// Quarterly payments (period of 0.25 years)
    Quarterly,
}

impl Frequency {
    /// Returns the period length in years.
    #[must_use]
    pub fn period(&self) -> f64 {
        match self {
            Frequency::Annual => 1.0,
            Frequency::SemiAnnual => 0.5,
            Frequency::Quarterly => 0.25,
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Frequency::Annual => "Annual",
            Frequency::SemiAnnual => "Semi-Annual",
            Frequency::Quarterly => "Quarterly",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Frequency {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "annual" | "annually" | "1" => Ok(Frequency::Annual),
            "semi-annual" | "semiannual" | "semi_annual" | "semi-annually" | "2" => {
                Ok(Frequency::SemiAnnual)
            }
            "quarterly" | "4" => Ok(Frequency::Quarterly),
            _ => Err(CoreError::invalid_frequency(s)),
        }
    }
}

/// Interest compounding convention.
///
/// Curve rates and coupon-bond yields are continuously compounded, while the
/// closed-form zero-coupon yield is annually compounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Compounding {
    /// Annual compounding (1x per year)
    Annual,
    /// Continuous compounding
    #[default]
    Continuous,
}

impl Compounding {
    /// Discount factor for `rate` over `t` years.
    ///
    /// - Annual: `(1 + r)^(-t)`
    /// - Continuous: `e^(-r t)`
    #[must_use]
    pub fn discount_factor(&self, rate: f64, t: f64) -> f64 {
        match self {
            Compounding::Annual => (1.0 + rate).powf(-t),
            Compounding::Continuous => (-rate * t).exp(),
        }
    }

    /// Rate implied by discount factor `df` over `t` years.
    ///
    /// Inverse of [`discount_factor`](Self::discount_factor).
    #[must_use]
    pub fn zero_rate(&self, df: f64, t: f64) -> f64 {
        match self {
            Compounding::Annual => df.powf(-1.0 / t) - 1.0,
            Compounding::Continuous => -df.ln() / t,
        }
    }
}

impl fmt::Display for Compounding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Compounding::Annual => "Annual",
            Compounding::Continuous => "Continuous",
        };
        write!(f, "{name}")
    }
}
