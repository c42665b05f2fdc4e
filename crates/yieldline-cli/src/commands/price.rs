//! Price command implementation.
//!
//! Prices a bond off a yield curve or off a single continuously
//! compounded yield.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use yieldline_bonds::pricing::{price_from_curve, price_from_ytm};
use yieldline_bonds::Bond;

use crate::cli::OutputFormat;
use crate::commands::{BondArgs, CurvePointArgs};
use crate::error::CliError;
use crate::output::{print_json, print_table, KeyValue};

/// Arguments for the price command.
#[derive(Args, Debug)]
pub struct PriceArgs {
    #[command(flatten)]
    pub bond: BondArgs,

    #[command(flatten)]
    pub curve: CurvePointArgs,

    /// Continuously compounded yield as a decimal; replaces the curve
    #[arg(short, long, conflicts_with_all = ["times", "rates"])]
    pub ytm: Option<f64>,
}

/// How the price was obtained.
#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceSource {
    /// Discounted on a curve.
    Curve,
    /// Discounted at one yield.
    Yield(f64),
}

/// Price command output.
#[derive(Debug, Serialize)]
pub struct PriceOutput {
    pub bond: Bond,
    pub source: PriceSource,
    pub price: f64,
}

/// Computes the price for the given arguments.
pub fn run(args: &PriceArgs) -> Result<PriceOutput> {
    // Pricing ignores the observed price; zero-coupon bonds carry face as a placeholder
    let bond = args.bond.build(args.bond.face)?;

    let (source, price) = match args.ytm {
        Some(ytm) => (PriceSource::Yield(ytm), price_from_ytm(&bond, ytm)),
        None if args.curve.is_empty() => {
            return Err(CliError::MissingArgument("--ytm or --times/--rates".into()).into())
        }
        None => {
            let curve = args.curve.build()?;
            (PriceSource::Curve, price_from_curve(&curve, &bond))
        }
    };

    Ok(PriceOutput {
        bond,
        source,
        price,
    })
}

/// Execute the price command.
pub fn execute(args: PriceArgs, format: OutputFormat) -> Result<()> {
    let output = run(&args)?;

    match format {
        OutputFormat::Table => {
            let mut rows = vec![KeyValue::new("Bond", output.bond.to_string())];
            match output.source {
                PriceSource::Curve => rows.push(KeyValue::new("Source", "Curve")),
                PriceSource::Yield(ytm) => rows.push(KeyValue::from_percent("Yield", ytm)),
            }
            rows.push(KeyValue::new(
                "Cash Flows",
                output.bond.cash_flows().len().to_string(),
            ));
            rows.push(KeyValue::from_f64("Price", output.price, 2));
            print_table(&rows);
        }
        OutputFormat::Json => print_json(&output)?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use yieldline_core::Frequency;

    fn b3_args() -> BondArgs {
        BondArgs {
            face: 500.0,
            coupon: 0.05,
            maturity: 3.0,
            frequency: Frequency::SemiAnnual,
            zero: false,
        }
    }

    #[test]
    fn test_price_on_curve() {
        let args = PriceArgs {
            bond: b3_args(),
            curve: CurvePointArgs {
                times: vec![1.0, 2.0, 3.0],
                rates: vec![0.02, 0.023, 0.03],
            },
            ytm: None,
        };
        let output = run(&args).unwrap();
        assert_eq!(format!("{:.2}", output.price), "528.76");
    }

    #[test]
    fn test_price_at_yield() {
        let args = PriceArgs {
            bond: b3_args(),
            curve: CurvePointArgs {
                times: vec![],
                rates: vec![],
            },
            ytm: Some(0.0),
        };
        assert!((run(&args).unwrap().price - 575.0).abs() < 1e-9);
    }

    #[test]
    fn test_requires_curve_or_yield() {
        let args = PriceArgs {
            bond: b3_args(),
            curve: CurvePointArgs {
                times: vec![],
                rates: vec![],
            },
            ytm: None,
        };
        assert!(run(&args).is_err());
    }
}
