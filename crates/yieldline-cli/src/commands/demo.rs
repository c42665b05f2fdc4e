//! Demo command implementation.
//!
//! Runs the reference scenario:
//!
//! 1. A curve from points (1y 2%, 2y 2.3%, 3y 3%).
//! 2. A curve from two zero-coupon bonds, queried at 0.75y.
//! 3. A 5% semi-annual 3y bond with face 500 priced on the first curve, and
//!    its yield from that price.
//!
//! Table output keeps the reference transcript's layout, including the
//! trailing space after each section number and after the price and yield
//! lines. Curve lines come from `YieldCurve`'s `Display` and carry no
//! trailing space.

use anyhow::Result;
use serde::Serialize;

use yieldline_bonds::curve_instruments::curve_from_bonds;
use yieldline_bonds::pricing::price_from_curve;
use yieldline_bonds::Bond;
use yieldline_core::Frequency;
use yieldline_curves::YieldCurve;

use crate::cli::OutputFormat;
use crate::config::CliConfig;
use crate::output::{format_percent, print_json};

/// Results of the reference scenario.
#[derive(Debug, Serialize)]
pub struct DemoOutput {
    pub curve_from_points: YieldCurve,
    pub curve_from_bonds: YieldCurve,
    pub bond_curve_rate_at_0_75: f64,
    pub bond: Bond,
    pub rate_at_0_5: f64,
    pub rate_at_1_5: f64,
    pub price: f64,
    pub ytm: f64,
}

/// Runs the scenario with the configured solver.
pub fn run(config: &CliConfig) -> Result<DemoOutput> {
    let yc1 = YieldCurve::from_points(&[1.0, 2.0, 3.0], &[0.02, 0.023, 0.03])?;

    let yc2 = curve_from_bonds(&[
        Bond::zero_coupon(100.0, 95.0, 0.5),
        Bond::zero_coupon(1000.0, 895.0, 1.0),
    ])?;

    let b3 = Bond::coupon_bearing(500.0, 0.05, 3.0, Frequency::SemiAnnual);
    let price = price_from_curve(&yc1, &b3);
    let ytm = config.solver().solve(&b3, price)?.ytm;

    Ok(DemoOutput {
        bond_curve_rate_at_0_75: yc2.interest_rate(0.75),
        rate_at_0_5: yc1.interest_rate(0.5),
        rate_at_1_5: yc1.interest_rate(1.5),
        curve_from_points: yc1,
        curve_from_bonds: yc2,
        bond: b3,
        price,
        ytm,
    })
}

/// Execute the demo command.
pub fn execute(config: &CliConfig, format: OutputFormat) -> Result<()> {
    let output = run(config)?;

    match format {
        OutputFormat::Table => print!("{}", render(&output)),
        OutputFormat::Json => print_json(&output)?,
    }

    Ok(())
}

/// Renders the scenario as text.
pub fn render(output: &DemoOutput) -> String {
    let mut text = String::new();

    text.push_str("1. \n");
    text.push_str(&output.curve_from_points.to_string());
    text.push('\n');

    text.push_str("2. \n");
    text.push_str(&output.curve_from_bonds.to_string());
    text.push_str(&format!(
        "The per-year interest rate for time 0.75 is: {}\n\n",
        format_percent(output.bond_curve_rate_at_0_75, 4)
    ));

    text.push_str("3. \n");
    text.push_str(&format!(
        "yc1's interest rate at year of 0.5 is {}\n",
        output.rate_at_0_5
    ));
    text.push_str(&format!(
        "yc1's interest rate at year of 1.5 is {}\n",
        output.rate_at_1_5
    ));
    text.push_str(&format!("The price is {:.2} \n", output.price));
    text.push_str(&format!(
        "The yield to maturity of this bond is {} \n",
        format_percent(output.ytm, 2)
    ));

    text
}
