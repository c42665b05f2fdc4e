//! Curve command implementation.
//!
//! Builds a yield curve from points, prints it and optionally queries it.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use yieldline_curves::{CurvePoint, YieldCurve};

use crate::cli::OutputFormat;
use crate::commands::CurvePointArgs;
use crate::output::{print_curve, print_header, print_json, print_table};

/// Arguments for the curve command.
#[derive(Args, Debug)]
pub struct CurveArgs {
    #[command(flatten)]
    pub points: CurvePointArgs,

    /// Times to query (comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    pub at: Vec<f64>,
}

/// Rate and discount factor at one query time.
#[derive(Debug, Serialize, Tabled)]
pub struct CurveQuery {
    #[tabled(rename = "Time")]
    pub time: f64,
    #[tabled(rename = "Rate", display_with = "display_percent")]
    pub rate: f64,
    #[tabled(rename = "Discount Factor", display_with = "display_df")]
    pub discount_factor: f64,
}

fn display_percent(value: &f64) -> String {
    crate::output::format_percent(*value, 4)
}

fn display_df(value: &f64) -> String {
    format!("{:.6}", value)
}

#[derive(Serialize)]
struct CurveOutput<'a> {
    points: &'a [CurvePoint],
    queries: Vec<CurveQuery>,
}

/// Queries `curve` at each time.
pub fn query(curve: &YieldCurve, times: &[f64]) -> Vec<CurveQuery> {
    times
        .iter()
        .map(|&time| CurveQuery {
            time,
            rate: curve.interest_rate(time),
            discount_factor: curve.discount_factor(time),
        })
        .collect()
}

/// Execute the curve command.
pub fn execute(args: CurveArgs, format: OutputFormat) -> Result<()> {
    let curve = args.points.build()?;
    let queries = query(&curve, &args.at);

    match format {
        OutputFormat::Table => {
            print_curve(&curve);
            if !queries.is_empty() {
                print_header("Queries");
                print_table(&queries);
            }
        }
        OutputFormat::Json => print_json(&CurveOutput {
            points: curve.points(),
            queries,
        })?,
    }

    Ok(())
}
