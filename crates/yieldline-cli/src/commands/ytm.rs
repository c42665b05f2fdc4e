//! Yield-to-maturity command implementation.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use yieldline_bonds::pricing::YieldResult;
use yieldline_bonds::Bond;

use crate::cli::OutputFormat;
use crate::commands::{validate_price, BondArgs};
use crate::config::CliConfig;
use crate::output::{print_json, print_table, KeyValue};

/// Arguments for the ytm command.
#[derive(Args, Debug)]
pub struct YtmArgs {
    #[command(flatten)]
    pub bond: BondArgs,

    /// Market price
    #[arg(short, long)]
    pub price: f64,
}

/// Ytm command output.
#[derive(Debug, Serialize)]
pub struct YtmOutput {
    pub bond: Bond,
    pub price: f64,
    #[serde(flatten)]
    pub result: YieldResult,
}

/// Solves for the yield with the configured solver.
pub fn run(args: &YtmArgs, config: &CliConfig) -> Result<YtmOutput> {
    let price = validate_price(args.price)?;
    let bond = args.bond.build(price)?;
    let result = config.solver().solve(&bond, price)?;

    Ok(YtmOutput {
        bond,
        price,
        result,
    })
}

/// Execute the ytm command.
pub fn execute(args: YtmArgs, config: &CliConfig, format: OutputFormat) -> Result<()> {
    let output = run(&args, config)?;

    match format {
        OutputFormat::Table => {
            let rows = vec![
                KeyValue::new("Bond", output.bond.to_string()),
                KeyValue::from_f64("Price", output.price, 2),
                KeyValue::from_percent("Yield", output.result.ytm),
                KeyValue::new("Method", output.result.method.to_string()),
                KeyValue::new("Compounding", output.result.method.compounding().to_string()),
                KeyValue::new("Iterations", output.result.iterations.to_string()),
                KeyValue::from_f64("Residual", output.result.residual, 6),
            ];
            print_table(&rows);
        }
        OutputFormat::Json => print_json(&output)?,
    }

    Ok(())
}
