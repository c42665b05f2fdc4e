//! Yieldline CLI - Command-line interface for bond and yield curve analytics.
//!
//! # Usage
//!
//! ```bash
//! # Reference scenario
//! yieldline demo
//!
//! # Build a curve
//! yieldline curve --times 1,2,3 --rates 0.02,0.023,0.03 --at 1.5
//!
//! # Price a coupon bond on a curve
//! yieldline price --face 500 --coupon 0.05 --maturity 3 --frequency semi-annual \
//!     --times 1,2,3 --rates 0.02,0.023,0.03
//!
//! # Yield from a price
//! yieldline ytm --face 1000 --maturity 1 --price 895 --zero
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod config;
mod error;
mod output;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let config = config::load(cli.config.as_deref())?;
    let format = cli.format;

    match cli.command {
        Commands::Demo => commands::demo::execute(&config, format)?,
        Commands::Curve(args) => commands::curve::execute(args, format)?,
        Commands::Price(args) => commands::price::execute(args, format)?,
        Commands::Ytm(args) => commands::ytm::execute(args, &config, format)?,
    }

    Ok(())
}

/// `RUST_LOG` wins when set; otherwise `--verbose` selects debug output.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
