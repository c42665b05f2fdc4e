//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::commands::{CurveArgs, PriceArgs, YtmArgs};

/// Yieldline - bond cash flows, yield curves and yield-to-maturity
#[derive(Parser)]
#[command(name = "yieldline")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Solver configuration file (TOML, `[solver]` table)
    #[arg(short, long, global = true, env = "YIELDLINE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Run the reference scenario: two curves and a coupon bond
    Demo,

    /// Build and display a yield curve
    Curve(CurveArgs),

    /// Price a bond from a curve or a yield
    Price(PriceArgs),

    /// Yield to maturity from a price
    Ytm(YtmArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text and tables
    #[default]
    Table,
    /// JSON format
    Json,
}
