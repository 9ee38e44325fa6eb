//! CLI command definitions

use clap::{Parser, ValueEnum};
use council_domain::OutputFormat;
use std::path::PathBuf;

/// Output format for council verdicts
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// Every section: classification, rounds, fusion, landscape, audit
    Full,
    /// Only the verdict and its confidence
    Verdict,
    /// JSON envelope
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Full => OutputFormat::Full,
            FormatArg::Verdict => OutputFormat::Verdict,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

/// CLI arguments for sovereign-council
#[derive(Parser, Debug)]
#[command(name = "council")]
#[command(author, version, about = "Sovereign Council - four lineages deliberate under grid load")]
#[command(long_about = r#"
Sovereign Council sends a question to four advisory lineages (Alethea,
Sophia, Eirene, Kairos) and fuses their answers into one verdict.

How hard the council works depends on the urgency of the question and the
current grid load and price:
1. Classify: urgency class, efficiency score, rest state, round count
2. Deliberate: up to 3 rounds, each lineage sees the previous round
3. Fuse: status, confidence and a synthesized verdict
4. Stamp: probability landscape and an audit proof stamp

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./council.toml      Project-level config
3. ~/.config/sovereign-council/config.toml   Global config

Example:
  council "Should I rebalance my bond allocation?"
  council --domain wealth --region ERCOT "emergency: portfolio crashed"
  council --load 0.3 --price 0.1 -o json "hold or sell?"
"#)]
pub struct Cli {
    /// The question to put to the council
    pub query: Option<String>,

    /// Advisory domain (wealth, health, longevity, general)
    #[arg(short, long, value_name = "DOMAIN")]
    pub domain: Option<String>,

    /// Urgency override (override, critical, elevated, routine or red, yellow, green, blue)
    #[arg(short, long, value_name = "CLASS")]
    pub urgency: Option<String>,

    /// Grid load reading in [0, 1], overrides the region baseline
    #[arg(long, value_name = "LOAD")]
    pub load: Option<f64>,

    /// Grid price reading, overrides the region baseline
    #[arg(long, value_name = "PRICE")]
    pub price: Option<f64>,

    /// Grid region baseline (e.g. CAISO, PJM, ERCOT, US-MISO)
    #[arg(short, long, value_name = "REGION")]
    pub region: Option<String>,

    /// Decision option for the probability landscape (can be specified multiple times)
    #[arg(long = "option", value_name = "OPTION")]
    pub options: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<FormatArg>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Write diagnostic logs to a daily file in this directory
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    /// Append the round transcript (JSONL) to this file
    #[arg(long, value_name = "PATH")]
    pub transcript: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}
