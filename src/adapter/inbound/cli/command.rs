//! Command-line interface definitions.
//!
//! Defines the CLI structure for the surebet application using `clap`.
//! Subcommands evaluate market snapshots, scaffold market files, document
//! the built-in match types and manage configuration.

use clap::{Args, Parser, Subcommand};
use rust_decimal::Decimal;
use std::path::PathBuf;

use crate::core::domain::MatchType;
use crate::core::presentation::MAX_PRECISION;

/// Cross-bookmaker arbitrage (surebet) calculator
#[derive(Parser, Debug)]
#[command(name = "surebet")]
#[command(version)]
pub struct Cli {
    /// Color output mode [auto, always, never]
    #[arg(
        long,
        global = true,
        default_value = "auto",
        hide_possible_values = true
    )]
    pub color: ColorChoice,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to the configuration file [default: ~/.surebet/config.toml]
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Color output mode for terminal rendering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Top-level subcommands for the surebet CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find the best price per outcome and split a stake across bookmakers
    Evaluate(Box<EvaluateArgs>),

    /// Create market files
    #[command(subcommand)]
    Market(MarketCommand),

    /// List and explain built-in match types
    #[command(subcommand)]
    MatchTypes(MatchTypeCommand),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Arguments for the `evaluate` subcommand.
///
/// A market comes from a `.toml`/`.json` file, from `--bookmaker`
/// arguments, or both; arguments take precedence over file values.
#[derive(Args, Debug, Default)]
pub struct EvaluateArgs {
    /// Market file (.toml or .json)
    pub market: Option<PathBuf>,

    /// Built-in outcome set (win-lose, 1x2)
    #[arg(long, conflicts_with = "outcomes")]
    pub match_type: Option<MatchType>,

    /// Custom outcome label, repeat once per outcome
    #[arg(long = "outcome", value_name = "LABEL")]
    pub outcomes: Vec<String>,

    /// Bookmaker quote as NAME=ODDS1,ODDS2,...
    #[arg(short, long = "bookmaker", value_name = "NAME=ODDS")]
    pub bookmakers: Vec<String>,

    /// Total stake to distribute
    #[arg(long)]
    pub budget: Option<Decimal>,

    /// Stake the minimum required investment is quoted against
    #[arg(long)]
    pub reference_stake: Option<Decimal>,

    /// Decimal places in printed values
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..=i64::from(MAX_PRECISION)))]
    pub precision: Option<u32>,

    /// Show stakes rounded independently instead of summing to the budget
    #[arg(long)]
    pub no_reconcile: bool,
}

/// Subcommands for `surebet market`.
#[derive(Subcommand, Debug)]
pub enum MarketCommand {
    /// Write a market file template pre-filled with default odds.
    Init(MarketInitArgs),
}

/// Arguments for `market init`.
#[derive(Args, Debug)]
pub struct MarketInitArgs {
    /// Output path (.toml)
    pub path: PathBuf,

    /// Outcome set for the template [default: from configuration]
    #[arg(long)]
    pub match_type: Option<MatchType>,

    /// Number of bookmaker rows
    #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u32).range(1..=100))]
    pub bookmakers: u32,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

/// Subcommands for `surebet match-types`.
#[derive(Subcommand, Debug)]
pub enum MatchTypeCommand {
    /// List built-in match types.
    List,
    /// Show the outcomes and default odds of a match type.
    Explain {
        /// Name of the match type (e.g., "win-lose", "1x2").
        name: String,
    },
}

/// Subcommands for `surebet config`.
///
/// Provides configuration management utilities including generation,
/// display, and validation of configuration files.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Generate a new configuration file from template.
    Init(ConfigInitArgs),
    /// Display the effective configuration with defaults applied.
    Show,
    /// Validate a configuration file for correctness.
    Validate,
}

/// Arguments for `config init`.
#[derive(Args, Debug)]
pub struct ConfigInitArgs {
    /// Output path for the generated configuration file
    /// [default: ~/.surebet/config.toml]
    pub path: Option<PathBuf>,

    /// Overwrite existing configuration file
    #[arg(long)]
    pub force: bool,
}
