//! Command line argument parsing for the priznak CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::rules::RuleSetVersion;

/// Priznak - phrase classification for candidate status detection
#[derive(Parser, Debug, Clone)]
#[command(name = "priznak")]
#[command(about = "Classify candidate phrases for job-search intent and readiness to start")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct PriznakArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl PriznakArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Classify texts under one rule-set version
    Classify(ClassifyArgs),

    /// Classify texts under both built-in versions side by side
    Compare(CompareArgs),

    /// Show the rules of a rule-set version
    Rules(RulesArgs),
}

/// Arguments for classifying texts
#[derive(Parser, Debug, Clone)]
pub struct ClassifyArgs {
    /// Input file with one text per line ("-" or absent reads stdin)
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Rule-set version to apply
    #[arg(short, long = "rules", default_value = "baseline")]
    pub rules: RuleSetArg,

    /// Skip blank lines instead of classifying them
    #[arg(long)]
    pub skip_empty: bool,

    /// Collapse whitespace runs and trim each line before matching
    #[arg(long)]
    pub normalize: bool,
}

/// Arguments for comparing rule-set versions
#[derive(Parser, Debug, Clone)]
pub struct CompareArgs {
    /// Input file with one text per line ("-" or absent reads stdin)
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Skip blank lines instead of classifying them
    #[arg(long)]
    pub skip_empty: bool,

    /// Collapse whitespace runs and trim each line before matching
    #[arg(long)]
    pub normalize: bool,
}

/// Arguments for showing rules
#[derive(Parser, Debug, Clone)]
pub struct RulesArgs {
    /// Rule-set version to show
    #[arg(short, long = "rules", default_value = "baseline")]
    pub rules: RuleSetArg,
}

/// Rule-set version selector for CLI
#[derive(ValueEnum, Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleSetArg {
    /// First revision of the phrase rules
    Baseline,
    /// Widened revision
    Improved,
}

impl From<RuleSetArg> for RuleSetVersion {
    fn from(arg: RuleSetArg) -> Self {
        match arg {
            RuleSetArg::Baseline => RuleSetVersion::Baseline,
            RuleSetArg::Improved => RuleSetVersion::Improved,
        }
    }
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
    /// CSV output
    Csv,
}
