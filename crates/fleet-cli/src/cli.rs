//! CLI argument definitions for the fleet operations toolkit.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "fleet-ops",
    version,
    about = "Fleet operations toolkit - link telemetry events to drivers",
    long_about = "Resolve free-text driver names on vehicle telemetry events\n\
                  against the driver roster, with fuzzy matching tolerant of\n\
                  nicknames, name-order differences, and typos."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Associate events from a CSV export with drivers from a roster CSV.
    Associate(AssociateArgs),

    /// Score the similarity of two driver names.
    Score(ScoreArgs),

    /// Report association coverage over an event export.
    Stats(StatsArgs),
}

#[derive(Parser)]
pub struct AssociateArgs {
    /// Vehicle event CSV export.
    #[arg(long = "events", value_name = "CSV")]
    pub events: PathBuf,

    /// Driver roster CSV.
    #[arg(long = "roster", value_name = "CSV")]
    pub roster: PathBuf,

    /// Minimum confidence for an automatic association.
    #[arg(long = "min-confidence", value_name = "SCORE", default_value_t = 0.7)]
    pub min_confidence: f64,

    /// Only accept exact same-system name matches.
    #[arg(long = "exact")]
    pub exact: bool,

    /// Overwrite associations already present on the events.
    ///
    /// By default an event that already carries a resolved driver keeps it,
    /// so re-running a batch never clobbers earlier associations.
    #[arg(long = "update-existing")]
    pub update_existing: bool,

    /// Create incident records for safety-relevant matched events.
    #[arg(long = "create-incidents")]
    pub create_incidents: bool,

    /// Events processed per chunk.
    #[arg(long = "batch-size", value_name = "N", default_value_t = 100)]
    pub batch_size: usize,

    /// Write the full batch report as JSON to this path.
    #[arg(long = "out", value_name = "PATH")]
    pub out: Option<PathBuf>,
}

#[derive(Parser)]
pub struct ScoreArgs {
    /// First name to compare.
    #[arg(value_name = "NAME_A")]
    pub name_a: String,

    /// Second name to compare.
    #[arg(value_name = "NAME_B")]
    pub name_b: String,

    /// Also list the matching variations generated for each name.
    #[arg(long = "variations")]
    pub variations: bool,
}

#[derive(Parser)]
pub struct StatsArgs {
    /// Vehicle event CSV export.
    #[arg(long = "events", value_name = "CSV")]
    pub events: PathBuf,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
