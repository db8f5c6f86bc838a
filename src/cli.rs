use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Orrery ephemeris exploration engine.
#[derive(Parser)]
#[command(
    name = "orrery",
    version,
    about = "Date-indexed ephemeris reshaping and aspect detection"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Reconcile a start/end date pair into a consistent span.
    Span(SpanArgs),
    /// Pivot a provider response and report per-day aspects.
    Report(ReportArgs),
}

/// Arguments for the `span` subcommand.
#[derive(clap::Args)]
pub struct SpanArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "orrery.toml")]
    pub config: PathBuf,

    /// Span start date (YYYY-MM-DD).
    #[arg(long)]
    pub start: String,

    /// Span end date (YYYY-MM-DD).
    #[arg(long)]
    pub end: String,
}

/// Arguments for the `report` subcommand.
#[derive(clap::Args)]
pub struct ReportArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "orrery.toml")]
    pub config: PathBuf,

    /// Path to a provider-response JSON file.
    #[arg(short, long)]
    pub input: PathBuf,

    /// Report a single model instead of all configured models.
    #[arg(long)]
    pub model: Option<String>,

    /// Report a single Julian day instead of every day present.
    #[arg(long)]
    pub day: Option<i64>,

    /// Planet ids to include (comma-separated); overrides config.
    #[arg(long, value_delimiter = ',')]
    pub planets: Option<Vec<u32>>,
}
