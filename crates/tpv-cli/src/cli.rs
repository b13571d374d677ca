//! CLI argument definitions for the table preview tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "tpv",
    version,
    about = "Table preview - print a compact preview of tabular data",
    long_about = "Print a compact preview of tabular data.\n\n\
                  Header labels are truncated to fit the available width and\n\
                  whole-valued numbers such as 60.0 are shown as integers."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
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

    /// Include timestamps in pretty and compact log output.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Settings file (TOML). Falls back to the TPV_CONFIG environment variable.
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Load a CSV or JSON file and print its preview.
    Preview(PreviewArgs),

    /// Print the header character budget for a column count.
    Budget(BudgetArgs),
}

#[derive(Parser)]
pub struct PreviewArgs {
    /// Path to the CSV or JSON input file.
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Available header width in pixels (default: settings, then 600).
    #[arg(
        long = "max-width",
        value_name = "PIXELS",
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub max_width: Option<u32>,

    /// Input format.
    #[arg(long = "format", value_enum, default_value = "auto")]
    pub format: InputFormatArg,

    /// Output format.
    #[arg(long = "output", value_enum, default_value = "table")]
    pub output: OutputFormatArg,
}

#[derive(Parser)]
pub struct BudgetArgs {
    /// Number of columns in the table.
    #[arg(long = "columns", value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    pub columns: u32,

    /// Available header width in pixels (default: settings, then 600).
    #[arg(
        long = "max-width",
        value_name = "PIXELS",
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub max_width: Option<u32>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum InputFormatArg {
    Auto,
    Csv,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Json,
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
