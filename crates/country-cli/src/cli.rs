//! CLI argument definitions for the country resolver.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use country_cli::assignment::{Assignment, parse_assignment};

#[derive(Parser)]
#[command(
    name = "countries",
    version,
    about = "Resolve free-form country tokens to ISO 3166-1 entities",
    long_about = "Resolve codes, names and numbers to ISO 3166-1 countries.\n\n\
                  Tokens are matched exactly, then case-insensitively, then by\n\
                  unique substring of a known identifier."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -vvv for trace, -q for errors only).
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

    /// Country CSV to load instead of the embedded table (also read from COUNTRY_DATA).
    #[arg(long = "data", value_name = "PATH", global = true)]
    pub data: Option<PathBuf>,

    /// Only accept exact and case-insensitive matches; never guess.
    #[arg(long = "strict", global = true)]
    pub strict: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Resolve one or more tokens.
    Resolve(ResolveArgs),

    /// Show every property of one country.
    Show(ShowArgs),

    /// List countries, optionally filtered by a property value.
    List(ListArgs),

    /// Write the whole table as CSV or JSON.
    Export(ExportArgs),

    /// List the declared properties.
    Properties,
}

#[derive(Parser)]
pub struct ResolveArgs {
    /// Codes, names or numeric codes to resolve.
    #[arg(value_name = "TOKEN", required = true)]
    pub tokens: Vec<String>,

    /// Map a token to the country another token resolves to (e.g. korea=KOR).
    #[arg(long = "alias", value_name = "TOKEN=CODE", value_parser = parse_assignment)]
    pub aliases: Vec<Assignment>,

    /// Reject a token outright.
    #[arg(long = "blacklist", value_name = "TOKEN")]
    pub blacklist: Vec<String>,
}

#[derive(Parser)]
pub struct ShowArgs {
    /// Code, name or numeric code of the country.
    #[arg(value_name = "TOKEN")]
    pub token: String,
}

#[derive(Parser)]
pub struct ListArgs {
    /// Keep only countries whose property equals the value (e.g. continent=EU).
    #[arg(long = "where", value_name = "PROPERTY=VALUE", value_parser = parse_assignment)]
    pub filter: Option<Assignment>,
}

#[derive(Parser)]
pub struct ExportArgs {
    /// Output format.
    #[arg(long = "format", value_enum, default_value = "csv")]
    pub format: ExportFormatArg,

    /// Output file (default: stdout).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ExportFormatArg {
    Csv,
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
