//! Country resolver CLI.

use std::io::{self, IsTerminal};

use anyhow::Context;
use clap::{ColorChoice, Parser};
use country_cli::logging::{LogConfig, LogFormat, init_logging};
use country_core::{Countries, CountriesConfig, MatchingMode};
use country_standards::DataSource;
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::commands::{run_export, run_list, run_properties, run_resolve, run_show};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run(&cli) {
        Ok(true) => 0,
        Ok(false) => 1,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

/// Load the catalog and dispatch; `Ok(false)` means some token failed.
fn run(cli: &Cli) -> anyhow::Result<bool> {
    let countries = Countries::load(&catalog_config(cli)).context("load country table")?;
    match &cli.command {
        Command::Resolve(args) => run_resolve(&countries, args),
        Command::Show(args) => run_show(&countries, args).map(|()| true),
        Command::List(args) => run_list(&countries, args).map(|()| true),
        Command::Export(args) => run_export(&countries, args).map(|()| true),
        Command::Properties => run_properties(&countries).map(|()| true),
    }
}

/// `--data` wins over `COUNTRY_DATA`; `--strict` selects strict matching.
fn catalog_config(cli: &Cli) -> CountriesConfig {
    let mut config = CountriesConfig::from_env();
    if let Some(path) = &cli.data {
        config = config.with_source(DataSource::File(path.clone()));
    }
    if cli.strict {
        config = config.with_matching_mode(MatchingMode::Strict);
    }
    config
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let level_filter = match cli.log_level {
        Some(LogLevelArg::Error) => LevelFilter::ERROR,
        Some(LogLevelArg::Warn) => LevelFilter::WARN,
        Some(LogLevelArg::Info) => LevelFilter::INFO,
        Some(LogLevelArg::Debug) => LevelFilter::DEBUG,
        Some(LogLevelArg::Trace) => LevelFilter::TRACE,
        None => cli.verbosity.tracing_level_filter(),
    };
    let format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    let ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    LogConfig::default()
        .with_level_filter(level_filter)
        .with_env_filter(!(cli.verbosity.is_present() || cli.log_level.is_some()))
        .with_format(format)
        .with_log_file(cli.log_file.clone())
        .with_ansi(ansi)
}
