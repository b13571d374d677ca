//! Table preview CLI.

use clap::{ColorChoice, Parser};
use std::io::{self, IsTerminal};
use tpv_cli::logging::{LogConfig, LogFormat, init_logging};
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::commands::{load_cli_settings, run_budget, run_preview};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let result =
        load_cli_settings(cli.config.as_deref()).and_then(|settings| match &cli.command {
            Command::Preview(args) => run_preview(args, &settings),
            Command::Budget(args) => run_budget(args, &settings),
        });
    let exit_code = match result {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.with_timestamps = cli.log_timestamps;
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_timestamps_flag() {
        let cli = Cli::try_parse_from(["tpv", "--log-timestamps", "budget", "--columns", "7"])
            .expect("parse args");
        assert!(log_config_from_cli(&cli).with_timestamps);

        let cli = Cli::try_parse_from(["tpv", "budget", "--columns", "7"]).expect("parse args");
        assert!(!log_config_from_cli(&cli).with_timestamps);
    }

    #[test]
    fn test_zero_width_rejected_by_parser() {
        assert!(Cli::try_parse_from(["tpv", "preview", "data.csv", "--max-width", "0"]).is_err());
    }
}
