//! Entry point for the `promptree` CLI.
//!
//! Parses arguments, sets up logging, loads configuration, dispatches to the
//! command handler, and maps errors to exit codes.

use promptree::cli::Cli;
use promptree::config::Config;
use promptree::{commands, exit_codes};
use std::path::Path;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    init_logging(cli.verbose);

    let result = Config::discover(cli.config.as_deref(), Path::new("."))
        .and_then(|config| commands::dispatch(&config, cli.command));

    match result {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}

/// Log to stderr so rendered output on stdout stays clean.
///
/// `RUST_LOG` wins over `-v`.
fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .init();
}
