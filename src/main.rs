//! retrieve-ip: local interface address query
//!
//! Entry point for the retrieve-ip application.

use retrieve_ip::config::{Cli, Command, ValidatedConfig, write_default_config};
use std::process::ExitCode;

mod app;

use app::{exit_code, print_addresses, print_config_hint, setup_tracing};

/// Main entry point.
///
/// Excluded from coverage as it's the thin wrapper around testable components.
#[cfg(not(tarpaulin_include))]
fn main() -> ExitCode {
    let cli = Cli::parse_args();

    // Handle init subcommand
    if let Some(Command::Init { output }) = &cli.command {
        return handle_init(output);
    }

    // Load and validate configuration
    let config = match ValidatedConfig::load(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            print_config_hint(&e);
            return exit_code::CONFIG_ERROR;
        }
    };

    // Setup logging and run
    setup_tracing(config.verbose);
    tracing::debug!("{config}");

    run_query(&config)
}

/// Handles the `init` subcommand.
fn handle_init(output: &std::path::Path) -> ExitCode {
    match write_default_config(output) {
        Ok(()) => {
            println!("Configuration template written to: {}", output.display());
            exit_code::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            exit_code::CONFIG_ERROR
        }
    }
}

/// Reads the host's interfaces and prints the matching addresses.
#[cfg(not(tarpaulin_include))]
fn run_query(config: &ValidatedConfig) -> ExitCode {
    let addresses = match retrieve_ip::query(&config.criteria) {
        Ok(addresses) => addresses,
        Err(e) => {
            tracing::error!("Failed to read network interfaces: {e}");
            return exit_code::runtime_error();
        }
    };

    match print_addresses(&addresses, config.format) {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            tracing::error!("Failed to write output: {e}");
            exit_code::runtime_error()
        }
    }
}
