//! Application startup and utilities.
//!
//! This module contains exit codes, tracing setup, output rendering,
//! and error hints that support the main entry point.

use std::io::{self, Write};

use retrieve_ip::config::{ConfigError, OutputFormat};
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Application exit codes.
pub mod exit_code {
    use std::process::ExitCode;

    /// Success (exit code 0).
    pub const SUCCESS: ExitCode = ExitCode::SUCCESS;

    /// Configuration error (exit code 1) - invalid args, unreadable config file, etc.
    pub const CONFIG_ERROR: ExitCode = ExitCode::FAILURE;

    /// Runtime error (exit code 2) - interface enumeration or output failure.
    ///
    /// Note: This is a function rather than a constant because `ExitCode::from()` is not `const fn`.
    pub fn runtime_error() -> ExitCode {
        ExitCode::from(2)
    }
}

/// Prints helpful hints for common configuration errors.
pub fn print_config_hint(error: &ConfigError) {
    match error {
        ConfigError::FileRead { .. } | ConfigError::TomlParse(_) => {
            eprintln!("\nRun 'retrieve-ip init' to generate a configuration template.");
        }
        ConfigError::InvalidInterface { .. } => {
            eprintln!("\nOmit --interface or pass 'all' to select every interface.");
        }
        _ => {}
    }
}

/// Sets up the tracing subscriber for logging.
///
/// Logs go to stderr so stdout carries only addresses.
pub fn setup_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

/// Renders addresses in the requested format.
///
/// Text output is one address per line; JSON output is an array of strings.
pub fn render_addresses(addresses: &[String], format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => addresses.iter().fold(String::new(), |mut out, addr| {
            out.push_str(addr);
            out.push('\n');
            out
        }),
        OutputFormat::Json => {
            // A slice of strings always serializes
            let mut json = serde_json::to_string(addresses).unwrap_or_else(|_| "[]".to_string());
            json.push('\n');
            json
        }
    }
}

/// Writes rendered addresses to stdout.
pub fn print_addresses(addresses: &[String], format: OutputFormat) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(render_addresses(addresses, format).as_bytes())?;
    stdout.flush()
}
