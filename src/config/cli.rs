//! CLI argument parsing using clap.
//!
//! Defines the command-line interface with all options and subcommands.

use std::fmt;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::network::AddressFamily;
use crate::network::filter::Selector;

/// retrieve-ip: print local interface addresses
///
/// Reads the host's network interfaces and prints the addresses matching
/// the requested family, interface names, and locality.
#[derive(Debug, Parser)]
#[command(name = "retrieve-ip")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Address family to return
    #[arg(long, short, value_enum)]
    pub family: Option<FamilyArg>,

    /// Interface name to select, or "all" (can be specified multiple times)
    #[arg(long = "interface", short, value_name = "NAME")]
    pub interfaces: Vec<String>,

    /// Include loopback/host-local addresses
    #[arg(long = "include-local", short = 'l')]
    pub include_local: bool,

    /// Maximum number of addresses to print; 0 or negative prints every match
    #[arg(long, short = 'n', allow_negative_numbers = true)]
    pub count: Option<i64>,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Path to configuration file
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, short)]
    pub verbose: bool,
}

/// Subcommands for retrieve-ip
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = super::defaults::INIT_OUTPUT)]
        output: PathBuf,
    },
}

/// Address family argument for CLI parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FamilyArg {
    /// Both IPv4 and IPv6 addresses
    #[value(name = "all")]
    All,
    /// IPv4 addresses only
    #[value(name = "ipv4", alias = "IPv4")]
    V4,
    /// IPv6 addresses only
    #[value(name = "ipv6", alias = "IPv6")]
    V6,
}

impl From<FamilyArg> for Selector<AddressFamily> {
    fn from(arg: FamilyArg) -> Self {
        match arg {
            FamilyArg::All => Self::All,
            FamilyArg::V4 => Self::Exact(AddressFamily::V4),
            FamilyArg::V6 => Self::Exact(AddressFamily::V6),
        }
    }
}

/// How matched addresses are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One address per line
    #[default]
    Text,
    /// A JSON array of strings
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }

    /// Returns true if this is the init command.
    #[must_use]
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Some(Command::Init { .. }))
    }
}
