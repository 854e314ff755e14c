//! Configuration layer for retrieve-ip.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - TOML configuration file parsing ([`TomlConfig`])
//! - Validated configuration ([`ValidatedConfig`])
//! - Configuration file generation ([`write_default_config`])
//! - Default values ([`defaults`])
//!
//! # Priority
//!
//! Configuration values are resolved with the following priority (highest to lowest):
//!
//! 1. **Explicit CLI arguments** - Values explicitly passed via command line
//! 2. **TOML config file** - `--config`, or the platform config file if it exists
//! 3. **Built-in defaults** - Hardcoded default values
//!
//! Interface names given with `--interface` **replace** the TOML `interfaces`
//! list entirely (not merged).
//!
//! # Boolean Flag Semantics
//!
//! `--include-local` uses OR semantics: if set `true` in either CLI or TOML,
//! the result is `true`. The flag only enables, it cannot disable a TOML `true`.

mod cli;
pub mod defaults;
mod error;
mod toml;
mod validated;


pub use cli::{Cli, Command, FamilyArg, OutputFormat};
pub use error::ConfigError;
pub use toml::{OutputSection, QuerySection, TomlConfig, default_config_template};
pub use validated::{ValidatedConfig, write_default_config};
