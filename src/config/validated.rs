//! Validated configuration after merging CLI and TOML sources.
//!
//! This module contains the final, validated configuration that is used
//! by the application. All validation is performed during construction.

use std::fmt;
use std::path::Path;

use crate::network::AddressFamily;
use crate::network::filter::{ALL, SelectionCriteria, Selector};

use super::cli::{Cli, OutputFormat};
use super::defaults;
use super::error::ConfigError;
use super::toml::TomlConfig;

/// Fully validated configuration ready for use by the application.
///
/// # Construction
///
/// Use [`ValidatedConfig::from_raw`] to create from CLI args and optional TOML config.
/// The function validates all inputs and returns errors for invalid configurations.
#[derive(Debug, Clone)]
pub struct ValidatedConfig {
    /// Selection criteria for the query
    pub criteria: SelectionCriteria,

    /// How matched addresses are printed
    pub format: OutputFormat,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Config {{ {}, format: {} }}", self.criteria, self.format)
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments and optional TOML config.
    ///
    /// CLI arguments take precedence over TOML config values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The TOML family or format value is unknown
    /// - An interface name is empty
    pub fn from_raw(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Self, ConfigError> {
        let family = Self::resolve_family(cli, toml)?;
        let interface = Self::resolve_interface(cli, toml)?;

        // Flags only enable
        let include_local = cli.include_local || toml.is_some_and(|t| t.query.include_local);

        // Priority: CLI explicit > TOML > default
        let count = cli
            .count
            .or_else(|| toml.and_then(|t| t.query.count))
            .unwrap_or(defaults::COUNT);

        let criteria = SelectionCriteria::new()
            .with_family_selector(family)
            .with_interface_selector(interface)
            .with_include_local(include_local)
            .with_max_count(count);

        Ok(Self {
            criteria,
            format: Self::resolve_format(cli, toml)?,
            verbose: cli.verbose,
        })
    }

    /// Loads and merges configuration from CLI and optional config file.
    ///
    /// If `cli.config` is set, loads the TOML file from that path. Otherwise
    /// the platform config file is used when it exists.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file cannot be read or parsed
    /// - The merged configuration is invalid
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let path = cli
            .config
            .clone()
            .or_else(|| defaults::config_path().filter(|p| p.is_file()));

        let toml = match path {
            Some(path) => {
                tracing::debug!("Loading config file {}", path.display());
                Some(TomlConfig::load(&path)?)
            }
            None => None,
        };

        Self::from_raw(cli, toml.as_ref())
    }

    fn resolve_family(
        cli: &Cli,
        toml: Option<&TomlConfig>,
    ) -> Result<Selector<AddressFamily>, ConfigError> {
        // CLI takes precedence
        if let Some(family) = cli.family {
            return Ok(family.into());
        }

        // Fall back to TOML
        match toml.and_then(|t| t.query.family.as_deref()) {
            Some(value) => parse_family(value),
            None => Ok(Selector::All),
        }
    }

    fn resolve_interface(
        cli: &Cli,
        toml: Option<&TomlConfig>,
    ) -> Result<Selector<String>, ConfigError> {
        // CLI names replace TOML names entirely
        let names = if cli.interfaces.is_empty() {
            toml.map_or(&[][..], |t| t.query.interfaces.as_slice())
        } else {
            cli.interfaces.as_slice()
        };

        interface_selector(names)
    }

    fn resolve_format(cli: &Cli, toml: Option<&TomlConfig>) -> Result<OutputFormat, ConfigError> {
        if let Some(format) = cli.format {
            return Ok(format);
        }

        match toml.and_then(|t| t.output.format.as_deref()) {
            Some(value) => parse_format(value),
            None => Ok(OutputFormat::default()),
        }
    }
}

/// Writes the default configuration template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let template = super::toml::default_config_template();
    std::fs::write(path, template).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

// Helper functions

fn parse_family(s: &str) -> Result<Selector<AddressFamily>, ConfigError> {
    match s.to_lowercase().as_str() {
        ALL | "both" => Ok(Selector::All),
        other => other
            .parse()
            .map(Selector::Exact)
            .map_err(|_| ConfigError::InvalidFamily {
                value: s.to_string(),
            }),
    }
}

fn parse_format(s: &str) -> Result<OutputFormat, ConfigError> {
    match s.to_lowercase().as_str() {
        "text" => Ok(OutputFormat::Text),
        "json" => Ok(OutputFormat::Json),
        _ => Err(ConfigError::InvalidFormat {
            value: s.to_string(),
        }),
    }
}

/// Builds the name selector: no names or any `"all"` selects every interface,
/// one name is exact, several are a membership list.
fn interface_selector(names: &[String]) -> Result<Selector<String>, ConfigError> {
    if let Some(name) = names.iter().find(|n| n.trim().is_empty()) {
        return Err(ConfigError::InvalidInterface {
            value: name.clone(),
            reason: "must not be empty",
        });
    }

    if names.is_empty() || names.iter().any(|n| n == ALL) {
        return Ok(Selector::All);
    }

    Ok(match names {
        [single] => Selector::Exact(single.clone()),
        _ => Selector::AnyOf(names.to_vec()),
    })
}
