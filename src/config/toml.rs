//! TOML configuration file parsing.
//!
//! Defines the structure of the configuration file with serde.

use std::path::Path;

use serde::Deserialize;

use super::ConfigError;

/// Root configuration structure from TOML file.
///
/// All fields are optional to allow partial configuration
/// that can be merged with CLI arguments.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// Selection criteria section
    #[serde(default)]
    pub query: QuerySection,

    /// Output configuration section
    #[serde(default)]
    pub output: OutputSection,
}

/// Selection criteria section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QuerySection {
    /// Address family: "all", "ipv4", or "ipv6"
    pub family: Option<String>,

    /// Interface names to select (empty = all)
    #[serde(default)]
    pub interfaces: Vec<String>,

    /// Include loopback/host-local addresses
    #[serde(default)]
    pub include_local: bool,

    /// Maximum number of addresses (0 or negative = every match)
    pub count: Option<i64>,
}

/// Output configuration section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputSection {
    /// Output format: "text" or "json"
    pub format: Option<String>,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }
}

/// Generates a default configuration file with comments.
#[must_use]
pub fn default_config_template() -> String {
    r#"# retrieve-ip Configuration File

[query]
# Address family to return (default: "all")
# Accepted values: "all", "ipv4"/"v4"/"4", "ipv6"/"v6"/"6"
# family = "ipv4"

# Interface names to select (empty = all interfaces)
# Note: CLI --interface values REPLACE these entirely (not merged)
# interfaces = ["eth0", "wlan0"]

# Include loopback/host-local addresses such as 127.0.0.1 and ::1
include_local = false

# Maximum number of addresses to return (default: 1)
# 0 or a negative number returns every match
count = 1

[output]
# Output format: "text" (one address per line) or "json" (array of strings)
# format = "text"
"#
    .to_string()
}
