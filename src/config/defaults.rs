//! Default values for configuration options.
//!
//! Centralized constants to avoid magic numbers scattered across the codebase.

use std::path::PathBuf;

/// Default number of addresses to return.
pub const COUNT: i64 = 1;

/// Application directory name under the platform config directory.
pub const APP_DIR: &str = "retrieve-ip";

/// Configuration file name inside [`APP_DIR`].
pub const CONFIG_FILE: &str = "config.toml";

/// Default output path for the `init` subcommand.
pub const INIT_OUTPUT: &str = "retrieve-ip.toml";

/// Platform location of the implicit configuration file.
///
/// Returns `None` when the platform has no config directory.
#[must_use]
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
}
