//! Configuration loading.
//!
//! `config.toml` is optional; a missing file yields the built-in defaults.
//! A present-but-invalid file surfaces a `Config` error rather than being
//! silently ignored.

use std::fs;
use std::path::Path;

use tracing::debug;

use mnemo_core::Result;
use mnemo_core::config::AppConfig;

use crate::paths::MnemoPaths;

/// Loads the configuration from the default location
/// (`<config_dir>/mnemo/config.toml`).
pub fn load_default() -> Result<AppConfig> {
    load_from(&MnemoPaths::config_file()?)
}

/// Loads the configuration from a specific path.
///
/// # Errors
///
/// Returns `Config` when the file exists but cannot be read or parsed.
pub fn load_from(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        debug!(path = %path.display(), "config file absent, using defaults");
        return Ok(AppConfig::default());
    }

    let content = fs::read_to_string(path)
        .map_err(|e| mnemo_core::MnemoError::config(format!("unreadable config file: {e}")))?;
    let config: AppConfig = toml::from_str(&content)?;

    debug!(path = %path.display(), model = %config.model, "loaded configuration");
    Ok(config)
}
