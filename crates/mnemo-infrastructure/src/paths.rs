//! Unified path management for mnemo's on-disk files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/mnemo/             # Config directory
//! └── config.toml              # Application configuration
//!
//! ~/.local/share/mnemo/        # Data directory
//! ├── conversations.json       # Structured multi-conversation store
//! └── train.jsonl              # Append-only training-example log
//! ```

use std::path::PathBuf;

use mnemo_core::{MnemoError, Result};

/// File name of the structured conversation store.
pub const CONVERSATIONS_FILE: &str = "conversations.json";

/// File name of the append-only training log.
pub const TRAIN_LOG_FILE: &str = "train.jsonl";

/// File name of the application configuration.
pub const CONFIG_FILE: &str = "config.toml";

/// Unified path resolution for mnemo.
pub struct MnemoPaths;

impl MnemoPaths {
    /// Returns the mnemo configuration directory
    /// (e.g. `~/.config/mnemo/`).
    ///
    /// # Errors
    ///
    /// Returns a `Config` error if the platform config directory cannot be
    /// determined.
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("mnemo"))
            .ok_or_else(|| MnemoError::config("cannot determine config directory"))
    }

    /// Returns the mnemo data directory
    /// (e.g. `~/.local/share/mnemo/`).
    ///
    /// # Errors
    ///
    /// Returns a `Config` error if the platform data directory cannot be
    /// determined.
    pub fn data_dir() -> Result<PathBuf> {
        dirs::data_dir()
            .map(|dir| dir.join("mnemo"))
            .ok_or_else(|| MnemoError::config("cannot determine data directory"))
    }

    /// Returns the path of the application configuration file.
    pub fn config_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    /// Returns the path of the structured conversation store within the
    /// given data directory.
    pub fn conversations_file(data_dir: &std::path::Path) -> PathBuf {
        data_dir.join(CONVERSATIONS_FILE)
    }

    /// Returns the path of the training log within the given data
    /// directory.
    pub fn train_log_file(data_dir: &std::path::Path) -> PathBuf {
        data_dir.join(TRAIN_LOG_FILE)
    }
}
