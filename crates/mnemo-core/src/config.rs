//! Application configuration model.
//!
//! Loading from disk lives in the infrastructure crate; this module only
//! defines the serde shape and the defaults.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::conversation::TitlePolicy;
use crate::memory::DEFAULT_WINDOW_TURNS;

fn default_model() -> String {
    "llama3.2".to_string()
}

fn default_base_url() -> String {
    "http://localhost:11434".to_string()
}

fn default_system_instruction() -> String {
    "You are Mnemo, a personal AI assistant. You remember previous chats \
     and stay friendly and concise."
        .to_string()
}

fn default_memory_window() -> usize {
    DEFAULT_WINDOW_TURNS
}

/// Application configuration, persisted as TOML in the config directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Model name passed to the inference collaborator.
    #[serde(default = "default_model")]
    pub model: String,
    /// Base URL of the Ollama-compatible inference endpoint.
    #[serde(default = "default_base_url")]
    pub ollama_base_url: String,
    /// Persona instruction prefixed to every prompt.
    #[serde(default = "default_system_instruction")]
    pub system_instruction: String,
    /// Maximum number of past turns replayed into each prompt.
    #[serde(default = "default_memory_window")]
    pub memory_window: usize,
    /// Title derivation policy for new conversations.
    #[serde(default)]
    pub title: TitlePolicy,
    /// Override for the data directory holding the store and training log.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            ollama_base_url: default_base_url(),
            system_instruction: default_system_instruction(),
            memory_window: default_memory_window(),
            title: TitlePolicy::default(),
            data_dir: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_missing_fields() {
        let config: AppConfig = toml::from_str("model = \"llama3\"").unwrap();
        assert_eq!(config.model, "llama3");
        assert_eq!(config.memory_window, 50);
        assert_eq!(config.title.max_words, 6);
        assert_eq!(config.title.max_chars, 40);
        assert!(config.data_dir.is_none());
    }

    #[test]
    fn empty_document_is_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
    }
}
