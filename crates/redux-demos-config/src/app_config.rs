//! Application configuration
//!
//! Configuration loaded from `.redux-demos.toml`.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Application configuration loaded from `.redux-demos.toml`
#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Seed value of the counter store
    #[serde(default)]
    pub initial_counter: i64,

    /// Print each action's type before the rendered output
    #[serde(default)]
    pub echo_actions: bool,

    /// Todos added to the todo stores at startup
    #[serde(default)]
    pub initial_todos: Vec<String>,
}

impl AppConfig {
    /// Load config from the first config file found, or use defaults
    pub fn load() -> Self {
        if let Some(content) = crate::load_config_file() {
            match toml::from_str(&content) {
                Ok(config) => {
                    log::info!("Loaded app config from file");
                    return config;
                }
                Err(e) => {
                    log::warn!("Failed to parse config file: {}", e);
                }
            }
        }

        log::debug!("Using default app config");
        Self::default()
    }

    /// Load config from an explicit path
    ///
    /// Unlike [`AppConfig::load`], a missing or invalid file is an error.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        log::info!("Loaded app config from {}", path.display());
        Ok(config)
    }
}
