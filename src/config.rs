//! Configuration module for the adder CLI.
//!
//! This module provides a layered configuration system that supports:
//! - Default values
//! - TOML configuration file
//! - Environment variable overrides
//! - CLI argument overrides
//!
//! # Environment Variables
//!
//! Environment variables must be prefixed with `ADDER_` and use double
//! underscores to separate nested levels:
//! - `ADDER_OVERFLOW=saturate` sets `overflow`
//! - `ADDER_INITIAL=5` sets `initial`
//! - `ADDER_LOGGING__DEFAULT=debug` sets `logging.default`

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::accumulator::OverflowPolicy;
use crate::error::{AdderError, AdderResult};

/// Directory holding workspace settings.
pub const CONFIG_DIR: &str = ".adder";
/// Settings file name inside [`CONFIG_DIR`].
pub const CONFIG_FILE: &str = "settings.toml";
const ENV_PREFIX: &str = "ADDER_";

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Settings {
    /// Version of the configuration schema
    #[serde(default = "default_version")]
    pub version: u32,

    /// Overflow policy applied by `sum` and `run`
    #[serde(default)]
    pub overflow: OverflowPolicy,

    /// Starting total when `--initial` is not given
    #[serde(default)]
    pub initial: i64,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct LoggingConfig {
    /// Default level for all targets
    #[serde(default = "default_log_level")]
    pub default: String,

    /// Per-module overrides, e.g. `adder::accumulator = "debug"`
    #[serde(default)]
    pub modules: HashMap<String, String>,
}

fn default_version() -> u32 {
    1
}
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            version: default_version(),
            overflow: OverflowPolicy::default(),
            initial: 0,
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            default: default_log_level(),
            modules: HashMap::new(),
        }
    }
}

impl Settings {
    /// Load configuration from all sources
    pub fn load() -> AdderResult<Self> {
        let config_path = Self::find_workspace_config()
            .unwrap_or_else(|| PathBuf::from(CONFIG_DIR).join(CONFIG_FILE));
        Self::load_from(config_path)
    }

    /// Load configuration from a specific file, still honouring env overrides
    pub fn load_from(path: impl AsRef<Path>) -> AdderResult<Self> {
        Self::extract(Self::file_layers(path.as_ref()).merge(Self::env_layer()))
    }

    /// Defaults and TOML file only, without `ADDER_*` overrides
    #[cfg(test)]
    fn load_file_only(path: impl AsRef<Path>) -> AdderResult<Self> {
        Self::extract(Self::file_layers(path.as_ref()))
    }

    fn extract(figment: Figment) -> AdderResult<Self> {
        figment
            .extract()
            .map_err(|e| AdderError::Config(Box::new(e)))
    }

    fn file_layers(path: &Path) -> Figment {
        Figment::new()
            .merge(Serialized::defaults(Settings::default()))
            .merge(Toml::file(path))
    }

    // Double underscore separates nesting; single underscore stays part of
    // the field name
    fn env_layer() -> Env {
        Env::prefixed(ENV_PREFIX).map(|key| key.as_str().to_lowercase().replace("__", ".").into())
    }

    /// Find `.adder/settings.toml` searching from the current directory up to root
    fn find_workspace_config() -> Option<PathBuf> {
        let current = std::env::current_dir().ok()?;

        current
            .ancestors()
            .map(|ancestor| ancestor.join(CONFIG_DIR))
            .find(|dir| dir.is_dir())
            .map(|dir| dir.join(CONFIG_FILE))
    }

    /// Save current configuration to file
    pub fn save(&self, path: impl AsRef<Path>) -> AdderResult<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let toml_string = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_string)?;

        Ok(())
    }

    /// Create a default settings file under `root`
    pub fn init_config_file(root: impl AsRef<Path>, force: bool) -> AdderResult<PathBuf> {
        let config_path = root.as_ref().join(CONFIG_DIR).join(CONFIG_FILE);

        if !force && config_path.exists() {
            return Err(AdderError::ConfigExists { path: config_path });
        }

        Settings::default().save(&config_path)?;
        tracing::debug!("[config] wrote defaults to {}", config_path.display());

        Ok(config_path)
    }
}
