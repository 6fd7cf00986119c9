//! Configuration management for registrar.
//!
//! This module provides configuration loading and validation using figment,
//! supporting TOML config files, environment variables, and defaults.

use std::path::PathBuf;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::list::DEFAULT_CAPACITY;
use crate::view::OutputFormat;

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default configuration directory name.
const CONFIG_DIR_NAME: &str = "registrar";

/// Default records file name.
pub const DEFAULT_INPUT_FILE: &str = "input_updated.txt";

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `REGISTRAR_`)
/// 2. TOML config file at `~/.config/registrar/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Records data configuration.
    pub data: DataConfig,
    /// Display configuration.
    pub display: DisplayConfig,
}

/// Records data configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Path to the records file.
    pub input_path: PathBuf,
    /// Initial capacity of the student and course lists.
    pub initial_capacity: usize,
}

/// Display configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Output format used when a command does not pass `--format`.
    pub format: OutputFormat,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_FILE),
            initial_capacity: DEFAULT_CAPACITY,
        }
    }
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// Configuration is loaded in this order (later sources override earlier):
    /// 1. Default values
    /// 2. TOML config file (if exists)
    /// 3. Environment variables (prefixed with `REGISTRAR_`)
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config path.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file).nested())
            .merge(Env::prefixed("REGISTRAR_").split("__"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        if self.data.initial_capacity == 0 {
            return Err(Error::ConfigValidation {
                message: "initial_capacity must be greater than 0".to_string(),
            });
        }

        if self.data.input_path.as_os_str().is_empty() {
            return Err(Error::ConfigValidation {
                message: "input_path must not be empty".to_string(),
            });
        }

        Ok(())
    }

    /// Records file path, preferring an explicit override.
    #[must_use]
    pub fn input_path(&self, cli_override: Option<&PathBuf>) -> PathBuf {
        cli_override
            .cloned()
            .unwrap_or_else(|| self.data.input_path.clone())
    }

    /// Output format, preferring an explicit override.
    #[must_use]
    pub fn format(&self, cli_override: Option<OutputFormat>) -> OutputFormat {
        cli_override.unwrap_or(self.display.format)
    }
}
