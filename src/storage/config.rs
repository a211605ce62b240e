//! Configuration handling for tally
//!
//! Configuration is read from `tally.toml` in the working directory (local)
//! and `~/.config/tally/config.toml` (global). Local values win; every key
//! is optional.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::database::DEFAULT_DATA_FILE;
use crate::domain::Priority;

/// Name of the working-directory config file
pub const LOCAL_CONFIG_FILE: &str = "tally.toml";

/// Tasks generated by `simulate` when no count is given
pub const DEFAULT_SIMULATE_COUNT: usize = 20;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

/// One configuration file; unset keys fall through to the next layer
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    /// Path to the JSON data file
    pub data_file: Option<PathBuf>,

    /// Number of tasks `simulate` generates by default
    pub simulate_count: Option<usize>,

    /// Priority used by `task add` when none is given
    pub default_priority: Option<String>,
}

impl ConfigFile {
    /// Parses a TOML config document
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Reads a config file, returning an empty layer if it does not exist
    pub fn read(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;

        Self::parse(&content).with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Overlays `other` on top of `self`
    fn merged_with(self, other: ConfigFile) -> ConfigFile {
        ConfigFile {
            data_file: other.data_file.or(self.data_file),
            simulate_count: other.simulate_count.or(self.simulate_count),
            default_priority: other.default_priority.or(self.default_priority),
        }
    }
}

/// Effective configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub data_file: PathBuf,
    pub simulate_count: usize,
    pub default_priority: Priority,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            simulate_count: DEFAULT_SIMULATE_COUNT,
            default_priority: Priority::Medium,
        }
    }
}

impl Config {
    /// Loads configuration from default locations
    ///
    /// `data_file_override` comes from `--data-file` / `TALLY_DATA_FILE` and
    /// beats every file.
    pub fn load(data_file_override: Option<PathBuf>) -> Result<Self> {
        let global = match Self::global_config_path() {
            Some(path) => ConfigFile::read(&path)?,
            None => ConfigFile::default(),
        };
        let local = ConfigFile::read(Path::new(LOCAL_CONFIG_FILE))?;

        let mut config = Self::from_layers([global, local]);
        if let Some(path) = data_file_override {
            config.data_file = path;
        }
        Ok(config)
    }

    /// Folds config layers, later layers winning
    pub fn from_layers(layers: impl IntoIterator<Item = ConfigFile>) -> Self {
        let merged = layers
            .into_iter()
            .fold(ConfigFile::default(), ConfigFile::merged_with);

        let defaults = Self::default();
        Self {
            data_file: merged.data_file.unwrap_or(defaults.data_file),
            simulate_count: merged.simulate_count.unwrap_or(defaults.simulate_count),
            default_priority: merged
                .default_priority
                .map(|p| Priority::parse_lenient(&p))
                .unwrap_or(defaults.default_priority),
        }
    }

    /// Returns the global config directory
    pub fn global_config_dir() -> Option<PathBuf> {
        ProjectDirs::from("dev", "tally", "tally").map(|dirs| dirs.config_dir().to_path_buf())
    }

    fn global_config_path() -> Option<PathBuf> {
        Self::global_config_dir().map(|dir| dir.join("config.toml"))
    }
}
