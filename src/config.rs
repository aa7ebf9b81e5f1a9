//! Configuration handling for the contacts CLI
//!
//! Configuration is read from an explicit `--config` path or from
//! `config.toml` in the platform config directory
//! (e.g. `~/.config/contacts/config.toml` on Linux).

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cli::OutputFormat;

pub const DEFAULT_PROMPT: &str = "Enter command: ";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    NotFound(PathBuf),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

/// Interactive session settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Text printed before each line of input
    pub prompt: String,

    /// Print an empty line after every non-exit reply (text format only)
    pub blank_line_after_reply: bool,

    /// Output format when `--format` is not given
    pub default_format: OutputFormat,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            blank_line_after_reply: true,
            default_format: OutputFormat::Text,
        }
    }
}

impl SessionConfig {
    fn validate(self) -> Result<Self, ConfigError> {
        if self.prompt.contains('\n') {
            return Err(ConfigError::Invalid(
                "prompt must fit on a single line".to_string(),
            ));
        }
        Ok(self)
    }
}

/// Loaded configuration and where it came from
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub session: SessionConfig,
    pub source: Option<PathBuf>,
}

impl Config {
    /// Loads configuration from `explicit`, or from the default location
    ///
    /// A missing default file yields defaults; a missing explicit file is an
    /// error.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::NotFound(path.to_path_buf()).into());
                }
                Self::from_file(path)
            }
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    /// Returns the global config directory
    pub fn config_dir() -> Option<PathBuf> {
        ProjectDirs::from("dev", "contacts", "contacts")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Returns the default config file path
    pub fn default_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Reads and parses a config file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;

        let session = Self::parse(&content)
            .with_context(|| format!("Failed to load config: {}", path.display()))?;

        Ok(Self {
            session,
            source: Some(path.to_path_buf()),
        })
    }

    /// Parses config file contents
    pub fn parse(content: &str) -> Result<SessionConfig, ConfigError> {
        toml::from_str::<SessionConfig>(content)
            .map_err(|e| ConfigError::Parse(e.to_string()))?
            .validate()
    }

    /// Serializes the session settings as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(&self.session).context("Failed to serialize config")
    }
}
