//! Configuration file support.
//!
//! Loads the shell and engine settings from a TOML file. Every field is
//! optional; missing ones take their defaults.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::engine::EngineConfig;

/// Environment variable naming a config file when `--config` is not given.
pub const CONFIG_ENV_VAR: &str = "TINYDB_CONFIG";

/// Complete TinyDB configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TinyDbConfig {
    pub shell: ShellConfig,
    pub engine: EngineConfig,
}

/// Interactive shell settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShellConfig {
    /// Prompt shown when no statement is pending.
    #[serde(default = "default_prompt")]
    pub prompt: String,

    /// Prompt shown while a statement is still missing its `;`.
    #[serde(default = "default_continuation_prompt")]
    pub continuation_prompt: String,

    /// Print the welcome banner on startup.
    #[serde(default = "default_true")]
    pub banner: bool,

    /// History file path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub history_file: Option<PathBuf>,

    /// Maximum history size.
    #[serde(default = "default_history_size")]
    pub history_size: usize,

    /// Colored status lines.
    #[serde(default = "default_true")]
    pub color: bool,

    /// Log filter used when neither `--verbose`, `--debug` nor `RUST_LOG` is set.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_prompt() -> String {
    ">> ".to_string()
}

fn default_continuation_prompt() -> String {
    "-> ".to_string()
}

fn default_true() -> bool {
    true
}

fn default_history_size() -> usize {
    1000
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
            continuation_prompt: default_continuation_prompt(),
            banner: true,
            history_file: None,
            history_size: default_history_size(),
            color: true,
            log_level: default_log_level(),
        }
    }
}

impl ShellConfig {
    /// Configured history file, or `<data dir>/tinydb/history`.
    pub fn history_path(&self) -> Option<PathBuf> {
        self.history_file
            .clone()
            .or_else(|| dirs::data_dir().map(|dir| dir.join("tinydb").join("history")))
    }
}

impl TinyDbConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("invalid configuration")
    }

    /// Load a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }

    /// Load from an explicit path, else from `$TINYDB_CONFIG`, else defaults.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Self::load(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }

    /// Save the configuration as TOML.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("failed to serialize configuration")?;
        std::fs::write(path, content)
            .with_context(|| format!("failed to write config file {}", path.display()))
    }
}
