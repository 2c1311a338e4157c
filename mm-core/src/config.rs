//! Configuration schema.
//!
//! All fields default, so running with no config file at all is fine.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Configuration loading errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    /// Guess input handling.
    #[serde(default)]
    pub input: InputConfig,

    /// Game transcript logging.
    #[serde(default)]
    pub transcript: TranscriptConfig,
}

/// Guess input configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct InputConfig {
    /// If true, lowercase color initials are accepted ("rbyg" == "RBYG").
    #[serde(default = "default_accept_lowercase")]
    pub accept_lowercase: bool,
}

fn default_accept_lowercase() -> bool {
    true
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            accept_lowercase: default_accept_lowercase(),
        }
    }
}

/// Transcript (NDJSON game log) configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TranscriptConfig {
    /// Where to append round events. `None` disables the transcript.
    #[serde(default)]
    pub path: Option<String>,
    /// Flush the writer every N lines. 0 disables periodic flushing.
    #[serde(default = "default_flush_every_lines")]
    pub flush_every_lines: u64,
}

fn default_flush_every_lines() -> u64 {
    1
}

impl Default for TranscriptConfig {
    fn default() -> Self {
        Self {
            path: None,
            flush_every_lines: default_flush_every_lines(),
        }
    }
}

/// Load a `Config` from a YAML file.
pub fn load_config(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let bytes = std::fs::read(path)?;
    Ok(serde_yaml::from_slice(&bytes)?)
}
