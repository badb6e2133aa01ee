// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Bot configuration.
//!
//! Values come from an optional TOML file, then `ACME_*` environment
//! variables, then command-line flags, each layer overriding the previous.

use std::path::{Path, PathBuf};
use std::time::Duration;

use acme_engine::{EvalConfig, DEFAULT_MAX_NESTING_DEPTH};
use serde::Deserialize;
use thiserror::Error;

use crate::env;

/// Errors from loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("invalid value for {key}: {value:?}")]
    InvalidEnv { key: &'static str, value: String },
    #[error("invalid {key}: {message}")]
    Invalid { key: &'static str, message: String },
    #[error("failed to open log file {}: {source}", path.display())]
    LogFile {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Where `play-url` and friends look tracks up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrackSourceKind {
    #[default]
    YtDlp,
    Offline,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Text a message must start with to be evaluated.
    pub prefix: String,
    /// Default tracing filter; `RUST_LOG` wins when set.
    pub log_level: String,
    /// Log to this file instead of stderr.
    pub log_file: Option<PathBuf>,
    pub max_nesting_depth: usize,
    pub command_timeout_ms: Option<u64>,
    /// Number of recent files searched by `[name]` lookups.
    pub history_limit: usize,
    /// Directory holding the console channel's files.
    pub files_dir: Option<PathBuf>,
    /// Author of every console message.
    pub user_name: String,
    pub guild: String,
    pub channel: String,
    pub voice_channel: String,
    pub units_program: String,
    pub track_source: TrackSourceKind,
    pub ytdlp_program: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prefix: "!".to_string(),
            log_level: "info".to_string(),
            log_file: None,
            max_nesting_depth: DEFAULT_MAX_NESTING_DEPTH,
            command_timeout_ms: None,
            history_limit: 1000,
            files_dir: None,
            user_name: "console".to_string(),
            guild: "console".to_string(),
            channel: "console".to_string(),
            voice_channel: "console".to_string(),
            units_program: "units".to_string(),
            track_source: TrackSourceKind::default(),
            ytdlp_program: "yt-dlp".to_string(),
        }
    }
}

impl Config {
    /// Load the file at `path`, or the default config file when it exists,
    /// then apply environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path.map(Path::to_path_buf).or_else(existing_default_path) {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };
        config.apply_env()?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        if let Some(prefix) = env::command_prefix() {
            self.prefix = prefix;
        }
        if let Some(level) = env::log_level() {
            self.log_level = level;
        }
        if let Some(file) = env::log_file() {
            self.log_file = Some(file);
        }
        if let Some(depth) = env::max_nesting_depth()? {
            self.max_nesting_depth = depth;
        }
        if let Some(ms) = env::command_timeout_ms()? {
            self.command_timeout_ms = Some(ms);
        }
        if let Some(limit) = env::history_limit()? {
            self.history_limit = limit;
        }
        if let Some(dir) = env::files_dir() {
            self.files_dir = Some(dir);
        }
        if let Some(user) = env::user_name() {
            self.user_name = user;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.prefix.trim().is_empty() {
            return Err(invalid("prefix", "must not be empty"));
        }
        if self.max_nesting_depth == 0 {
            return Err(invalid("max_nesting_depth", "must be at least 1"));
        }
        if self.history_limit == 0 {
            return Err(invalid("history_limit", "must be at least 1"));
        }
        if self.command_timeout_ms == Some(0) {
            return Err(invalid("command_timeout_ms", "must be at least 1"));
        }
        if self.user_name.trim().is_empty() {
            return Err(invalid("user_name", "must not be empty"));
        }
        Ok(())
    }

    pub fn command_timeout(&self) -> Option<Duration> {
        self.command_timeout_ms.map(Duration::from_millis)
    }

    pub fn eval_config(&self) -> EvalConfig {
        EvalConfig {
            prefix: self.prefix.clone(),
            max_nesting_depth: self.max_nesting_depth,
            command_timeout: self.command_timeout(),
        }
    }
}

fn invalid(key: &'static str, message: &str) -> ConfigError {
    ConfigError::Invalid {
        key,
        message: message.to_string(),
    }
}

/// `<config dir>/acme/config.toml`, if present.
fn existing_default_path() -> Option<PathBuf> {
    let path = dirs::config_dir()?.join("acme").join("config.toml");
    path.is_file().then_some(path)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
