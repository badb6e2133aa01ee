// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the bot crate.

use std::path::PathBuf;
use std::str::FromStr;

use crate::config::ConfigError;

pub const COMMAND_PREFIX: &str = "ACME_COMMAND_PREFIX";
pub const LOG_LEVEL: &str = "ACME_LOG_LEVEL";
pub const LOG_FILE: &str = "ACME_LOG_FILE";
pub const MAX_NESTING_DEPTH: &str = "ACME_MAX_NESTING_DEPTH";
pub const COMMAND_TIMEOUT_MS: &str = "ACME_COMMAND_TIMEOUT_MS";
pub const HISTORY_LIMIT: &str = "ACME_HISTORY_LIMIT";
pub const FILES_DIR: &str = "ACME_FILES_DIR";
pub const USER_NAME: &str = "ACME_USER_NAME";

// --- Helpers (private) ---

/// Unset and empty variables are treated the same.
fn var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|s| !s.is_empty())
}

fn parse<T: FromStr>(key: &'static str) -> Result<Option<T>, ConfigError> {
    match var(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidEnv { key, value: raw }),
    }
}

// --- Evaluation ---

pub fn command_prefix() -> Option<String> {
    var(COMMAND_PREFIX)
}

pub fn max_nesting_depth() -> Result<Option<usize>, ConfigError> {
    parse(MAX_NESTING_DEPTH)
}

pub fn command_timeout_ms() -> Result<Option<u64>, ConfigError> {
    parse(COMMAND_TIMEOUT_MS)
}

// --- Logging ---

pub fn log_level() -> Option<String> {
    var(LOG_LEVEL)
}

pub fn log_file() -> Option<PathBuf> {
    var(LOG_FILE).map(PathBuf::from)
}

// --- Console ---

pub fn history_limit() -> Result<Option<usize>, ConfigError> {
    parse(HISTORY_LIMIT)
}

pub fn files_dir() -> Option<PathBuf> {
    var(FILES_DIR).map(PathBuf::from)
}

pub fn user_name() -> Option<String> {
    var(USER_NAME)
}
