// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tracing subscriber setup.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::{Config, ConfigError};

/// Filter from `RUST_LOG`, falling back to the configured level.
pub fn env_filter(level: &str) -> Result<EnvFilter, ConfigError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(level).map_err(|e| ConfigError::Invalid {
        key: "log_level",
        message: e.to_string(),
    })
}

/// Install the global subscriber. Keep the guard alive until exit so
/// buffered lines are flushed.
pub fn setup_logging(config: &Config) -> Result<WorkerGuard, ConfigError> {
    let filter = env_filter(&config.log_level)?;

    let (writer, guard, ansi) = match &config.log_file {
        Some(path) => {
            let dir = match path.parent() {
                Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
                _ => std::path::PathBuf::from("."),
            };
            let name = path.file_name().ok_or_else(|| ConfigError::Invalid {
                key: "log_file",
                message: format!("{} is not a file path", path.display()),
            })?;
            std::fs::create_dir_all(&dir).map_err(|source| ConfigError::LogFile {
                path: path.clone(),
                source,
            })?;
            let appender = tracing_appender::rolling::never(&dir, name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (writer, guard, false)
        }
        None => {
            let (writer, guard) = tracing_appender::non_blocking(std::io::stderr());
            (writer, guard, true)
        }
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(writer).with_ansi(ansi))
        .init();

    Ok(guard)
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
