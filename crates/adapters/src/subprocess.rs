// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Subprocess execution helpers

use std::process::Output;
use std::time::Duration;
use tokio::process::Command;

/// Default timeout for `units` conversions.
pub const UNITS_TIMEOUT: Duration = Duration::from_secs(10);

/// Default timeout for track extraction with `yt-dlp`.
pub const EXTRACT_TIMEOUT: Duration = Duration::from_secs(60);

/// Run a subprocess command with a timeout.
///
/// Wraps `Command::output()` with `tokio::time::timeout`, converting
/// timeout expiration into a descriptive error message. The child is killed
/// when the timeout elapses.
pub async fn run_with_timeout(
    mut cmd: Command,
    timeout: Duration,
    description: &str,
) -> Result<Output, String> {
    cmd.kill_on_drop(true);
    match tokio::time::timeout(timeout, cmd.output()).await {
        Ok(Ok(output)) => Ok(output),
        Ok(Err(io_err)) => Err(format!("{} failed: {}", description, io_err)),
        Err(_elapsed) => Err(format!(
            "{} timed out after {}s",
            description,
            timeout.as_secs()
        )),
    }
}

/// Like [`run_with_timeout`], but a non-zero exit status is an error carrying
/// the first line of stderr (or stdout when stderr is empty).
pub async fn run_checked(
    cmd: Command,
    timeout: Duration,
    description: &str,
) -> Result<String, String> {
    let output = run_with_timeout(cmd, timeout, description).await?;
    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    if output.status.success() {
        return Ok(stdout);
    }
    let stderr = String::from_utf8_lossy(&output.stderr);
    let reason = stderr
        .lines()
        .chain(stdout.lines())
        .map(str::trim)
        .find(|l| !l.is_empty())
        .unwrap_or("no output");
    Err(format!("{} exited with {}: {}", description, output.status, reason))
}

#[cfg(test)]
#[path = "subprocess_tests.rs"]
mod tests;
