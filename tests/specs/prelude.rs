//! Test helpers for behavioral specifications.
//!
//! Provides a small DSL for running acme-bot with scripted input.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, dead_code)]

use std::path::{Path, PathBuf};
use std::process::Output;

use assert_cmd::Command;

const ENV_VARS: [&str; 8] = [
    "ACME_COMMAND_PREFIX",
    "ACME_LOG_LEVEL",
    "ACME_LOG_FILE",
    "ACME_MAX_NESTING_DEPTH",
    "ACME_COMMAND_TIMEOUT_MS",
    "ACME_HISTORY_LIMIT",
    "ACME_FILES_DIR",
    "ACME_USER_NAME",
];

/// Returns the path to a binary, checking llvm-cov target directory first.
/// Falls back to resolving relative to the test binary itself.
fn binary_path(name: &str) -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));

    let llvm_cov_path = manifest_dir.join("target/llvm-cov-target/debug").join(name);
    if llvm_cov_path.exists() {
        return llvm_cov_path;
    }

    let standard = manifest_dir.join("target/debug").join(name);
    if standard.exists() {
        return standard;
    }

    // The test binary lives at target/debug/deps/specs-<hash>.
    if let Ok(exe) = std::env::current_exe() {
        if let Some(debug_dir) = exe.parent().and_then(|d| d.parent()) {
            let fallback = debug_dir.join(name);
            if fallback.exists() {
                return fallback;
            }
        }
    }

    standard
}

/// Create a builder for one acme-bot run
pub fn bot() -> BotBuilder {
    BotBuilder::new()
}

/// A directory of channel files that lives as long as the test.
pub struct Files {
    dir: tempfile::TempDir,
}

impl Files {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn with(self, name: &str, content: &str) -> Self {
        std::fs::write(self.dir.path().join(name), content).unwrap();
        self
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn read(&self, name: &str) -> String {
        std::fs::read_to_string(self.dir.path().join(name)).unwrap()
    }
}

/// High-level builder for fluent test assertions
pub struct BotBuilder {
    args: Vec<String>,
    envs: Vec<(String, String)>,
    stdin: String,
}

impl BotBuilder {
    fn new() -> Self {
        Self {
            args: Vec::new(),
            envs: vec![("ACME_LOG_LEVEL".into(), "warn".into())],
            stdin: String::new(),
        }
    }

    /// Add CLI arguments
    pub fn args(mut self, args: &[&str]) -> Self {
        self.args.extend(args.iter().map(|s| s.to_string()));
        self
    }

    /// Set environment variable
    pub fn env(mut self, key: &str, value: impl AsRef<Path>) -> Self {
        self.envs.push((
            key.to_string(),
            value.as_ref().to_string_lossy().to_string(),
        ));
        self
    }

    /// Use `files` as the channel's file history
    pub fn files(self, files: &Files) -> Self {
        let path = files.path().to_string_lossy().to_string();
        self.args(&["--files", &path])
    }

    /// Send one message per line
    pub fn input(mut self, lines: &[&str]) -> Self {
        for line in lines {
            self.stdin.push_str(line);
            self.stdin.push('\n');
        }
        self
    }

    /// Build the command without running it
    pub fn command(self) -> Command {
        let mut cmd = Command::new(binary_path("acme-bot"));
        cmd.args(&self.args);

        // Keep the user's own configuration out of the run.
        cmd.env("XDG_CONFIG_HOME", "/nonexistent/acme-specs");
        cmd.env("HOME", "/nonexistent/acme-specs");
        cmd.env_remove("RUST_LOG");
        for key in ENV_VARS {
            cmd.env_remove(key);
        }

        for (key, value) in self.envs {
            cmd.env(key, value);
        }
        cmd.write_stdin(self.stdin);
        cmd
    }

    /// Run and expect success (exit code 0)
    pub fn passes(self) -> RunAssert {
        let output = self.command().output().expect("command should run");
        assert!(
            output.status.success(),
            "expected command to pass, got exit code {:?}\nstdout: {}\nstderr: {}",
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
        RunAssert { output }
    }

    /// Run and expect failure (non-zero exit code)
    pub fn fails(self) -> RunAssert {
        let output = self.command().output().expect("command should run");
        assert!(
            !output.status.success(),
            "expected command to fail, but it passed\nstdout: {}\nstderr: {}",
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
        RunAssert { output }
    }
}

/// Result of a run for chaining assertions
pub struct RunAssert {
    output: Output,
}

impl RunAssert {
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).into_owned()
    }

    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }

    /// Assert stdout equals expected exactly (with diff on failure).
    pub fn stdout_eq(self, expected: &str) -> Self {
        let stdout = self.stdout();
        similar_asserts::assert_eq!(stdout, expected);
        self
    }

    pub fn stdout_has(self, expected: &str) -> Self {
        let stdout = self.stdout();
        assert!(
            stdout.contains(expected),
            "stdout does not contain {expected:?}\nstdout: {stdout}"
        );
        self
    }

    pub fn stdout_lacks(self, unexpected: &str) -> Self {
        let stdout = self.stdout();
        assert!(
            !stdout.contains(unexpected),
            "stdout unexpectedly contains {unexpected:?}\nstdout: {stdout}"
        );
        self
    }

    pub fn stderr_has(self, expected: &str) -> Self {
        let stderr = self.stderr();
        assert!(
            stderr.contains(expected),
            "stderr does not contain {expected:?}\nstderr: {stderr}"
        );
        self
    }
}
