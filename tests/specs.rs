//! Behavioral specifications for the acme-bot binary.
//!
//! These tests are black-box: they feed messages to the bot on stdin and
//! verify stdout, stderr, and exit codes.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

#[path = "specs/prelude.rs"]
mod prelude;

// cli/
#[path = "specs/cli/config.rs"]
mod cli_config;
#[path = "specs/cli/help.rs"]
mod cli_help;

// shell/
#[path = "specs/shell/errors.rs"]
mod shell_errors;
#[path = "specs/shell/evaluation.rs"]
mod shell_evaluation;
#[path = "specs/shell/files.rs"]
mod shell_files;

// music/
#[path = "specs/music/console.rs"]
mod music_console;
