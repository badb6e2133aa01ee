//! CLI help output specs

use crate::prelude::*;

#[test]
fn help_shows_usage_and_flags() {
    bot()
        .args(&["--help"])
        .passes()
        .stdout_has("Usage:")
        .stdout_has("--config")
        .stdout_has("--files")
        .stdout_has("--user");
}

#[test]
fn version_shows_version() {
    bot().args(&["--version"]).passes().stdout_has("0.1");
}

#[test]
fn unknown_flag_fails() {
    bot()
        .args(&["--frobnicate"])
        .fails()
        .stderr_has("--frobnicate");
}

#[test]
fn empty_input_exits_cleanly() {
    bot().passes().stdout_eq("");
}
