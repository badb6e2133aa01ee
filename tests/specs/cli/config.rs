//! Configuration specs: file, environment and flag layering.

use crate::prelude::*;

#[test]
fn prefix_from_environment() {
    bot()
        .env("ACME_COMMAND_PREFIX", "$")
        .input(&["!concat \"no\" \"pe\"", "$concat \"x\" \"y\""])
        .passes()
        .stdout_eq("```\nxy\n```\n");
}

#[test]
fn prefix_from_config_file() {
    let dir = Files::new().with("bot.toml", "prefix = \"%\"\n");
    let config = dir.path().join("bot.toml");
    bot()
        .args(&["--config", &config.to_string_lossy()])
        .input(&["%concat \"x\" \"y\""])
        .passes()
        .stdout_eq("```\nxy\n```\n");
}

#[test]
fn invalid_environment_value_fails_startup() {
    bot()
        .env("ACME_MAX_NESTING_DEPTH", "deep")
        .fails()
        .stderr_has("invalid value for ACME_MAX_NESTING_DEPTH");
}

#[test]
fn missing_config_file_fails_startup() {
    bot()
        .args(&["--config", "/nonexistent/acme.toml"])
        .fails()
        .stderr_has("failed to read /nonexistent/acme.toml");
}

#[test]
fn unknown_config_key_fails_startup() {
    let dir = Files::new().with("bot.toml", "prefx = \"%\"\n");
    let config = dir.path().join("bot.toml");
    bot()
        .args(&["--config", &config.to_string_lossy()])
        .fails()
        .stderr_has("prefx");
}

#[test]
fn log_file_receives_logs() {
    let dir = Files::new();
    let log = dir.path().join("logs").join("bot.log");
    bot()
        .env("ACME_LOG_FILE", &log)
        .env("ACME_LOG_LEVEL", "info")
        .input(&["!concat \"a\""])
        .passes();
    let text = std::fs::read_to_string(&log).unwrap();
    assert!(text.contains("acme-bot ready"), "log: {text}");
}
