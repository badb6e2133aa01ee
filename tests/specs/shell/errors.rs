//! Error report specs: every failure is one message to the channel.

use crate::prelude::*;

#[test]
fn unknown_command_is_reported() {
    bot()
        .input(&["!frobnicate 1"])
        .passes()
        .stdout_eq("Error: Command `frobnicate` not found\n");
}

#[test]
fn unknown_command_stops_the_whole_composition() {
    bot()
        .input(&["!concat \"a\" | frobnicate"])
        .passes()
        .stdout_eq("Error: Command `frobnicate` not found\n");
}

#[test]
fn syntax_error_points_at_the_token() {
    bot()
        .input(&["!concat \"a\" &&"])
        .passes()
        .stdout_has("Syntax error:\n```");
}

#[test]
fn argument_error_shows_usage() {
    bot()
        .input(&["!tail \"a\" ten"])
        .passes()
        .stdout_has("Error: argument `line_count` expects integer")
        .stdout_has("Command usage: `!tail <data> [line_count=10]`")
        .stdout_has("For more information, refer to `!help tail`.");
}

#[test]
fn nesting_limit_is_enforced() {
    bot()
        .env("ACME_MAX_NESTING_DEPTH", "2")
        .input(&["!concat (concat (concat (concat \"a\")))"])
        .passes()
        .stdout_has("substitutions nested deeper than 2 levels")
        .stdout_lacks("```\na\n```");
}

#[test]
fn failed_sequence_keeps_earlier_output() {
    bot()
        .input(&["!concat \"first\" && frobnicate && concat \"never\""])
        .passes()
        .stdout_eq("```\nfirst\n```\nError: Command `frobnicate` not found\n");
}
