//! Evaluation specs: sequences, pipes and substitutions.

use crate::prelude::*;

#[test]
fn concat_joins_without_separator() {
    bot()
        .input(&["!concat \"a\" \"b\""])
        .passes()
        .stdout_eq("```\nab\n```\n");
}

#[test]
fn messages_without_prefix_are_ignored() {
    bot()
        .input(&["hello", "concat \"a\" \"b\"", ""])
        .passes()
        .stdout_eq("");
}

#[test]
fn pipe_feeds_first_argument() {
    bot()
        .input(&["!concat \"b\" \"a\" | concat \"c\""])
        .passes()
        .stdout_eq("```\nbac\n```\n");
}

#[test]
fn substitution_is_silent() {
    bot()
        .input(&["!concat (concat \"x\" \"y\") \"z\""])
        .passes()
        .stdout_eq("```\nxyz\n```\n");
}

#[test]
fn sequence_runs_in_order() {
    bot()
        .input(&["!concat \"one\" && concat \"two\""])
        .passes()
        .stdout_eq("```\none\n```\n```\ntwo\n```\n");
}

#[test]
fn options_follow_grep_patterns() {
    bot()
        .input(&["!print \"b c a\" | grep \"[a-z]\" -o | sort | head 2"])
        .passes()
        .stdout_eq("```\na\nb\n```\n");
}

#[test]
fn help_lists_commands() {
    bot()
        .input(&["!help"])
        .passes()
        .stdout_has("Commands:")
        .stdout_has("play-url")
        .stdout_has("Type !help <command> for more information on a command.");
}
