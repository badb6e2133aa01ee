// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Property tests: rendering a parsed tree and parsing it again yields an
//! equal tree.

#![allow(clippy::unwrap_used)]

use acme_shell::Parser;
use proptest::prelude::*;

fn command_name() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,5}(-[a-z0-9]{1,4})?"
}

fn simple_arg() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z0-9_]{1,8}",
        any::<i64>().prop_map(|i| i.to_string()),
        prop::sample::select(vec!["on", "Off", "YES", "no", "enable", "disable"])
            .prop_map(String::from),
        "[a-z \\\\\"']{0,8}".prop_map(|s| {
            let escaped = s.replace('\\', "\\\\").replace('"', "\\\"");
            format!("\"{escaped}\"")
        }),
        "[a-z][a-z .-]{0,6}[a-z]".prop_map(|s| format!("[{s}]")),
        "[a-z\n ]{0,10}".prop_map(|s| format!("```\n{s}```")),
    ]
}

fn join_command(name: String, args: Vec<String>) -> String {
    std::iter::once(name)
        .chain(args)
        .collect::<Vec<_>>()
        .join(" ")
}

fn argument() -> impl Strategy<Value = String> {
    simple_arg().prop_recursive(3, 24, 3, |inner| {
        let command = (command_name(), prop::collection::vec(inner, 0..3))
            .prop_map(|(name, args)| join_command(name, args));
        let comp = prop::collection::vec(command, 1..3).prop_map(|stages| stages.join(" | "));
        prop::collection::vec(comp, 1..3).prop_map(|comps| format!("({})", comps.join(" && ")))
    })
}

fn source() -> impl Strategy<Value = String> {
    let command = (command_name(), prop::collection::vec(argument(), 0..4))
        .prop_map(|(name, args)| join_command(name, args));
    let comp = prop::collection::vec(command, 1..4).prop_map(|stages| stages.join(" | "));
    prop::collection::vec(comp, 1..3).prop_map(|comps| comps.join(" && "))
}

proptest! {
    #[test]
    fn reparse_of_rendering_is_equal(input in source()) {
        let first = Parser::parse(&input).unwrap();
        let rendered = first.to_string();
        let second = Parser::parse(&rendered).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn rendering_is_a_fixed_point(input in source()) {
        let once = Parser::parse(&input).unwrap().to_string();
        let twice = Parser::parse(&once).unwrap().to_string();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn arbitrary_input_never_panics(input in "\\PC{0,40}") {
        let _ = Parser::parse(&input);
    }
}
