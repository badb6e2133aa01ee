// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::{ExprSubst, StrStyle};

#[test]
fn bare_command() {
    let cmd = single_command("ping");
    assert_eq!(cmd.name, "ping");
    assert!(cmd.args.is_empty());
}

#[test]
fn hyphenated_command_name() {
    assert_eq!(single_command("play-url x").name, "play-url");
}

#[test]
fn sequence_splits_on_and() {
    let seq = parse("clear && play-url [urls.txt] && queue");
    assert_eq!(seq.comps.len(), 3);
    assert_eq!(seq.command_names(), vec!["clear", "play-url", "queue"]);
}

#[test]
fn pipeline_stages_are_commands() {
    let seq = parse("enumerate [code.py] | grep eval | print python");
    let comp = &seq.comps[0];
    assert_eq!(comp.stage_count(), 3);
    assert!(matches!(&comp.head, Expr::Command(c) if c.name == "enumerate"));
    assert_eq!(comp.stages[0].name, "grep");
    assert_eq!(comp.stages[1].name, "print");
}

#[test]
fn head_may_be_file_content() {
    let seq = parse("[notes.txt] | count");
    match &seq.comps[0].head {
        Expr::FileContent(f) => assert_eq!(f.file_name, "notes.txt"),
        other => panic!("expected file content, got {other:?}"),
    }
}

#[test]
fn head_may_be_quoted_string() {
    let seq = parse("\"hello\" | count");
    match &seq.comps[0].head {
        Expr::Str(s) => {
            assert_eq!(s.value, "hello");
            assert_eq!(s.style, StrStyle::Quoted);
        }
        other => panic!("expected string, got {other:?}"),
    }
}

#[test]
fn head_may_be_code_block() {
    let seq = parse("```rust\nfn main() {}\n``` | count");
    match &seq.comps[0].head {
        Expr::Str(s) => {
            assert_eq!(s.value, "fn main() {}\n");
            assert_eq!(s.style, StrStyle::CodeBlock);
        }
        other => panic!("expected string, got {other:?}"),
    }
}

#[test]
fn head_bare_word_that_is_not_a_name_is_string() {
    let seq = parse("https://example.com | count");
    assert!(matches!(
        &seq.comps[0].head,
        Expr::Str(s) if s.value == "https://example.com" && s.style == StrStyle::Bare
    ));
}

#[test]
fn head_may_be_substitution() {
    let seq = parse("(concat a b) | count");
    match &seq.comps[0].head {
        Expr::Subst(ExprSubst { body, .. }) => {
            assert_eq!(body.command_names(), vec!["concat"]);
        }
        other => panic!("expected substitution, got {other:?}"),
    }
}

#[test]
fn nested_substitution_in_argument() {
    let cmd = single_command("concat (units \"tempF(451)\" K) \" Kelvin\"");
    assert_eq!(cmd.args.len(), 2);
    match &cmd.args[0] {
        Argument::Subst(s) => {
            let inner = &s.body.comps[0];
            match &inner.head {
                Expr::Command(units) => {
                    assert_eq!(units.name, "units");
                    assert_eq!(units.args.len(), 2);
                }
                other => panic!("expected command, got {other:?}"),
            }
        }
        other => panic!("expected substitution, got {other:?}"),
    }
    assert!(matches!(&cmd.args[1], Argument::Str(s) if s.value == " Kelvin"));
}

#[test]
fn substitution_may_contain_sequence_and_pipeline() {
    let seq = parse("print (ping && concat a | count)");
    assert_eq!(seq.max_substitution_depth(), 1);
    assert_eq!(seq.command_names(), vec!["print", "ping", "concat", "count"]);
}

#[test]
fn spans_point_into_source() {
    let input = "concat abc (ping)";
    let cmd = single_command(input);
    assert_eq!(cmd.name_span.slice(input), "concat");
    assert_eq!(cmd.span.slice(input), input);
    assert_eq!(cmd.args[0].span().slice(input), "abc");
    assert_eq!(cmd.args[1].span().slice(input), "(ping)");
}

#[test]
fn equality_ignores_spans() {
    assert_eq!(parse("concat   a    b"), parse("concat a b"));
    assert_eq!(parse("concat a"), parse("concat \"a\""));
    assert_ne!(parse("concat a"), parse("concat b"));
}
