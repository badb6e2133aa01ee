// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::{AstVisitor, StrLiteral};

#[test]
fn count_commands_includes_substitutions() {
    assert_eq!(parse("ping").count_commands(), 1);
    assert_eq!(parse("concat (print a) (ping) | count").count_commands(), 4);
    assert_eq!(parse("'x' | count").count_commands(), 1);
}

#[test]
fn file_references_are_deduplicated() {
    let seq = parse("concat [a.txt] [b.txt] && print [a.txt]");
    assert_eq!(seq.file_references(), vec!["a.txt", "b.txt"]);
}

#[test]
fn max_substitution_depth() {
    assert_eq!(parse("ping").max_substitution_depth(), 0);
    assert_eq!(parse("concat (ping) (print (ping))").max_substitution_depth(), 2);
}

#[test]
fn custom_visitor_sees_literals() {
    struct Strings(Vec<String>);
    impl AstVisitor for Strings {
        fn visit_str_literal(&mut self, lit: &StrLiteral) {
            self.0.push(lit.value.clone());
        }
    }

    let mut v = Strings(Vec::new());
    v.visit_expr_seq(&parse("'a' | concat b (print c) 5"));
    assert_eq!(v.0, vec!["a", "b", "c"]);
}

#[test]
fn expr_seq_parse_delegates_to_parser() {
    assert_eq!(ExprSeq::parse("ping").unwrap(), parse("ping"));
}
