// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Parser tests, grouped by grammar area.

mod arguments;
mod errors;
mod render;
mod structure;
mod utils;

use crate::{Argument, Command, Expr, ExprSeq, Parser};

pub(super) fn parse(input: &str) -> ExprSeq {
    Parser::parse(input).unwrap_or_else(|e| panic!("parse failed for {input:?}: {e}"))
}

/// The single command of a one-stage, one-composition input.
pub(super) fn single_command(input: &str) -> Command {
    let seq = parse(input);
    assert_eq!(seq.comps.len(), 1, "expected one composition");
    assert!(seq.comps[0].stages.is_empty(), "expected no pipeline stages");
    match seq.comps[0].head.clone() {
        Expr::Command(cmd) => cmd,
        other => panic!("expected command, got {other:?}"),
    }
}

pub(super) fn args_of(input: &str) -> Vec<Argument> {
    single_command(input).args
}
