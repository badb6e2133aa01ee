// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! End-to-end pipelines over the built-in commands.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use acme_adapters::{ChatCall, FakeChat};
use acme_commands::ShellOptions;
use acme_core::{ChannelId, Value};
use acme_engine::{CommandRegistry, EvalConfig, EvalError, Evaluator, Origin};

const CODE: &str = "import os\nx = eval(input())\nprint(x)\n";

fn setup() -> (Evaluator, FakeChat) {
    let chat = FakeChat::new();
    let mut builder = CommandRegistry::builder();
    acme_commands::register(
        &mut builder,
        &ShellOptions {
            units_program: "echo".to_string(),
        },
    )
    .unwrap();
    let evaluator = Evaluator::new(
        builder.build(),
        Arc::new(chat.clone()),
        EvalConfig::default(),
    );
    chat.add_file(&ChannelId::new("general"), "code.py", CODE);
    (evaluator, chat)
}

async fn run(evaluator: &Evaluator, input: &str) -> Result<Value, EvalError> {
    let ctx = evaluator.context(Origin::new("guild", "general", "bob"));
    evaluator.evaluate(input, &ctx).await
}

#[tokio::test]
async fn concat_joins_without_separator() {
    let (evaluator, chat) = setup();
    let value = run(&evaluator, r#"concat "a" "b""#).await.unwrap();
    assert_eq!(value, Value::Str("ab".to_string()));
    assert_eq!(chat.sent(), vec!["```\nab\n```"]);
}

#[tokio::test]
async fn enumerate_grep_print_passes_values_through() {
    let (evaluator, chat) = setup();
    let value = run(&evaluator, "enumerate [code.py] | grep eval | print python")
        .await
        .unwrap();

    assert_eq!(value, Value::Str("2  x = eval(input())\n".to_string()));
    let sent = chat.sent();
    assert_eq!(sent.len(), 1);
    assert!(sent[0].starts_with("```python\n2  x = eval(input())"));
}

#[tokio::test]
async fn substitution_runs_before_outer_binding() {
    let (evaluator, _chat) = setup();
    let value = run(&evaluator, r#"concat (units "tempF(451)" K) " Kelvin""#)
        .await
        .unwrap();
    assert_eq!(
        value,
        Value::Str("--terse -- tempF(451) K Kelvin".to_string())
    );
}

#[tokio::test]
async fn missing_file_aborts_before_any_command() {
    let (evaluator, chat) = setup();
    let err = run(&evaluator, "[missing.txt] | to-file out.txt")
        .await
        .unwrap_err();

    assert!(matches!(err, EvalError::FileNotFound { ref name, .. } if name == "missing.txt"));
    assert!(chat
        .calls()
        .iter()
        .all(|c| !matches!(c, ChatCall::Upload { .. } | ChatCall::Send { .. })));
}

#[tokio::test]
async fn sequence_stops_at_first_failure() {
    let (evaluator, chat) = setup();
    let err = run(&evaluator, r#"to-file "one" a.txt && open nope && to-file "two" b.txt"#)
        .await
        .unwrap_err();

    assert!(matches!(err, EvalError::FileNotFound { ref name, .. } if name == "nope"));
    let uploads: Vec<String> = chat.uploads().into_iter().map(|f| f.name).collect();
    assert_eq!(uploads, vec!["bob_a.txt"]);
}

#[tokio::test]
async fn tail_of_sorted_file() {
    let (evaluator, _chat) = setup();
    let value = run(&evaluator, "sort [code.py] | tail 1").await.unwrap();
    assert_eq!(value, Value::Str("x = eval(input())".to_string()));
}
