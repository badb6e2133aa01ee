// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Substitutions and file content arguments.

use super::*;

#[tokio::test]
async fn substitution_runs_before_outer_command() {
    let engine = TestEngine::new();
    let value = engine.eval(r#"concat (add 450) " Kelvin""#).await.unwrap();
    assert_eq!(value, str_value("451 Kelvin"));
    assert_eq!(engine.ran(), vec!["add", "concat"]);
}

#[tokio::test]
async fn arguments_evaluate_left_to_right_depth_first() {
    let engine = TestEngine::new();
    engine
        .eval("concat (concat (add 1) (not yes)) (nothing)")
        .await
        .unwrap();
    assert_eq!(engine.ran(), vec!["add", "not", "concat", "nothing", "concat"]);
}

#[tokio::test]
async fn substitution_sequence_value_is_joined() {
    let engine = TestEngine::new();
    let value = engine.eval("concat (concat a && concat b) c").await.unwrap();
    assert_eq!(value, str_value("abc"));
}

#[tokio::test]
async fn head_substitution_passes_value_on() {
    let engine = TestEngine::new();
    let value = engine.eval("(add 1) | add").await.unwrap();
    assert_eq!(value, Value::Int(3));
}

#[tokio::test]
async fn file_argument_is_injected() {
    let engine = TestEngine::new();
    engine.chat.add_file(&channel(), "code.py", "print(1)\n");
    let value = engine.eval("concat [code.py] done").await.unwrap();
    assert_eq!(value, str_value("print(1)\ndone"));
}

#[tokio::test]
async fn newest_file_wins() {
    let engine = TestEngine::new();
    engine.chat.add_file(&channel(), "a.txt", "old");
    engine.chat.add_file(&channel(), "a.txt", "new");
    assert_eq!(engine.eval("concat [a.txt]").await.unwrap(), str_value("new"));
}

#[tokio::test]
async fn substitution_within_limit_evaluates() {
    let engine = TestEngine::with_config(EvalConfig {
        max_nesting_depth: 3,
        ..EvalConfig::default()
    });
    let value = engine.eval("concat (concat (concat (add 0)))").await.unwrap();
    assert_eq!(value, str_value("1"));
}

#[tokio::test]
async fn nesting_beyond_limit_is_rejected_before_running() {
    let engine = TestEngine::with_config(EvalConfig {
        max_nesting_depth: 2,
        ..EvalConfig::default()
    });
    let input = "concat a && concat (concat (concat (add 0)))";
    let err = engine.eval(input).await.unwrap_err();
    match err {
        EvalError::NestingLimitExceeded { limit, span } => {
            assert_eq!(limit, 2);
            assert_eq!(span.slice(input), "(add 0)");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(engine.ran().is_empty());
}

#[tokio::test]
async fn deep_input_fails_without_overflowing() {
    let engine = TestEngine::new();
    let input = format!("{}add 1{}", "concat (".repeat(10_000), ")".repeat(10_000));
    let err = engine.eval(&input).await.unwrap_err();
    assert!(matches!(err, EvalError::NestingLimitExceeded { .. }));
}
