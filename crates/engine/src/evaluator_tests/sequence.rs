// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Sequencing with `&&`.

use super::*;

#[tokio::test]
async fn concat_joins_without_separator() {
    let engine = TestEngine::new();
    let value = engine.eval(r#"concat "a" "b""#).await.unwrap();
    assert_eq!(value, str_value("ab"));
}

#[tokio::test]
async fn alias_dispatches_to_command() {
    let engine = TestEngine::new();
    let value = engine.eval("cat x y").await.unwrap();
    assert_eq!(value, str_value("xy"));
    assert_eq!(engine.ran(), vec!["concat"]);
}

#[tokio::test]
async fn sequence_runs_left_to_right() {
    let engine = TestEngine::new();
    engine.eval("add 1 && nothing && concat z").await.unwrap();
    assert_eq!(engine.ran(), vec!["add", "nothing", "concat"]);
}

#[tokio::test]
async fn sequence_value_concatenates_and_skips_unit() {
    let engine = TestEngine::new();
    let value = engine.eval("add 1 && nothing && concat z").await.unwrap();
    assert_eq!(value, str_value("2z"));
}

#[tokio::test]
async fn single_composition_keeps_its_type() {
    let engine = TestEngine::new();
    assert_eq!(engine.eval("add 2 3").await.unwrap(), Value::Int(5));
    assert_eq!(engine.eval("not off").await.unwrap(), Value::Bool(true));
    assert_eq!(engine.eval("nothing").await.unwrap(), Value::Unit);
    assert_eq!(engine.eval("nothing && add 1").await.unwrap(), Value::Int(2));
}

#[tokio::test]
async fn failure_stops_the_sequence() {
    let engine = TestEngine::new();
    let err = engine.eval("concat a && fail && concat b").await.unwrap_err();
    assert!(matches!(err, EvalError::Handler { ref command, .. } if command == "fail"));
    assert_eq!(engine.ran(), vec!["concat", "fail"]);
}

#[tokio::test]
async fn earlier_effects_are_not_rolled_back() {
    let engine = TestEngine::new();
    let _ = engine.eval("concat shown && fail").await.unwrap_err();
    assert_eq!(sent(&engine), vec!["```\nshown\n```"]);
}
