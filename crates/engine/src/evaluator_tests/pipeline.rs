// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Pipelines with `|`.

use super::*;

#[tokio::test]
async fn piped_value_becomes_first_argument() {
    let engine = TestEngine::new();
    let value = engine.eval("concat a | concat b").await.unwrap();
    assert_eq!(value, str_value("ab"));
}

#[tokio::test]
async fn stages_run_in_order() {
    let engine = TestEngine::new();
    let value = engine.eval("add 1 | add 10 | add").await.unwrap();
    assert_eq!(value, Value::Int(13));
    assert_eq!(engine.ran(), vec!["add", "add", "add"]);
}

#[tokio::test]
async fn literal_head_feeds_command() {
    let engine = TestEngine::new();
    let value = engine.eval(r#""41" | add"#).await.unwrap();
    assert_eq!(value, Value::Int(42));
}

#[tokio::test]
async fn uncoercible_piped_value_is_argument_error() {
    let engine = TestEngine::new();
    let err = engine.eval(r#""hello" | add"#).await.unwrap_err();
    match err {
        EvalError::Argument {
            command, source, ..
        } => {
            assert_eq!(command, "add");
            assert_eq!(
                source,
                ArgumentError::Type {
                    param: "a".to_string(),
                    expected: "integer",
                    found: "string \"hello\"".to_string(),
                }
            );
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(engine.ran().is_empty());
}

#[tokio::test]
async fn piped_value_plus_own_arguments_can_overflow_signature() {
    let engine = TestEngine::new();
    let err = engine.eval("add 1 | add 2 3").await.unwrap_err();
    assert!(matches!(
        err,
        EvalError::Argument {
            source: ArgumentError::TooMany { max: 2, got: 3 },
            ..
        }
    ));
    assert_eq!(engine.ran(), vec!["add"]);
}

#[tokio::test]
async fn unit_is_not_piped() {
    let engine = TestEngine::new();
    let value = engine.eval("nothing | add 4").await.unwrap();
    assert_eq!(value, Value::Int(5));
}

#[tokio::test]
async fn file_head_is_read_from_channel() {
    let engine = TestEngine::new();
    engine.chat.add_file(&channel(), "n.txt", "7\n");
    let value = engine.eval("[n.txt] | add").await.unwrap();
    assert_eq!(value, Value::Int(8));
}

#[tokio::test]
async fn failing_stage_aborts_pipeline() {
    let engine = TestEngine::new();
    let err = engine.eval("concat a | fail | concat b").await.unwrap_err();
    assert!(matches!(err, EvalError::Handler { .. }));
    assert_eq!(engine.ran(), vec!["concat", "fail"]);
}
