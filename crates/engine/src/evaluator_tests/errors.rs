// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error propagation.

use super::*;
use std::time::Duration;

#[tokio::test]
async fn syntax_error_runs_nothing() {
    let engine = TestEngine::new();
    let err = engine.eval("concat a && concat 'unterminated").await.unwrap_err();
    assert!(matches!(err, EvalError::Syntax(_)));
    assert!(engine.ran().is_empty());
}

#[tokio::test]
async fn unknown_command_names_the_token() {
    let engine = TestEngine::new();
    let input = "concat a | frobnicate";
    let err = engine.eval(input).await.unwrap_err();
    match err {
        EvalError::UnknownCommand { name, span } => {
            assert_eq!(name, "frobnicate");
            assert_eq!(span.slice(input), "frobnicate");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn unknown_command_has_no_side_effects_in_its_composition() {
    let engine = TestEngine::new();
    engine.eval("concat a | frobnicate").await.unwrap_err();
    engine.eval("concat (add 1) (frobnicate)").await.unwrap_err();
    assert!(engine.ran().is_empty());
    assert!(sent(&engine).is_empty());
}

#[tokio::test]
async fn unknown_command_in_later_composition_keeps_earlier_effects() {
    let engine = TestEngine::new();
    engine.eval("add 1 && frobnicate").await.unwrap_err();
    assert_eq!(engine.ran(), vec!["add"]);
}

#[tokio::test]
async fn missing_file_aborts_before_consumer_runs() {
    let engine = TestEngine::new();
    let err = engine.eval("concat [x.txt] | concat y").await.unwrap_err();
    assert!(matches!(err, EvalError::FileNotFound { ref name, .. } if name == "x.txt"));
    assert!(engine.ran().is_empty());
}

#[tokio::test]
async fn handler_error_wraps_cause() {
    let engine = TestEngine::new();
    let err = engine.eval("fail 'disk on fire'").await.unwrap_err();
    match err {
        EvalError::Handler {
            command, source, ..
        } => {
            assert_eq!(command, "fail");
            assert_eq!(source.to_string(), "disk on fire");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn handler_range_error_keeps_parameter() {
    let engine = TestEngine::new();
    let err = engine.eval("take 0").await.unwrap_err();
    assert!(matches!(
        err,
        EvalError::Handler {
            source: CommandError::Argument(ArgumentError::Range { ref param, .. }),
            ..
        } if param == "count"
    ));
}

#[tokio::test]
async fn cancellation_is_checked_at_dispatch() {
    let engine = TestEngine::new();
    let err = engine.eval("abort && add 1").await.unwrap_err();
    assert!(matches!(err, EvalError::Cancelled));
    assert_eq!(engine.ran(), vec!["abort"]);
}

#[tokio::test]
async fn cancelled_context_runs_nothing() {
    let engine = TestEngine::new();
    let ctx = engine.evaluator.context(origin());
    ctx.cancel_signal().cancel();
    let err = engine.evaluator.evaluate("add 1", &ctx).await.unwrap_err();
    assert!(matches!(err, EvalError::Cancelled));
    assert!(engine.ran().is_empty());
}

#[tokio::test(start_paused = true)]
async fn command_timeout_is_a_handler_error() {
    let engine = TestEngine::with_config(EvalConfig {
        command_timeout: Some(Duration::from_millis(10)),
        ..EvalConfig::default()
    });
    let err = engine.eval("slow 1000").await.unwrap_err();
    assert!(matches!(
        err,
        EvalError::Handler {
            source: CommandError::Timeout(_),
            ..
        }
    ));
    assert_eq!(engine.eval("slow 5").await.unwrap(), str_value("done"));
}
