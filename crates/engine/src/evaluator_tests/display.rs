// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Which stages may send output.

use super::*;

#[tokio::test]
async fn only_final_stage_displays() {
    let engine = TestEngine::new();
    engine.eval("concat a | concat b | concat c").await.unwrap();
    assert_eq!(sent(&engine), vec!["```\nabc\n```"]);
}

#[tokio::test]
async fn arguments_never_display() {
    let engine = TestEngine::new();
    engine.eval("concat (concat inner) outer").await.unwrap();
    assert_eq!(sent(&engine), vec!["```\ninnerouter\n```"]);
}

#[tokio::test]
async fn each_composition_displays_its_final_stage() {
    let engine = TestEngine::new();
    engine.eval("concat a | concat b && concat c").await.unwrap();
    assert_eq!(sent(&engine), vec!["```\nab\n```", "```\nc\n```"]);
}

#[tokio::test]
async fn terminal_literal_is_shown_in_block() {
    let engine = TestEngine::new();
    let value = engine.eval(r#""just text""#).await.unwrap();
    assert_eq!(value, str_value("just text"));
    assert_eq!(sent(&engine), vec!["```\njust text\n```"]);
}

#[tokio::test]
async fn terminal_file_is_shown_in_block() {
    let engine = TestEngine::new();
    engine.chat.add_file(&channel(), "notes.md", "hello");
    engine.eval("[notes.md]").await.unwrap();
    assert_eq!(sent(&engine), vec!["```\nhello\n```"]);
}

#[tokio::test]
async fn literal_feeding_a_pipeline_is_not_shown() {
    let engine = TestEngine::new();
    engine.eval(r#""x" | concat y"#).await.unwrap();
    assert_eq!(sent(&engine), vec!["```\nxy\n```"]);
}

#[tokio::test]
async fn head_substitution_displays_its_own_final_stages() {
    let engine = TestEngine::new();
    engine.eval("(concat a && concat b)").await.unwrap();
    assert_eq!(sent(&engine), vec!["```\na\n```", "```\nb\n```"]);
}

#[tokio::test]
async fn handle_reports_errors_to_channel() {
    let engine = TestEngine::new();
    let err = engine.evaluator.handle(origin(), "nope 1").await.unwrap_err();
    assert!(matches!(err, EvalError::UnknownCommand { .. }));
    assert_eq!(sent(&engine), vec!["Error: Command `nope` not found"]);
}

#[tokio::test]
async fn handle_reports_usage_for_argument_errors() {
    let engine = TestEngine::new();
    engine.evaluator.handle(origin(), "add").await.unwrap_err();
    assert_eq!(
        sent(&engine),
        vec![
            "Error: missing required argument `a` (integer)\n\
             Command usage: `!add <a> [b=1]`\n\
             For more information, refer to `!help add`."
        ]
    );
}

#[tokio::test]
async fn handle_returns_value_without_reporting() {
    let engine = TestEngine::new();
    let value = engine.evaluator.handle(origin(), "add 1").await.unwrap();
    assert_eq!(value, Value::Int(2));
    assert!(sent(&engine).is_empty());
}
