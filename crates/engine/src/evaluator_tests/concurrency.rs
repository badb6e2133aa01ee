// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Independent evaluations sharing one evaluator.

use super::*;
use std::sync::Arc;

#[tokio::test]
async fn concurrent_messages_evaluate_independently() {
    let engine = Arc::new(TestEngine::new());
    let mut tasks = Vec::new();
    for i in 0..8i64 {
        let engine = Arc::clone(&engine);
        tasks.push(tokio::spawn(async move {
            engine.eval(&format!("slow 5 && add {i}")).await
        }));
    }
    for (i, task) in tasks.into_iter().enumerate() {
        let value = task.await.unwrap().unwrap();
        assert_eq!(value, str_value(&format!("done{}", i + 1)));
    }
    assert_eq!(engine.ran().len(), 16);
}

#[tokio::test]
async fn invocation_ids_are_unique() {
    let engine = TestEngine::new();
    let a = engine.evaluator.context(origin());
    let b = engine.evaluator.context(origin());
    assert_ne!(a.id(), b.id());
}
