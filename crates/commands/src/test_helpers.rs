// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for the commands crate.

use std::sync::Arc;

use acme_adapters::FakeChat;
use acme_core::{ChannelId, SequentialIdGen, Value};
use acme_engine::{CommandRegistry, EvalConfig, EvalError, Evaluator, Origin};

use crate::ShellOptions;

pub(crate) struct Harness {
    pub evaluator: Evaluator,
    pub chat: FakeChat,
}

pub(crate) fn channel() -> ChannelId {
    ChannelId::new("chan-1")
}

impl Harness {
    /// `units` is replaced by `echo`, which prints its arguments back.
    pub fn new() -> Self {
        Self::with_units("echo")
    }

    pub fn with_units(program: &str) -> Self {
        let chat = FakeChat::new();
        let mut builder = CommandRegistry::builder();
        crate::register(
            &mut builder,
            &ShellOptions {
                units_program: program.to_string(),
            },
        )
        .unwrap();
        let evaluator = Evaluator::new(
            builder.build(),
            Arc::new(chat.clone()),
            EvalConfig::default(),
        )
        .with_id_gen(SequentialIdGen::new("inv"));
        Self { evaluator, chat }
    }

    pub fn add_file(&self, name: &str, content: &str) {
        self.chat.add_file(&channel(), name, content);
    }

    pub async fn eval(&self, input: &str) -> Result<Value, EvalError> {
        let ctx = self
            .evaluator
            .context(Origin::new("guild-1", "chan-1", "alice"));
        self.evaluator.evaluate(input, &ctx).await
    }

    pub async fn text(&self, input: &str) -> String {
        self.eval(input).await.unwrap().into_text()
    }

    pub fn sent(&self) -> Vec<String> {
        self.chat.sent()
    }
}
