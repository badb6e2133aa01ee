// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

mod concurrency;
mod display;
mod errors;
mod pipeline;
mod sequence;
mod substitution;

use super::*;
use crate::test_helpers::{channel, origin, TestEngine};
use crate::error::ArgumentError;
use acme_adapters::ChatCall;

fn str_value(s: &str) -> Value {
    Value::Str(s.to_string())
}

/// Messages sent to the test channel, in order.
fn sent(engine: &TestEngine) -> Vec<String> {
    engine
        .chat
        .calls()
        .into_iter()
        .filter_map(|c| match c {
            ChatCall::Send { channel: ch, text } if ch == channel() => Some(text),
            _ => None,
        })
        .collect()
}
