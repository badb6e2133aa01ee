// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Console gateway.
//!
//! Every input line is a message from one user in one channel. Lines that
//! start with the prefix are evaluated, each on its own task, so a slow
//! command never holds up the next message.

use std::sync::Arc;

use acme_engine::{Evaluator, Origin};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::task::JoinSet;

/// Counts for one run of the gateway.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GatewaySummary {
    /// Messages that were evaluated.
    pub handled: usize,
    /// Evaluations that ended in an error.
    pub failed: usize,
}

pub struct ConsoleGateway {
    evaluator: Arc<Evaluator>,
    origin: Origin,
}

impl ConsoleGateway {
    pub fn new(evaluator: Arc<Evaluator>, origin: Origin) -> Self {
        Self { evaluator, origin }
    }

    /// Read messages until end of input, then wait for in-flight evaluations.
    pub async fn run<R>(&self, input: R) -> std::io::Result<GatewaySummary>
    where
        R: AsyncBufRead + Unpin,
    {
        let prefix = self.evaluator.config().prefix.clone();
        let mut lines = input.lines();
        let mut tasks = JoinSet::new();
        let mut summary = GatewaySummary::default();

        while let Some(line) = lines.next_line().await? {
            let Some(message) = strip_prefix(&line, &prefix) else {
                tracing::trace!("ignoring message without prefix");
                continue;
            };
            let evaluator = Arc::clone(&self.evaluator);
            let origin = self.origin.clone();
            let message = message.to_string();
            tasks.spawn(async move { evaluator.handle(origin, &message).await.is_ok() });
            summary.handled += 1;
        }

        tracing::debug!(pending = tasks.len(), "end of input, draining");
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok(true) => {}
                Ok(false) => summary.failed += 1,
                Err(e) => {
                    tracing::error!(error = %e, "evaluation task aborted");
                    summary.failed += 1;
                }
            }
        }
        Ok(summary)
    }
}

/// Message text after the prefix, or `None` when the line is not a command.
pub fn strip_prefix<'a>(line: &'a str, prefix: &str) -> Option<&'a str> {
    let rest = line.trim_end_matches('\r').strip_prefix(prefix)?;
    (!rest.trim().is_empty()).then_some(rest)
}

#[cfg(test)]
#[path = "gateway_tests.rs"]
mod tests;
