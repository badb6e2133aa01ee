// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced adapter wrappers for consistent observability

use crate::chat::{ChatAdapter, ChatError, ChatFile};
use acme_core::ChannelId;
use async_trait::async_trait;
use tracing::Instrument;

/// Wrapper that adds tracing to any ChatAdapter
pub struct TracedChat<C> {
    inner: C,
}

impl<C> TracedChat<C> {
    pub fn new(inner: C) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<C: ChatAdapter> ChatAdapter for TracedChat<C> {
    async fn send(&self, channel: &ChannelId, text: &str) -> Result<(), ChatError> {
        tracing::info_span!("chat.send", %channel)
            .in_scope(|| tracing::debug!(text_len = text.len(), "sending"));
        let result = self.inner.send(channel, text).await;
        if let Err(ref e) = result {
            tracing::error!(%channel, error = %e, "send failed");
        }
        result
    }

    async fn find_file(
        &self,
        channel: &ChannelId,
        name: &str,
    ) -> Result<Option<ChatFile>, ChatError> {
        async {
            let start = std::time::Instant::now();
            let result = self.inner.find_file(channel, name).await;
            let elapsed_ms = start.elapsed().as_millis() as u64;
            match &result {
                Ok(Some(file)) => tracing::debug!(bytes = file.data.len(), elapsed_ms, "found"),
                Ok(None) => tracing::debug!(elapsed_ms, "not found"),
                Err(e) => tracing::error!(elapsed_ms, error = %e, "lookup failed"),
            }
            result
        }
        .instrument(tracing::info_span!("chat.find_file", %channel, name))
        .await
    }

    async fn upload(&self, channel: &ChannelId, file: ChatFile) -> Result<(), ChatError> {
        let span = tracing::info_span!("chat.upload", %channel, name = %file.name);
        async {
            let bytes = file.data.len();
            let result = self.inner.upload(channel, file).await;
            match &result {
                Ok(()) => tracing::info!(bytes, "uploaded"),
                Err(e) => tracing::error!(error = %e, "upload failed"),
            }
            result
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
