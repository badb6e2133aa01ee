// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake chat adapter for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{ChatAdapter, ChatError, ChatFile};
use acme_core::ChannelId;
use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::Arc;

/// Recorded chat operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatCall {
    Send { channel: ChannelId, text: String },
    FindFile { channel: ChannelId, name: String },
    Upload { channel: ChannelId, file: ChatFile },
}

#[derive(Default)]
struct FakeChatState {
    calls: Vec<ChatCall>,
    /// Channel history, oldest first.
    files: Vec<(ChannelId, ChatFile)>,
    fail_sends: bool,
}

/// Fake chat adapter for testing
#[derive(Clone, Default)]
pub struct FakeChat {
    inner: Arc<Mutex<FakeChatState>>,
}

impl FakeChat {
    pub fn new() -> Self {
        Self::default()
    }

    /// Post a file into the channel history.
    pub fn add_file(&self, channel: &ChannelId, name: &str, content: &str) {
        self.inner
            .lock()
            .files
            .push((channel.clone(), ChatFile::new(name, content)));
    }

    /// Make every subsequent `send` fail.
    pub fn fail_sends(&self) {
        self.inner.lock().fail_sends = true;
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<ChatCall> {
        self.inner.lock().calls.clone()
    }

    /// Texts of all sent messages, in order.
    pub fn sent(&self) -> Vec<String> {
        self.inner
            .lock()
            .calls
            .iter()
            .filter_map(|c| match c {
                ChatCall::Send { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    /// Files uploaded by the bot, in order.
    pub fn uploads(&self) -> Vec<ChatFile> {
        self.inner
            .lock()
            .calls
            .iter()
            .filter_map(|c| match c {
                ChatCall::Upload { file, .. } => Some(file.clone()),
                _ => None,
            })
            .collect()
    }
}

#[async_trait]
impl ChatAdapter for FakeChat {
    async fn send(&self, channel: &ChannelId, text: &str) -> Result<(), ChatError> {
        let mut state = self.inner.lock();
        if state.fail_sends {
            return Err(ChatError::SendFailed("channel unavailable".to_string()));
        }
        state.calls.push(ChatCall::Send {
            channel: channel.clone(),
            text: text.to_string(),
        });
        Ok(())
    }

    async fn find_file(
        &self,
        channel: &ChannelId,
        name: &str,
    ) -> Result<Option<ChatFile>, ChatError> {
        let mut state = self.inner.lock();
        state.calls.push(ChatCall::FindFile {
            channel: channel.clone(),
            name: name.to_string(),
        });
        Ok(state
            .files
            .iter()
            .rev()
            .find(|(c, f)| c == channel && f.name == name)
            .map(|(_, f)| f.clone()))
    }

    async fn upload(&self, channel: &ChannelId, file: ChatFile) -> Result<(), ChatError> {
        let mut state = self.inner.lock();
        state.files.push((channel.clone(), file.clone()));
        state.calls.push(ChatCall::Upload {
            channel: channel.clone(),
            file,
        });
        Ok(())
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
