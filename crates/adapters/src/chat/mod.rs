// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Chat adapters: sending messages and looking up channel files.

mod console;
mod directory;

pub use console::ConsoleChat;
pub use directory::DirectoryFiles;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{ChatCall, FakeChat};

use acme_core::ChannelId;
use async_trait::async_trait;
use thiserror::Error;

/// Errors from chat operations
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("send failed: {0}")]
    SendFailed(String),
    #[error("invalid file name '{0}'")]
    InvalidFileName(String),
    #[error("file storage unavailable: {0}")]
    Unsupported(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// A file attached to a channel message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatFile {
    pub name: String,
    pub data: Vec<u8>,
}

impl ChatFile {
    pub fn new(name: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            data: data.into(),
        }
    }

    /// Contents decoded as UTF-8, with invalid sequences replaced.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.data).into_owned()
    }
}

/// Adapter for the chat platform
#[async_trait]
pub trait ChatAdapter: Send + Sync + 'static {
    /// Post a message to a channel.
    async fn send(&self, channel: &ChannelId, text: &str) -> Result<(), ChatError>;

    /// Most recent file named `name` in the channel's recent history.
    async fn find_file(&self, channel: &ChannelId, name: &str)
        -> Result<Option<ChatFile>, ChatError>;

    /// Attach a file to a new message in the channel.
    async fn upload(&self, channel: &ChannelId, file: ChatFile) -> Result<(), ChatError>;
}
