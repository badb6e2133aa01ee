// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Console chat: messages go to a writer, files to a directory.

use std::io::Write;

use acme_core::ChannelId;
use async_trait::async_trait;
use parking_lot::Mutex;

use super::{ChatAdapter, ChatError, ChatFile, DirectoryFiles};

/// Chat adapter for running the bot from a terminal.
///
/// There is a single channel; the channel argument is only logged.
pub struct ConsoleChat {
    out: Mutex<Box<dyn Write + Send>>,
    files: Option<DirectoryFiles>,
}

impl ConsoleChat {
    /// Console chat writing to stdout.
    pub fn stdout(files: Option<DirectoryFiles>) -> Self {
        Self::with_writer(Box::new(std::io::stdout()), files)
    }

    pub fn with_writer(out: Box<dyn Write + Send>, files: Option<DirectoryFiles>) -> Self {
        Self {
            out: Mutex::new(out),
            files,
        }
    }
}

#[async_trait]
impl ChatAdapter for ConsoleChat {
    async fn send(&self, _channel: &ChannelId, text: &str) -> Result<(), ChatError> {
        let mut out = self.out.lock();
        writeln!(out, "{text}").and_then(|()| out.flush())?;
        Ok(())
    }

    async fn find_file(
        &self,
        _channel: &ChannelId,
        name: &str,
    ) -> Result<Option<ChatFile>, ChatError> {
        match &self.files {
            Some(files) => files.find(name).await,
            None => Ok(None),
        }
    }

    async fn upload(&self, channel: &ChannelId, file: ChatFile) -> Result<(), ChatError> {
        let Some(files) = &self.files else {
            return Err(ChatError::Unsupported(
                "no files directory configured".to_string(),
            ));
        };
        let path = files.store(&file).await?;
        self.send(channel, &format!("[attached {}]", path.display()))
            .await
    }
}

#[cfg(test)]
#[path = "console_tests.rs"]
mod tests;
