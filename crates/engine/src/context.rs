// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-invocation context handed to command handlers.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use acme_adapters::{ChatAdapter, ChatFile};
use acme_core::{
    escape_md_block, split_message, ChannelId, GuildId, InvocationId, UserId, CODE_BLOCK_OVERHEAD,
    MAX_MESSAGE_LENGTH,
};

use crate::error::CommandError;
use crate::registry::CommandRegistry;

/// Cooperative cancellation flag, checked before every dispatch.
///
/// The console gateway never raises it; handlers and embedding front ends
/// call [`CancelSignal::cancel`] to abandon the rest of an invocation.
#[derive(Debug, Clone, Default)]
pub struct CancelSignal(Arc<AtomicBool>);

impl CancelSignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Where a message came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Origin {
    pub guild: GuildId,
    pub channel: ChannelId,
    pub author: UserId,
}

impl Origin {
    pub fn new(
        guild: impl Into<GuildId>,
        channel: impl Into<ChannelId>,
        author: impl Into<UserId>,
    ) -> Self {
        Self {
            guild: guild.into(),
            channel: channel.into(),
            author: author.into(),
        }
    }
}

struct Invocation {
    id: InvocationId,
    origin: Origin,
    chat: Arc<dyn ChatAdapter>,
    registry: Arc<CommandRegistry>,
    prefix: String,
    cancel: CancelSignal,
}

/// Context of one message evaluation.
///
/// Cloning is cheap; clones share the invocation and differ only in whether
/// they may display output.
#[derive(Clone)]
pub struct CommandContext {
    invocation: Arc<Invocation>,
    display: bool,
}

impl CommandContext {
    pub fn new(
        id: InvocationId,
        origin: Origin,
        chat: Arc<dyn ChatAdapter>,
        registry: Arc<CommandRegistry>,
        prefix: impl Into<String>,
    ) -> Self {
        Self {
            invocation: Arc::new(Invocation {
                id,
                origin,
                chat,
                registry,
                prefix: prefix.into(),
                cancel: CancelSignal::new(),
            }),
            display: true,
        }
    }

    pub fn id(&self) -> &InvocationId {
        &self.invocation.id
    }

    pub fn origin(&self) -> &Origin {
        &self.invocation.origin
    }

    pub fn guild(&self) -> &GuildId {
        &self.invocation.origin.guild
    }

    pub fn channel(&self) -> &ChannelId {
        &self.invocation.origin.channel
    }

    pub fn author(&self) -> &UserId {
        &self.invocation.origin.author
    }

    /// Chat adapter, for handlers that report outside the invocation.
    pub fn chat(&self) -> Arc<dyn ChatAdapter> {
        Arc::clone(&self.invocation.chat)
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.invocation.registry
    }

    pub fn prefix(&self) -> &str {
        &self.invocation.prefix
    }

    pub fn cancel_signal(&self) -> &CancelSignal {
        &self.invocation.cancel
    }

    /// Whether this stage's result is shown to the user.
    pub fn display(&self) -> bool {
        self.display
    }

    pub fn with_display(&self, display: bool) -> Self {
        Self {
            invocation: Arc::clone(&self.invocation),
            display,
        }
    }

    /// Send text, split into messages that fit the length limit.
    pub async fn send(&self, text: &str) -> Result<(), CommandError> {
        for page in split_message(text, MAX_MESSAGE_LENGTH) {
            if !page.is_empty() {
                self.invocation.chat.send(self.channel(), &page).await?;
            }
        }
        Ok(())
    }

    /// Send text as fenced code blocks. Empty text sends nothing.
    pub async fn send_block(&self, text: &str) -> Result<(), CommandError> {
        self.send_block_as(text, "").await
    }

    /// Send text as fenced code blocks tagged with a highlighting language.
    pub async fn send_block_as(&self, text: &str, language: &str) -> Result<(), CommandError> {
        if text.trim().is_empty() {
            return Ok(());
        }
        let escaped = escape_md_block(text);
        let limit = MAX_MESSAGE_LENGTH.saturating_sub(CODE_BLOCK_OVERHEAD + language.len());
        for page in split_message(&escaped, limit) {
            let block = format!("```{language}\n{page}\n```");
            self.invocation.chat.send(self.channel(), &block).await?;
        }
        Ok(())
    }

    /// Send `text` only when displaying.
    pub async fn show(&self, text: &str) -> Result<(), CommandError> {
        if self.display {
            self.send(text).await?;
        }
        Ok(())
    }

    /// Send `text` in code blocks only when displaying.
    pub async fn show_block(&self, text: &str) -> Result<(), CommandError> {
        if self.display {
            self.send_block(text).await?;
        }
        Ok(())
    }

    /// Most recent channel file with this name.
    pub async fn find_file(&self, name: &str) -> Result<Option<ChatFile>, CommandError> {
        Ok(self.invocation.chat.find_file(self.channel(), name).await?)
    }

    pub async fn upload(&self, file: ChatFile) -> Result<(), CommandError> {
        Ok(self.invocation.chat.upload(self.channel(), file).await?)
    }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
