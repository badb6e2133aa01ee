// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Voice adapter without audio output.

use std::sync::Arc;

use acme_core::{ChannelId, GuildId, Track, UserId};
use async_trait::async_trait;
use tokio::sync::mpsc;

use super::{VoiceAdapter, VoiceChannel, VoiceConnection, VoiceError, VoiceSession};

/// Voice adapter that places every user in one voice channel and accepts
/// every playback operation without producing sound.
#[derive(Debug, Clone)]
pub struct ConsoleVoice {
    channel: VoiceChannel,
}

impl ConsoleVoice {
    pub fn new(channel_name: impl Into<String>) -> Self {
        let name = channel_name.into();
        Self {
            channel: VoiceChannel {
                id: ChannelId::new(format!("voice-{name}")),
                name,
            },
        }
    }
}

impl Default for ConsoleVoice {
    fn default() -> Self {
        Self::new("console")
    }
}

#[async_trait]
impl VoiceAdapter for ConsoleVoice {
    async fn user_channel(
        &self,
        _guild: &GuildId,
        _user: &UserId,
    ) -> Result<Option<VoiceChannel>, VoiceError> {
        Ok(Some(self.channel.clone()))
    }

    async fn connect(
        &self,
        guild: &GuildId,
        channel: &VoiceChannel,
    ) -> Result<VoiceSession, VoiceError> {
        tracing::info!(%guild, channel = %channel.name, "voice connected (no audio)");
        let (tx, events) = mpsc::unbounded_channel();
        Ok(VoiceSession {
            connection: Arc::new(SilentConnection { _events: tx }),
            events,
        })
    }
}

/// Keeps the event sender alive so the receiver stays open until disconnect.
struct SilentConnection {
    _events: mpsc::UnboundedSender<super::VoiceEvent>,
}

#[async_trait]
impl VoiceConnection for SilentConnection {
    async fn play(&self, track: &Track, volume: u16) -> Result<(), VoiceError> {
        tracing::debug!(url = %track.url, volume, "play");
        Ok(())
    }

    async fn stop(&self) -> Result<(), VoiceError> {
        Ok(())
    }

    async fn pause(&self) -> Result<(), VoiceError> {
        Ok(())
    }

    async fn resume(&self) -> Result<(), VoiceError> {
        Ok(())
    }

    async fn set_volume(&self, volume: u16) -> Result<(), VoiceError> {
        tracing::debug!(volume, "set volume");
        Ok(())
    }

    async fn disconnect(&self) -> Result<(), VoiceError> {
        Ok(())
    }
}
