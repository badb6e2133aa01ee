// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Voice adapters: joining voice channels and controlling playback.

mod console;

pub use console::ConsoleVoice;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeVoice, VoiceCall};

use std::sync::Arc;

use acme_core::{ChannelId, GuildId, Track, UserId};
use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::mpsc;

/// Errors from voice operations
#[derive(Debug, Error)]
pub enum VoiceError {
    #[error("voice connection failed: {0}")]
    ConnectFailed(String),
    #[error("playback failed: {0}")]
    PlaybackFailed(String),
    #[error("voice connection closed")]
    Disconnected,
}

/// A voice channel a user can be connected to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceChannel {
    pub id: ChannelId,
    pub name: String,
}

/// Playback notifications from a voice connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VoiceEvent {
    /// The track played to its end. Not sent after an explicit `stop`.
    TrackEnded { url: String },
    /// The track could not be streamed.
    TrackFailed { url: String, error: String },
}

/// An open voice connection plus its event stream.
pub struct VoiceSession {
    pub connection: Arc<dyn VoiceConnection>,
    pub events: mpsc::UnboundedReceiver<VoiceEvent>,
}

/// Adapter for the chat platform's voice features
#[async_trait]
pub trait VoiceAdapter: Send + Sync + 'static {
    /// Voice channel the user is currently in, if any.
    async fn user_channel(
        &self,
        guild: &GuildId,
        user: &UserId,
    ) -> Result<Option<VoiceChannel>, VoiceError>;

    /// Connect to a voice channel.
    async fn connect(
        &self,
        guild: &GuildId,
        channel: &VoiceChannel,
    ) -> Result<VoiceSession, VoiceError>;
}

/// Playback controls for one connected voice channel.
///
/// Volume is a percentage from 0 to 1000.
#[async_trait]
pub trait VoiceConnection: Send + Sync {
    /// Start streaming `track`, replacing whatever is playing.
    async fn play(&self, track: &Track, volume: u16) -> Result<(), VoiceError>;
    async fn stop(&self) -> Result<(), VoiceError>;
    async fn pause(&self) -> Result<(), VoiceError>;
    async fn resume(&self) -> Result<(), VoiceError>;
    async fn set_volume(&self, volume: u16) -> Result<(), VoiceError>;
    async fn disconnect(&self) -> Result<(), VoiceError>;
}
