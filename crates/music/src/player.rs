// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-guild music player.
//!
//! A player owns the guild's queue and voice connection. It is always used
//! behind the guild lock, so every method sees and leaves a consistent
//! queue.

use std::fmt;
use std::sync::Arc;

use acme_adapters::{VoiceChannel, VoiceConnection};
use acme_core::{GuildId, Track};

use crate::error::MusicError;
use crate::queue::MusicQueue;

/// Highest accepted volume, in percent.
pub const MAX_VOLUME: u16 = 1000;

/// Volume of a new player, in percent.
pub const DEFAULT_VOLUME: u16 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerState {
    /// Nothing queued yet, or the queue was emptied.
    Idle,
    Playing,
    Paused,
    /// Stopped by a user or at the end of a non-looping queue.
    Stopped,
    Disconnected,
}

impl fmt::Display for PlayerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PlayerState::Idle => "idle",
            PlayerState::Playing => "playing",
            PlayerState::Paused => "paused",
            PlayerState::Stopped => "stopped",
            PlayerState::Disconnected => "disconnected",
        };
        write!(f, "{s}")
    }
}

/// Six-digit code identifying a player across guilds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AccessCode(u32);

impl AccessCode {
    /// Codes are taken modulo one million.
    pub fn new(code: u32) -> Self {
        Self(code % 1_000_000)
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for AccessCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:06}", self.0)
    }
}

/// What happened when a track finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    /// The event did not match the playing track.
    Ignored,
    /// End of a non-looping queue.
    Stopped,
    Playing(Track),
}

pub struct Player {
    guild: GuildId,
    channel: VoiceChannel,
    connection: Arc<dyn VoiceConnection>,
    queue: MusicQueue,
    state: PlayerState,
    volume: u16,
    access_code: AccessCode,
}

impl Player {
    pub fn new(
        guild: GuildId,
        channel: VoiceChannel,
        connection: Arc<dyn VoiceConnection>,
        access_code: AccessCode,
    ) -> Self {
        Self {
            guild,
            channel,
            connection,
            queue: MusicQueue::new(),
            state: PlayerState::Idle,
            volume: DEFAULT_VOLUME,
            access_code,
        }
    }

    pub fn guild(&self) -> &GuildId {
        &self.guild
    }

    pub fn channel(&self) -> &VoiceChannel {
        &self.channel
    }

    pub fn state(&self) -> PlayerState {
        self.state
    }

    pub fn volume(&self) -> u16 {
        self.volume
    }

    pub fn access_code(&self) -> AccessCode {
        self.access_code
    }

    pub fn queue(&self) -> &MusicQueue {
        &self.queue
    }

    pub fn current(&self) -> Option<&Track> {
        self.queue.current()
    }

    /// Fails once the player has left its voice channel.
    pub fn ensure_connected(&self) -> Result<(), MusicError> {
        if self.state == PlayerState::Disconnected {
            return Err(MusicError::NotConnected);
        }
        Ok(())
    }

    /// Fails when there is nothing in the queue.
    pub fn ensure_not_empty(&self) -> Result<(), MusicError> {
        if self.queue.is_empty() {
            return Err(MusicError::EmptyQueue);
        }
        Ok(())
    }

    /// Append tracks to the queue. An idle player starts playing the first
    /// of them, which is returned.
    pub async fn enqueue(&mut self, tracks: Vec<Track>) -> Result<Option<Track>, MusicError> {
        let was_idle = self.state == PlayerState::Idle;
        self.queue.extend(tracks);
        if was_idle && !self.queue.is_empty() {
            return self.play_current().await.map(Some);
        }
        Ok(None)
    }

    /// Jump `offset` tracks from the current one and play it.
    pub async fn skip(&mut self, offset: i64) -> Result<Track, MusicError> {
        if self.queue.seek(offset).is_none() {
            return Err(MusicError::EmptyQueue);
        }
        self.play_current().await
    }

    pub async fn pause(&mut self) -> Result<(), MusicError> {
        if self.state != PlayerState::Playing {
            return Err(MusicError::NotPlaying);
        }
        self.connection.pause().await?;
        self.state = PlayerState::Paused;
        Ok(())
    }

    /// Continue a paused track, or restart the current one after a stop.
    pub async fn resume(&mut self) -> Result<Track, MusicError> {
        match self.state {
            PlayerState::Paused => {
                let track = self.queue.current().cloned().ok_or(MusicError::EmptyQueue)?;
                self.connection.resume().await?;
                self.state = PlayerState::Playing;
                Ok(track)
            }
            PlayerState::Stopped => self.play_current().await,
            _ => Err(MusicError::NotPaused),
        }
    }

    pub async fn stop(&mut self) -> Result<(), MusicError> {
        self.connection.stop().await?;
        if self.state != PlayerState::Idle {
            self.state = PlayerState::Stopped;
        }
        Ok(())
    }

    /// Empty the queue, returning its export.
    pub async fn clear(&mut self) -> Result<String, MusicError> {
        let export = self.queue.export();
        self.queue.clear();
        self.connection.stop().await?;
        self.state = PlayerState::Idle;
        Ok(export)
    }

    pub async fn set_volume(&mut self, volume: u16) -> Result<(), MusicError> {
        if volume > MAX_VOLUME {
            return Err(MusicError::InvalidVolume(volume));
        }
        self.connection.set_volume(volume).await?;
        self.volume = volume;
        Ok(())
    }

    pub fn set_looping(&mut self, looping: bool) {
        self.queue.set_looping(looping);
    }

    /// Remove the track `offset` positions from the current one.
    ///
    /// Removing the current track moves playback on to the next one.
    pub async fn remove(&mut self, offset: i64) -> Result<Track, MusicError> {
        self.ensure_not_empty()?;
        let was_current = self.queue.position(offset) == Some(self.queue.index());
        let removed = self.queue.remove(offset).ok_or(MusicError::EmptyQueue)?;

        if self.queue.is_empty() {
            self.connection.stop().await?;
            self.state = PlayerState::Idle;
        } else if was_current && matches!(self.state, PlayerState::Playing | PlayerState::Paused) {
            self.play_current().await?;
        }
        Ok(removed)
    }

    /// React to the end of the track at `url`.
    pub async fn track_ended(&mut self, url: &str) -> Result<Advance, MusicError> {
        let is_current = self.queue.current().is_some_and(|t| t.url == url);
        if self.state != PlayerState::Playing || !is_current {
            return Ok(Advance::Ignored);
        }
        if self.queue.should_stop() {
            self.state = PlayerState::Stopped;
            return Ok(Advance::Stopped);
        }
        self.queue.advance();
        self.play_current().await.map(Advance::Playing)
    }

    /// Leave the voice channel, returning the queue export.
    pub async fn disconnect(&mut self) -> Result<String, MusicError> {
        let export = self.queue.export();
        self.state = PlayerState::Disconnected;
        self.connection.disconnect().await?;
        Ok(export)
    }

    async fn play_current(&mut self) -> Result<Track, MusicError> {
        let track = self.queue.current().cloned().ok_or(MusicError::EmptyQueue)?;
        self.connection.play(&track, self.volume).await?;
        self.state = PlayerState::Playing;
        tracing::info!(guild = %self.guild, url = %track.url, "playing track");
        Ok(track)
    }
}

#[cfg(test)]
#[path = "player_tests.rs"]
mod tests;
