// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake voice adapter for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{VoiceAdapter, VoiceChannel, VoiceConnection, VoiceError, VoiceEvent, VoiceSession};
use acme_core::{ChannelId, GuildId, Track, UserId};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Recorded voice operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VoiceCall {
    Connect { guild: GuildId, channel: String },
    Play { guild: GuildId, url: String, volume: u16 },
    Stop { guild: GuildId },
    Pause { guild: GuildId },
    Resume { guild: GuildId },
    SetVolume { guild: GuildId, volume: u16 },
    Disconnect { guild: GuildId },
}

#[derive(Default)]
struct FakeVoiceState {
    calls: Vec<VoiceCall>,
    user_channels: HashMap<(GuildId, UserId), VoiceChannel>,
    everyone: Option<VoiceChannel>,
    senders: HashMap<GuildId, mpsc::UnboundedSender<VoiceEvent>>,
    now_playing: HashMap<GuildId, String>,
    fail_connect: bool,
}

/// Fake voice adapter for testing
///
/// Users are not in any voice channel unless placed there with
/// [`FakeVoice::put_user`] or [`FakeVoice::connect_everyone`].
#[derive(Clone, Default)]
pub struct FakeVoice {
    inner: Arc<Mutex<FakeVoiceState>>,
}

fn voice_channel(name: &str) -> VoiceChannel {
    VoiceChannel {
        id: ChannelId::new(format!("voice-{name}")),
        name: name.to_string(),
    }
}

impl FakeVoice {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place a user in a named voice channel.
    pub fn put_user(&self, guild: &GuildId, user: &UserId, channel: &str) {
        self.inner
            .lock()
            .user_channels
            .insert((guild.clone(), user.clone()), voice_channel(channel));
    }

    /// Place every user in the same voice channel.
    pub fn connect_everyone(self, channel: &str) -> Self {
        self.inner.lock().everyone = Some(voice_channel(channel));
        self
    }

    /// Make every subsequent `connect` fail.
    pub fn fail_connect(&self) {
        self.inner.lock().fail_connect = true;
    }

    /// Simulate the current track of `guild` playing to its end.
    ///
    /// Returns `false` when nothing is playing.
    pub fn finish_track(&self, guild: &GuildId) -> bool {
        let mut state = self.inner.lock();
        let Some(url) = state.now_playing.remove(guild) else {
            return false;
        };
        match state.senders.get(guild) {
            Some(tx) => tx.send(VoiceEvent::TrackEnded { url }).is_ok(),
            None => false,
        }
    }

    /// URL currently streaming in `guild`.
    pub fn now_playing(&self, guild: &GuildId) -> Option<String> {
        self.inner.lock().now_playing.get(guild).cloned()
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<VoiceCall> {
        self.inner.lock().calls.clone()
    }

    /// URLs passed to `play` in `guild`, in order.
    pub fn played(&self, guild: &GuildId) -> Vec<String> {
        self.inner
            .lock()
            .calls
            .iter()
            .filter_map(|c| match c {
                VoiceCall::Play { guild: g, url, .. } if g == guild => Some(url.clone()),
                _ => None,
            })
            .collect()
    }
}

#[async_trait]
impl VoiceAdapter for FakeVoice {
    async fn user_channel(
        &self,
        guild: &GuildId,
        user: &UserId,
    ) -> Result<Option<VoiceChannel>, VoiceError> {
        let state = self.inner.lock();
        Ok(state
            .user_channels
            .get(&(guild.clone(), user.clone()))
            .or(state.everyone.as_ref())
            .cloned())
    }

    async fn connect(
        &self,
        guild: &GuildId,
        channel: &VoiceChannel,
    ) -> Result<VoiceSession, VoiceError> {
        let mut state = self.inner.lock();
        if state.fail_connect {
            return Err(VoiceError::ConnectFailed("connection refused".to_string()));
        }
        state.calls.push(VoiceCall::Connect {
            guild: guild.clone(),
            channel: channel.name.clone(),
        });
        let (tx, events) = mpsc::unbounded_channel();
        state.senders.insert(guild.clone(), tx);
        Ok(VoiceSession {
            connection: Arc::new(FakeConnection {
                guild: guild.clone(),
                inner: Arc::clone(&self.inner),
            }),
            events,
        })
    }
}

struct FakeConnection {
    guild: GuildId,
    inner: Arc<Mutex<FakeVoiceState>>,
}

impl FakeConnection {
    fn record(&self, call: VoiceCall) {
        self.inner.lock().calls.push(call);
    }
}

#[async_trait]
impl VoiceConnection for FakeConnection {
    async fn play(&self, track: &Track, volume: u16) -> Result<(), VoiceError> {
        let mut state = self.inner.lock();
        state
            .now_playing
            .insert(self.guild.clone(), track.url.clone());
        state.calls.push(VoiceCall::Play {
            guild: self.guild.clone(),
            url: track.url.clone(),
            volume,
        });
        Ok(())
    }

    async fn stop(&self) -> Result<(), VoiceError> {
        let mut state = self.inner.lock();
        state.now_playing.remove(&self.guild);
        state.calls.push(VoiceCall::Stop {
            guild: self.guild.clone(),
        });
        Ok(())
    }

    async fn pause(&self) -> Result<(), VoiceError> {
        self.record(VoiceCall::Pause {
            guild: self.guild.clone(),
        });
        Ok(())
    }

    async fn resume(&self) -> Result<(), VoiceError> {
        self.record(VoiceCall::Resume {
            guild: self.guild.clone(),
        });
        Ok(())
    }

    async fn set_volume(&self, volume: u16) -> Result<(), VoiceError> {
        self.record(VoiceCall::SetVolume {
            guild: self.guild.clone(),
            volume,
        });
        Ok(())
    }

    async fn disconnect(&self) -> Result<(), VoiceError> {
        let mut state = self.inner.lock();
        state.senders.remove(&self.guild);
        state.now_playing.remove(&self.guild);
        state.calls.push(VoiceCall::Disconnect {
            guild: self.guild.clone(),
        });
        Ok(())
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
