// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Players by guild.
//!
//! Each player sits behind its own async mutex: the guild lock. Commands for
//! one guild serialize on it while other guilds proceed in parallel. The map
//! itself is only locked for lookups and never across an await.

use std::collections::HashMap;
use std::sync::{Arc, Weak};

use acme_adapters::{ChatAdapter, VoiceAdapter, VoiceEvent};
use acme_core::{ChannelId, GuildId, UserId};
use parking_lot::Mutex;
use rand::Rng;
use tokio::sync::mpsc;

use crate::error::MusicError;
use crate::player::{AccessCode, Advance, Player};
use crate::queue::describe;

/// A player behind its guild lock.
pub type SharedPlayer = Arc<tokio::sync::Mutex<Player>>;

/// Where a player posts playback notices.
#[derive(Clone)]
pub struct Notifier {
    pub chat: Arc<dyn ChatAdapter>,
    pub channel: ChannelId,
}

impl Notifier {
    async fn notify(&self, text: &str) {
        if let Err(e) = self.chat.send(&self.channel, text).await {
            tracing::warn!(channel = %self.channel, error = %e, "failed to post player notice");
        }
    }
}

pub struct PlayerRegistry {
    voice: Arc<dyn VoiceAdapter>,
    players: Mutex<HashMap<GuildId, SharedPlayer>>,
    /// Codes in use, so every live player gets a distinct one.
    codes: Mutex<HashMap<AccessCode, GuildId>>,
    /// Held while connecting so a guild never gets two players.
    joining: tokio::sync::Mutex<()>,
}

impl PlayerRegistry {
    pub fn new(voice: Arc<dyn VoiceAdapter>) -> Self {
        Self {
            voice,
            players: Mutex::new(HashMap::new()),
            codes: Mutex::new(HashMap::new()),
            joining: tokio::sync::Mutex::new(()),
        }
    }

    pub fn get(&self, guild: &GuildId) -> Option<SharedPlayer> {
        self.players.lock().get(guild).cloned()
    }

    pub fn len(&self) -> usize {
        self.players.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.lock().is_empty()
    }

    /// The guild's player, connecting to `user`'s voice channel first if
    /// there is none.
    pub async fn get_or_join(
        &self,
        guild: &GuildId,
        user: &UserId,
        notifier: Notifier,
    ) -> Result<SharedPlayer, MusicError> {
        if let Some(player) = self.get(guild) {
            return Ok(player);
        }
        let _joining = self.joining.lock().await;
        if let Some(player) = self.get(guild) {
            return Ok(player);
        }

        let channel = self
            .voice
            .user_channel(guild, user)
            .await?
            .ok_or(MusicError::NotConnected)?;
        let session = self.voice.connect(guild, &channel).await?;
        let code = self.new_access_code(guild);

        let player = Arc::new(tokio::sync::Mutex::new(Player::new(
            guild.clone(),
            channel,
            session.connection,
            code,
        )));
        spawn_event_forwarder(Arc::downgrade(&player), session.events, notifier);
        self.players.lock().insert(guild.clone(), Arc::clone(&player));

        tracing::info!(guild = %guild, access_code = %code, "created player");
        Ok(player)
    }

    /// Forget the guild's player. The caller disconnects it.
    pub fn remove(&self, guild: &GuildId) -> Option<SharedPlayer> {
        let player = self.players.lock().remove(guild)?;
        self.codes.lock().retain(|_, g| g != guild);
        tracing::info!(guild = %guild, "deleted player");
        Some(player)
    }

    fn new_access_code(&self, guild: &GuildId) -> AccessCode {
        let mut codes = self.codes.lock();
        let mut rng = rand::rng();
        loop {
            let code = AccessCode::new(rng.random_range(0..1_000_000));
            if !codes.contains_key(&code) {
                codes.insert(code, guild.clone());
                return code;
            }
        }
    }
}

/// Apply voice events to the player until its connection closes.
///
/// The guild lock is released before notices are posted.
fn spawn_event_forwarder(
    player: Weak<tokio::sync::Mutex<Player>>,
    mut events: mpsc::UnboundedReceiver<VoiceEvent>,
    notifier: Notifier,
) {
    tokio::spawn(async move {
        while let Some(event) = events.recv().await {
            let Some(shared) = player.upgrade() else {
                break;
            };
            let (guild, result) = {
                let mut player = shared.lock().await;
                let url = match &event {
                    VoiceEvent::TrackEnded { url } => url,
                    VoiceEvent::TrackFailed { url, error } => {
                        tracing::warn!(
                            guild = %player.guild(),
                            url = %url,
                            error = %error,
                            "track failed"
                        );
                        url
                    }
                };
                (player.guild().clone(), player.track_ended(url).await)
            };
            match result {
                Ok(Advance::Playing(track)) => {
                    notifier
                        .notify(&format!("\u{25B6}\u{FE0F} Playing {}.", describe(&track)))
                        .await;
                }
                Ok(Advance::Stopped) => {
                    notifier
                        .notify("\u{2757}\u{FE0F} The queue is empty, player stopped.")
                        .await;
                }
                Ok(Advance::Ignored) => {}
                Err(e) => tracing::error!(guild = %guild, error = %e, "failed to play next track"),
            }
        }
    });
}

#[cfg(test)]
#[path = "players_tests.rs"]
mod tests;
