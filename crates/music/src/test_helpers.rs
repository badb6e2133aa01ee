// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for the music crate.

use std::sync::Arc;
use std::time::Duration;

use acme_adapters::{
    FakeChat, FakeTrackSource, FakeVoice, VoiceAdapter, VoiceChannel, VoiceEvent,
};
use acme_core::{ChannelId, GuildId, SequentialIdGen, Track, Value};
use acme_engine::{CommandRegistry, EvalConfig, EvalError, Evaluator, Origin};
use tokio::sync::mpsc;

use crate::{AccessCode, Music, Player, SharedPlayer};

pub(crate) fn guild() -> GuildId {
    GuildId::new("guild-1")
}

pub(crate) fn track(name: &str) -> Track {
    Track::new(name, format!("https://t/{name}"), 61)
}

pub(crate) fn url(name: &str) -> String {
    format!("https://t/{name}")
}

/// A player connected through `voice`, plus its event stream.
pub(crate) async fn connected_player(
    voice: &FakeVoice,
) -> (Player, mpsc::UnboundedReceiver<VoiceEvent>) {
    let channel = VoiceChannel {
        id: ChannelId::new("voice-Lounge"),
        name: "Lounge".to_string(),
    };
    let session = voice.connect(&guild(), &channel).await.unwrap();
    let player = Player::new(guild(), channel, session.connection, AccessCode::new(123_456));
    (player, session.events)
}

/// Evaluator with the music commands, fake adapters and every user sitting
/// in the "Lounge" voice channel.
pub(crate) struct MusicHarness {
    pub evaluator: Evaluator,
    pub chat: FakeChat,
    pub voice: FakeVoice,
    pub tracks: FakeTrackSource,
    pub music: Arc<Music>,
}

impl MusicHarness {
    pub fn new() -> Self {
        Self::build(FakeVoice::new().connect_everyone("Lounge"), FakeTrackSource::new())
    }

    pub fn with_tracks(tracks: FakeTrackSource) -> Self {
        Self::build(FakeVoice::new().connect_everyone("Lounge"), tracks)
    }

    /// Nobody is in a voice channel.
    pub fn without_voice() -> Self {
        Self::build(FakeVoice::new(), FakeTrackSource::new())
    }

    fn build(voice: FakeVoice, tracks: FakeTrackSource) -> Self {
        let chat = FakeChat::new();
        let music = Arc::new(Music::new(
            Arc::new(voice.clone()),
            Arc::new(tracks.clone()),
        ));
        let mut builder = CommandRegistry::builder();
        crate::register(&mut builder, Arc::clone(&music)).unwrap();
        let evaluator = Evaluator::new(
            builder.build(),
            Arc::new(chat.clone()),
            EvalConfig::default(),
        )
        .with_id_gen(SequentialIdGen::new("inv"));
        Self {
            evaluator,
            chat,
            voice,
            tracks,
            music,
        }
    }

    pub async fn eval(&self, input: &str) -> Result<Value, EvalError> {
        self.eval_as("alice", input).await
    }

    pub async fn eval_as(&self, user: &str, input: &str) -> Result<Value, EvalError> {
        let ctx = self
            .evaluator
            .context(Origin::new("guild-1", "chan-1", user));
        self.evaluator.evaluate(input, &ctx).await
    }

    pub async fn text(&self, input: &str) -> String {
        self.eval(input).await.unwrap().into_text()
    }

    /// Error message of a failed evaluation.
    pub async fn error(&self, input: &str) -> String {
        self.eval(input).await.unwrap_err().to_string()
    }

    pub fn player(&self) -> SharedPlayer {
        self.music.players().get(&guild()).unwrap()
    }

    pub fn sent(&self) -> Vec<String> {
        self.chat.sent()
    }

    /// Queue titles starting at the current track.
    pub async fn titles(&self) -> Vec<String> {
        let player = self.player();
        let player = player.lock().await;
        player.queue().ordered().map(|t| t.title.clone()).collect()
    }

    /// Wait until the voice connection streams `url`.
    pub async fn wait_playing(&self, url: &str) {
        for _ in 0..200 {
            if self.voice.now_playing(&guild()).as_deref() == Some(url) {
                return;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        panic!(
            "never started playing {url}, now playing {:?}",
            self.voice.now_playing(&guild())
        );
    }

    /// Wait until some sent message satisfies `pred`.
    pub async fn wait_sent(&self, pred: impl Fn(&str) -> bool) {
        for _ in 0..200 {
            if self.chat.sent().iter().any(|m| pred(m)) {
                return;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        panic!("expected message never sent, got {:?}", self.chat.sent());
    }
}
