// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[tokio::test]
async fn join_announces_channel() {
    let h = MusicHarness::new();
    assert_eq!(h.eval("join").await.unwrap(), Value::Unit);

    assert_eq!(h.sent(), vec!["\u{27A1}\u{FE0F} Joining channel **Lounge**."]);
    assert_eq!(h.music.players().len(), 1);
    assert!(h.voice.calls().contains(&VoiceCall::Connect {
        guild: guild(),
        channel: "Lounge".to_string(),
    }));
}

#[tokio::test]
async fn join_without_voice_channel_fails() {
    let h = MusicHarness::without_voice();
    assert!(h.error("join").await.ends_with(NOT_CONNECTED));
    assert!(h.error("play-url https://t/a").await.ends_with(NOT_CONNECTED));
    assert!(h.music.players().is_empty());
}

#[tokio::test]
async fn player_commands_need_a_player() {
    let h = MusicHarness::new();
    for input in [
        "leave", "pause", "resume", "stop", "queue", "clear", "current", "skip", "previous",
        "loop on", "remove 0",
    ] {
        let message = h.error(input).await;
        assert!(message.ends_with(NOT_CONNECTED), "{input}: {message}");
    }
    assert!(h.music.players().is_empty());
}

#[tokio::test]
async fn failed_clear_short_circuits_sequence() {
    let h = MusicHarness::new();
    assert!(h
        .error("clear && play-url https://t/x")
        .await
        .ends_with(NOT_CONNECTED));
    assert!(h.music.players().is_empty());
    assert!(h.voice.calls().is_empty());
}

#[tokio::test]
async fn leave_returns_queue_and_drops_player() {
    let h = playing(&["a", "b"]).await;

    let export = h.text("leave").await;

    assert_eq!(
        export,
        "https://t/a    https://t/a - 1:00\nhttps://t/b    https://t/b - 1:00\n"
    );
    assert!(h.music.players().is_empty());
    assert!(h
        .voice
        .calls()
        .contains(&VoiceCall::Disconnect { guild: guild() }));
    assert_eq!(
        h.sent().last().map(String::as_str),
        Some("\u{23CF}\u{FE0F} Quitting channel **Lounge**.")
    );
}

#[tokio::test]
async fn join_after_leave_creates_new_player() {
    let h = playing(&["a"]).await;
    let old = h.player();
    h.eval("leave").await.unwrap();

    h.eval("join").await.unwrap();

    let new = h.player();
    assert!(!Arc::ptr_eq(&old, &new));
    let player = new.lock().await;
    assert!(player.queue().is_empty());
    assert_eq!(player.state(), crate::PlayerState::Idle);
    assert_eq!(
        old.lock().await.state(),
        crate::PlayerState::Disconnected
    );
}

#[tokio::test]
async fn volume_joins_and_applies() {
    let h = MusicHarness::new();
    assert_eq!(h.eval("volume 50").await.unwrap(), Value::Int(50));

    assert!(h.voice.calls().contains(&VoiceCall::SetVolume {
        guild: guild(),
        volume: 50,
    }));
    assert_eq!(h.sent(), vec!["\u{1F4E2} Volume is now at **50%**."]);
}

#[tokio::test]
async fn volume_out_of_range_is_rejected_before_joining() {
    let h = MusicHarness::new();
    for input in ["volume 1001", "volume -1"] {
        let message = h.error(input).await;
        assert!(message.contains("must be between 0 and 1000"), "{message}");
    }
    assert!(h.music.players().is_empty());
}
