// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[tokio::test]
async fn empty_queue_is_reported() {
    let h = MusicHarness::new();
    h.eval("join").await.unwrap();
    for input in ["queue", "skip", "previous", "remove 0"] {
        let message = h.error(input).await;
        assert!(message.ends_with("The queue is empty!"), "{input}: {message}");
    }
}

#[tokio::test]
async fn queue_lists_and_exports() {
    let h = playing(&["a", "b"]).await;

    let export = h.text("queue").await;

    assert_eq!(
        export,
        "https://t/a    https://t/a - 1:00\nhttps://t/b    https://t/b - 1:00\n"
    );
    assert_eq!(
        h.sent().last().map(String::as_str),
        Some(
            "\u{1F3BC} Current queue:\n\
             0. **https://t/a** - 1:00\n\
             1. **https://t/b** - 1:00"
        )
    );
}

#[tokio::test]
async fn queue_in_substitution_is_silent() {
    let h = playing(&["a"]).await;
    let before = h.sent().len();
    h.eval("list-urls (queue)").await.unwrap();
    let sent = h.sent();
    assert_eq!(sent.len(), before + 1);
    assert_eq!(sent[before], "\u{2705}\u{FE0F} Extracted 1 tracks.");
}

#[tokio::test]
async fn clear_returns_removed_tracks() {
    let h = playing(&["a", "b"]).await;

    let export = h.text("clear").await;

    assert_eq!(export.lines().count(), 2);
    assert_eq!(
        h.sent().last().map(String::as_str),
        Some("\u{2716}\u{FE0F} Queue cleared.")
    );
    assert!(h.error("queue").await.ends_with("The queue is empty!"));
    assert_eq!(h.voice.now_playing(&guild()), None);
}

#[tokio::test]
async fn remove_is_relative_to_current_track() {
    let h = playing(&["a", "b", "c"]).await;
    h.eval("skip").await.unwrap();

    assert!(h.text("remove 1").await.starts_with(&url("c")));
    assert_eq!(h.titles().await, vec![url("b"), url("a")]);
    assert_eq!(
        h.sent().last().map(String::as_str),
        Some("\u{2796} **https://t/c** removed from the queue.")
    );

    assert!(h.text("remo -1").await.starts_with(&url("a")));
    assert_eq!(h.titles().await, vec![url("b")]);
}

#[tokio::test]
async fn removing_current_track_plays_next() {
    let h = playing(&["a", "b"]).await;
    h.eval("remove 0").await.unwrap();
    assert_eq!(h.voice.now_playing(&guild()), Some(url("b")));
}

#[tokio::test]
async fn huge_offsets_wrap_around_the_queue() {
    let h = playing(&["a", "b", "c"]).await;
    h.eval("skip").await.unwrap();

    assert!(h.text("remove 9223372036854775807").await.starts_with(&url("c")));
    assert_eq!(h.titles().await, vec![url("b"), url("a")]);
    assert_eq!(h.voice.now_playing(&guild()), Some(url("b")));

    assert!(h.text("skip 9223372036854775807").await.starts_with(&url("a")));
    assert_eq!(h.voice.now_playing(&guild()), Some(url("a")));
}

#[tokio::test]
async fn huge_offset_landing_on_current_track_plays_next() {
    let h = playing(&["a", "b", "c"]).await;

    assert!(h.text("remove 9223372036854775806").await.starts_with(&url("a")));
    assert_eq!(h.titles().await, vec![url("b"), url("c")]);
    assert_eq!(h.voice.now_playing(&guild()), Some(url("b")));
}
