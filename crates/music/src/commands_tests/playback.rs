// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

fn rick() -> Track {
    Track::new("Never", "https://yt/1", 213).with_uploader("Rick")
}

#[tokio::test]
async fn play_searches_youtube_and_starts() {
    let tracks =
        FakeTrackSource::new().with_search(SearchProvider::Youtube, "never gonna give", vec![rick()]);
    let h = MusicHarness::with_tracks(tracks);

    let value = h.text("play never gonna give").await;

    assert_eq!(value, "https://yt/1    Never - 3:33\n");
    assert_eq!(
        h.tracks.searches(),
        vec![(SearchProvider::Youtube, "never gonna give".to_string())]
    );
    assert_eq!(h.voice.played(&guild()), vec!["https://yt/1"]);
    assert_eq!(h.sent(), vec!["\u{25B6}\u{FE0F} Playing **Never** by Rick."]);
}

#[tokio::test]
async fn play_snd_searches_soundcloud_and_queues() {
    let tracks = FakeTrackSource::new()
        .with_search(SearchProvider::Youtube, "first", vec![rick()])
        .with_search(
            SearchProvider::Soundcloud,
            "second",
            vec![Track::new("Waves", "https://sc/2", 90)],
        );
    let h = MusicHarness::with_tracks(tracks);

    h.eval("play first").await.unwrap();
    h.eval("psnd second").await.unwrap();

    assert_eq!(
        h.sent().last().map(String::as_str),
        Some("\u{2795} **Waves** added to the queue.")
    );
    assert_eq!(h.titles().await, vec!["Never", "Waves"]);
    assert_eq!(h.voice.played(&guild()), vec!["https://yt/1"]);
}

#[tokio::test]
async fn play_without_results_fails() {
    let h = MusicHarness::new();
    let message = h.error(r#"play "nothing here""#).await;
    assert!(message.contains("No tracks found for the query 'nothing here'"), "{message}");
    assert!(h.voice.played(&guild()).is_empty());
}

#[tokio::test]
async fn play_without_query_is_an_argument_error() {
    let h = MusicHarness::new();
    let message = h.error("play").await;
    assert!(message.contains("missing required argument `query`"), "{message}");
}

#[tokio::test]
async fn play_url_queues_every_url() {
    let h = MusicHarness::new();
    let value = h.text("play-url https://t/a https://t/b").await;

    assert_eq!(
        value,
        "https://t/a    https://t/a - 1:00\nhttps://t/b    https://t/b - 1:00\n"
    );
    assert_eq!(
        h.sent(),
        vec![
            "\u{2705}\u{FE0F} Extracted 2 tracks.",
            "\u{25B6}\u{FE0F} Playing **https://t/a**.",
        ]
    );
}

#[tokio::test]
async fn play_url_expands_playlists() {
    let tracks = FakeTrackSource::new().with_url(
        "https://t/list",
        vec![Track::new("one", "https://t/1", 1), Track::new("two", "https://t/2", 2)],
    );
    let h = MusicHarness::with_tracks(tracks);

    h.eval("purl https://t/list").await.unwrap();

    assert_eq!(h.titles().await, vec!["one", "two"]);
}

#[tokio::test]
async fn queue_output_pipes_back_into_play_url() {
    let h = playing(&["a", "b"]).await;

    h.eval("queue | play-url").await.unwrap();

    assert_eq!(
        h.titles().await,
        vec![url("a"), url("b"), url("a"), url("b")]
    );
}

#[tokio::test]
async fn list_urls_extracts_without_queueing() {
    let h = MusicHarness::new();
    let value = h.text("lurl https://t/x").await;

    assert_eq!(value, "https://t/x    https://t/x - 1:00\n");
    assert_eq!(h.sent(), vec!["\u{2705}\u{FE0F} Extracted 1 tracks."]);
    assert!(h.music.players().is_empty());
}

#[tokio::test]
async fn skip_and_previous_move_through_the_ring() {
    let h = playing(&["a", "b", "c"]).await;

    assert!(h.text("skip").await.starts_with(&url("b")));
    assert!(h.text("next 2").await.starts_with(&url("a")));
    assert!(h.text("previous").await.starts_with(&url("c")));
    assert!(h.text("back 2").await.starts_with(&url("a")));

    assert_eq!(
        h.voice.played(&guild()),
        vec![url("a"), url("b"), url("a"), url("c"), url("a")]
    );
}

#[tokio::test]
async fn skip_offset_must_be_positive() {
    let h = playing(&["a"]).await;
    let message = h.error("skip 0").await;
    assert!(message.contains("must be positive"), "{message}");
}

#[tokio::test]
async fn pause_resume_and_stop() {
    let h = playing(&["a"]).await;

    h.eval("pause").await.unwrap();
    assert!(h.error("pause").await.ends_with("This player is not playing!"));
    h.eval("resume").await.unwrap();
    assert!(h.error("resume").await.ends_with("This player is not paused!"));
    h.eval("stop").await.unwrap();
    h.eval("resume").await.unwrap();

    let sent = h.sent();
    assert!(sent.contains(&"\u{23F8}\u{FE0F} Paused.".to_string()));
    assert!(sent.contains(&"\u{23F9}\u{FE0F} Stopped.".to_string()));
    assert_eq!(h.voice.played(&guild()), vec![url("a"), url("a")]);
}

#[tokio::test]
async fn finished_track_announces_next() {
    let h = playing(&["a", "b"]).await;

    assert!(h.voice.finish_track(&guild()));

    h.wait_playing(&url("b")).await;
    h.wait_sent(|m| m == "\u{25B6}\u{FE0F} Playing **https://t/b**.")
        .await;
}

#[tokio::test]
async fn loop_off_stops_after_last_track() {
    let h = playing(&["a"]).await;
    assert_eq!(h.eval("loop off").await.unwrap(), Value::Bool(false));
    assert_eq!(
        h.sent().last().map(String::as_str),
        Some("\u{1F501} Playlist loop off.")
    );

    assert!(h.voice.finish_track(&guild()));

    h.wait_sent(|m| m == "\u{2757}\u{FE0F} The queue is empty, player stopped.")
        .await;
    assert_eq!(h.voice.now_playing(&guild()), None);
}

#[tokio::test]
async fn current_shows_track() {
    let h = playing(&["a", "b"]).await;
    assert_eq!(h.text("current").await, "https://t/a    https://t/a - 1:00\n");
    assert_eq!(
        h.sent().last().map(String::as_str),
        Some("\u{25B6}\u{FE0F} Playing **https://t/a** now.\nhttps://t/a")
    );
}

#[tokio::test]
async fn current_on_empty_queue_is_unit() {
    let h = MusicHarness::new();
    h.eval("join").await.unwrap();
    assert_eq!(h.eval("current").await.unwrap(), Value::Unit);
}
