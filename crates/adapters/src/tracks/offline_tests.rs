// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[yare::parameterized(
    path_segment = { "https://example.com/music/song.mp3", "song.mp3" },
    query        = { "https://example.com/watch?v=abc", "watch" },
    trailing     = { "https://example.com/a/b/", "b" },
    bare         = { "song", "song" },
)]
fn titles(url: &str, expected: &str) {
    assert_eq!(title_from_url(url), expected);
}

#[tokio::test]
async fn fetch_yields_one_track() {
    let tracks = OfflineTrackSource.fetch("https://example.com/a.ogg").await.unwrap();
    assert_eq!(tracks.len(), 1);
    assert_eq!(tracks[0].url, "https://example.com/a.ogg");
    assert_eq!(tracks[0].title, "a.ogg");
}

#[tokio::test]
async fn search_is_unavailable() {
    let result = OfflineTrackSource.search("anything", SearchProvider::Youtube).await;
    assert!(matches!(result, Err(TrackSourceError::Unavailable(_))));
}
