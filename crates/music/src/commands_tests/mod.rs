// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

mod concurrency;
mod lifecycle;
mod playback;
mod queue;

use super::*;
use crate::test_helpers::{guild, url, MusicHarness};
use acme_adapters::{FakeTrackSource, VoiceCall};

const NOT_CONNECTED: &str = "You are not connected to a voice channel.";

/// Start a harness with `names` queued through `play-url`.
async fn playing(names: &[&str]) -> MusicHarness {
    let h = MusicHarness::new();
    let urls: Vec<String> = names.iter().map(|n| url(n)).collect();
    h.eval(&format!("play-url {}", urls.join(" "))).await.unwrap();
    h
}
