// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake track source for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{SearchProvider, TrackSource, TrackSourceError};
use acme_core::Track;
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

#[derive(Default)]
struct FakeTrackState {
    results: HashMap<(SearchProvider, String), Vec<Track>>,
    urls: HashMap<String, Vec<Track>>,
    searches: Vec<(SearchProvider, String)>,
    delay: Option<Duration>,
}

/// Fake track source with canned results.
///
/// Unknown URLs resolve to a single track titled after the URL; unknown
/// queries have no results.
#[derive(Clone, Default)]
pub struct FakeTrackSource {
    inner: Arc<Mutex<FakeTrackState>>,
}

impl FakeTrackSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(self, provider: SearchProvider, query: &str, tracks: Vec<Track>) -> Self {
        self.inner
            .lock()
            .results
            .insert((provider, query.to_string()), tracks);
        self
    }

    pub fn with_url(self, url: &str, tracks: Vec<Track>) -> Self {
        self.inner.lock().urls.insert(url.to_string(), tracks);
        self
    }

    /// Delay every lookup, to widen race windows in concurrency tests.
    pub fn with_delay(self, delay: Duration) -> Self {
        self.inner.lock().delay = Some(delay);
        self
    }

    pub fn searches(&self) -> Vec<(SearchProvider, String)> {
        self.inner.lock().searches.clone()
    }

    async fn pause(&self) {
        let delay = self.inner.lock().delay;
        if let Some(d) = delay {
            tokio::time::sleep(d).await;
        }
    }
}

#[async_trait]
impl TrackSource for FakeTrackSource {
    async fn search(
        &self,
        query: &str,
        provider: SearchProvider,
    ) -> Result<Vec<Track>, TrackSourceError> {
        self.pause().await;
        let mut state = self.inner.lock();
        state.searches.push((provider, query.to_string()));
        match state.results.get(&(provider, query.to_string())) {
            Some(tracks) if !tracks.is_empty() => Ok(tracks.clone()),
            _ => Err(TrackSourceError::NoResults(format!("the query '{query}'"))),
        }
    }

    async fn fetch(&self, url: &str) -> Result<Vec<Track>, TrackSourceError> {
        self.pause().await;
        let state = self.inner.lock();
        Ok(state
            .urls
            .get(url)
            .cloned()
            .unwrap_or_else(|| vec![Track::new(url, url, 60)]))
    }
}
