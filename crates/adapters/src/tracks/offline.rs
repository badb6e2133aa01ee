// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Track source that works without network access.

use acme_core::Track;
use async_trait::async_trait;

use super::{SearchProvider, TrackSource, TrackSourceError};

/// Accepts any URL as a single track titled after its last path segment.
/// Searching is not supported.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineTrackSource;

#[async_trait]
impl TrackSource for OfflineTrackSource {
    async fn search(
        &self,
        _query: &str,
        _provider: SearchProvider,
    ) -> Result<Vec<Track>, TrackSourceError> {
        Err(TrackSourceError::Unavailable(
            "the offline track source cannot search".to_string(),
        ))
    }

    async fn fetch(&self, url: &str) -> Result<Vec<Track>, TrackSourceError> {
        let url = url.trim();
        if url.is_empty() {
            return Err(TrackSourceError::NoResults("an empty URL".to_string()));
        }
        Ok(vec![Track::new(title_from_url(url), url, 0)])
    }
}

fn title_from_url(url: &str) -> &str {
    let without_query = url.split(['?', '#']).next().unwrap_or(url);
    without_query
        .trim_end_matches('/')
        .rsplit('/')
        .find(|s| !s.is_empty())
        .unwrap_or(url)
}

#[cfg(test)]
#[path = "offline_tests.rs"]
mod tests;
