// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Track sources: search queries and URL extraction.

mod offline;
mod ytdlp;

pub use offline::OfflineTrackSource;
pub use ytdlp::YtDlpTrackSource;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeTrackSource;

use acme_core::Track;
use async_trait::async_trait;
use thiserror::Error;

/// Errors from track lookups
#[derive(Debug, Error)]
pub enum TrackSourceError {
    #[error("No tracks found for {0}")]
    NoResults(String),
    #[error("track search is unavailable: {0}")]
    Unavailable(String),
    #[error("track extraction failed: {0}")]
    Failed(String),
}

/// Where a search query is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchProvider {
    Youtube,
    Soundcloud,
}

impl SearchProvider {
    /// yt-dlp search prefix returning up to `n` results.
    pub fn search_prefix(self, n: usize) -> String {
        match self {
            SearchProvider::Youtube => format!("ytsearch{n}:"),
            SearchProvider::Soundcloud => format!("scsearch{n}:"),
        }
    }
}

/// Adapter for finding playable tracks
#[async_trait]
pub trait TrackSource: Send + Sync + 'static {
    /// Search results for `query`, best match first.
    async fn search(
        &self,
        query: &str,
        provider: SearchProvider,
    ) -> Result<Vec<Track>, TrackSourceError>;

    /// Tracks behind a URL. A playlist URL yields all of its entries.
    async fn fetch(&self, url: &str) -> Result<Vec<Track>, TrackSourceError>;
}
