// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Track source backed by the `yt-dlp` executable.

use std::time::Duration;

use acme_core::Track;
use async_trait::async_trait;
use serde::Deserialize;
use tokio::process::Command;

use super::{SearchProvider, TrackSource, TrackSourceError};
use crate::subprocess::{run_checked, EXTRACT_TIMEOUT};

const SEARCH_RESULTS: usize = 5;

/// Runs `yt-dlp --dump-json --flat-playlist` and reads one JSON object per
/// output line.
#[derive(Debug, Clone)]
pub struct YtDlpTrackSource {
    program: String,
    timeout: Duration,
}

impl YtDlpTrackSource {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            timeout: EXTRACT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    async fn extract(&self, target: &str) -> Result<Vec<Track>, TrackSourceError> {
        let mut cmd = Command::new(&self.program);
        cmd.args(["--dump-json", "--flat-playlist", "--no-warnings", "--", target]);
        let stdout = run_checked(cmd, self.timeout, "yt-dlp")
            .await
            .map_err(TrackSourceError::Failed)?;
        Ok(parse_entries(&stdout))
    }
}

impl Default for YtDlpTrackSource {
    fn default() -> Self {
        Self::new("yt-dlp")
    }
}

#[async_trait]
impl TrackSource for YtDlpTrackSource {
    async fn search(
        &self,
        query: &str,
        provider: SearchProvider,
    ) -> Result<Vec<Track>, TrackSourceError> {
        let target = format!("{}{}", provider.search_prefix(SEARCH_RESULTS), query);
        let tracks = self.extract(&target).await?;
        if tracks.is_empty() {
            return Err(TrackSourceError::NoResults(format!("the query '{query}'")));
        }
        Ok(tracks)
    }

    async fn fetch(&self, url: &str) -> Result<Vec<Track>, TrackSourceError> {
        let tracks = self.extract(url).await?;
        if tracks.is_empty() {
            return Err(TrackSourceError::NoResults(format!("the URL '{url}'")));
        }
        Ok(tracks)
    }
}

#[derive(Debug, Deserialize)]
struct Entry {
    title: Option<String>,
    uploader: Option<String>,
    channel: Option<String>,
    webpage_url: Option<String>,
    url: Option<String>,
    duration: Option<f64>,
}

/// Parse `--dump-json` output. Lines that are not track objects are skipped.
fn parse_entries(stdout: &str) -> Vec<Track> {
    stdout
        .lines()
        .filter(|l| !l.trim().is_empty())
        .filter_map(|line| match serde_json::from_str::<Entry>(line) {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::warn!(error = %e, "skipping unparsable yt-dlp line");
                None
            }
        })
        .filter_map(|entry| {
            let url = entry.webpage_url.or(entry.url)?;
            let title = entry.title.unwrap_or_else(|| url.clone());
            let uploader = entry.uploader.or(entry.channel).unwrap_or_default();
            let duration = entry.duration.unwrap_or(0.0).max(0.0) as u64;
            Some(Track::new(title, url, duration).with_uploader(uploader))
        })
        .collect()
}

#[cfg(test)]
#[path = "ytdlp_tests.rs"]
mod tests;
