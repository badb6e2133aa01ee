// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Track metadata.

use serde::{Deserialize, Serialize};

use crate::time_fmt::format_duration;

/// A playable track as returned by a track source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    pub title: String,
    #[serde(default)]
    pub uploader: String,
    /// Canonical page URL; also the key used to re-fetch the stream.
    pub url: String,
    /// Length in seconds, `0` when unknown.
    #[serde(default)]
    pub duration_secs: u64,
}

impl Track {
    pub fn new(title: impl Into<String>, url: impl Into<String>, duration_secs: u64) -> Self {
        Self {
            title: title.into(),
            uploader: String::new(),
            url: url.into(),
            duration_secs,
        }
    }

    pub fn with_uploader(mut self, uploader: impl Into<String>) -> Self {
        self.uploader = uploader.into();
        self
    }

    pub fn formatted_duration(&self) -> String {
        format_duration(self.duration_secs)
    }

    /// One line of a queue export: `<url>    <title> - <duration>\n`.
    ///
    /// The URL comes first so the export can be piped back into `play-url`.
    pub fn export_entry(&self) -> String {
        format!(
            "{}    {} - {}\n",
            self.url,
            self.title,
            self.formatted_duration()
        )
    }
}

#[cfg(test)]
#[path = "track_tests.rs"]
mod tests;
