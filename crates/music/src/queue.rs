// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Track queue with a moving current position.
//!
//! The queue is a ring: seeking past either end wraps around. Looping only
//! decides whether playback continues after the last track.

use acme_core::Track;

/// Separates tracks that already played from upcoming ones when not looping.
const PLAYED_SEPARATOR: &str = "------------------------------------";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MusicQueue {
    tracks: Vec<Track>,
    index: usize,
    looping: bool,
}

impl Default for MusicQueue {
    fn default() -> Self {
        Self {
            tracks: Vec::new(),
            index: 0,
            looping: true,
        }
    }
}

impl MusicQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> Option<&Track> {
        self.tracks.get(self.index)
    }

    pub fn is_looping(&self) -> bool {
        self.looping
    }

    pub fn set_looping(&mut self, looping: bool) {
        self.looping = looping;
    }

    pub fn extend(&mut self, tracks: impl IntoIterator<Item = Track>) {
        self.tracks.extend(tracks);
    }

    /// Tracks starting at the current one, wrapping around to the start.
    pub fn ordered(&self) -> impl Iterator<Item = &Track> {
        let (before, from_current) = self.tracks.split_at(self.index.min(self.tracks.len()));
        from_current.iter().chain(before)
    }

    /// Whether playback should stop once the current track ends.
    pub fn should_stop(&self) -> bool {
        !self.looping && self.index + 1 >= self.tracks.len()
    }

    /// Move the current position by `offset` tracks.
    pub fn seek(&mut self, offset: i64) -> Option<&Track> {
        self.index = self.position(offset)?;
        self.tracks.get(self.index)
    }

    /// Move to the next track.
    pub fn advance(&mut self) -> Option<&Track> {
        self.seek(1)
    }

    /// Remove the track `offset` positions away from the current one.
    ///
    /// Removing the current track makes the following one current.
    pub fn remove(&mut self, offset: i64) -> Option<Track> {
        let pos = self.position(offset)?;
        let removed = self.tracks.remove(pos);
        if pos < self.index {
            self.index -= 1;
        }
        if self.index >= self.tracks.len() {
            self.index = 0;
        }
        Some(removed)
    }

    pub fn clear(&mut self) {
        self.tracks.clear();
        self.index = 0;
    }

    /// Export lines for every track, current first.
    pub fn export(&self) -> String {
        export_tracks(self.ordered())
    }

    /// Numbered listing for display. Tracks that already played are marked
    /// off when the queue does not loop.
    pub fn listing(&self) -> String {
        let mut out = String::from("\u{1F3BC} Current queue:");
        let (before, from_current) = self.tracks.split_at(self.index.min(self.tracks.len()));
        for (i, track) in from_current.iter().enumerate() {
            out.push('\n');
            out.push_str(&entry_line(i, track));
        }
        if !self.looping && self.index != 0 {
            out.push('\n');
            out.push_str(PLAYED_SEPARATOR);
        }
        for (i, track) in before.iter().enumerate() {
            out.push('\n');
            out.push_str(&entry_line(from_current.len() + i, track));
        }
        out
    }

    /// Index of the track `offset` positions away from the current one.
    ///
    /// Any `i64` is accepted; the arithmetic is done in `i128`.
    pub fn position(&self, offset: i64) -> Option<usize> {
        let len = i128::try_from(self.tracks.len()).ok().filter(|&len| len > 0)?;
        let index = i128::try_from(self.index).ok()?;
        usize::try_from((index + i128::from(offset)).rem_euclid(len)).ok()
    }
}

/// `**title** by uploader`, or just the title when the uploader is unknown.
pub fn describe(track: &Track) -> String {
    if track.uploader.is_empty() {
        format!("**{}**", track.title)
    } else {
        format!("**{}** by {}", track.title, track.uploader)
    }
}

pub fn export_tracks<'a>(tracks: impl IntoIterator<Item = &'a Track>) -> String {
    tracks.into_iter().map(Track::export_entry).collect()
}

fn entry_line(index: usize, track: &Track) -> String {
    if track.uploader.is_empty() {
        format!("{index}. **{}** - {}", track.title, track.formatted_duration())
    } else {
        format!(
            "{index}. **{}** - {} - {}",
            track.title,
            track.uploader,
            track.formatted_duration()
        )
    }
}

#[cfg(test)]
#[path = "queue_tests.rs"]
mod tests;
