// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Music player errors

use acme_adapters::{TrackSourceError, VoiceError};
use acme_engine::CommandError;
use thiserror::Error;

/// Errors from player operations. The messages are shown to users as-is.
#[derive(Debug, Error)]
pub enum MusicError {
    #[error("You are not connected to a voice channel.")]
    NotConnected,
    #[error("The queue is empty!")]
    EmptyQueue,
    #[error("This player is not paused!")]
    NotPaused,
    #[error("This player is not playing!")]
    NotPlaying,
    #[error("Incorrect volume value!")]
    InvalidVolume(u16),
    #[error(transparent)]
    Voice(#[from] VoiceError),
    #[error(transparent)]
    Tracks(#[from] TrackSourceError),
}

impl From<MusicError> for CommandError {
    fn from(err: MusicError) -> Self {
        match err {
            MusicError::Voice(e) => CommandError::Voice(e),
            MusicError::Tracks(e) => CommandError::Tracks(e),
            other => CommandError::Failed(other.to_string()),
        }
    }
}
