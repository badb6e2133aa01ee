// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
// Enable coverage(off) attribute for excluding test infrastructure
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Adapters for external I/O: chat messages and files, voice playback and
//! track lookup.

pub mod chat;
pub mod subprocess;
pub mod traced;
pub mod tracks;
pub mod voice;

pub use chat::{ChatAdapter, ChatError, ChatFile, ConsoleChat, DirectoryFiles};
pub use traced::TracedChat;
pub use tracks::{OfflineTrackSource, SearchProvider, TrackSource, TrackSourceError, YtDlpTrackSource};
pub use voice::{
    ConsoleVoice, VoiceAdapter, VoiceChannel, VoiceConnection, VoiceError, VoiceEvent,
    VoiceSession,
};

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
pub use chat::{ChatCall, FakeChat};
#[cfg(any(test, feature = "test-support"))]
pub use tracks::FakeTrackSource;
#[cfg(any(test, feature = "test-support"))]
pub use voice::{FakeVoice, VoiceCall};
