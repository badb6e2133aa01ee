// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! acme-music: per-guild track queues, players and the music commands.

mod commands;
mod error;
mod player;
mod players;
mod queue;

pub use commands::{register, Music};
pub use error::MusicError;
pub use player::{AccessCode, Advance, Player, PlayerState, DEFAULT_VOLUME, MAX_VOLUME};
pub use players::{Notifier, PlayerRegistry, SharedPlayer};
pub use queue::{describe, export_tracks, MusicQueue};

#[cfg(test)]
mod test_helpers;
