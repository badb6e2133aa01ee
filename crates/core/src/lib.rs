// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! acme-core: domain types shared by the bot crates.

pub mod id;
pub mod text;
pub mod time_fmt;
pub mod track;
pub mod value;

#[cfg(any(test, feature = "test-support"))]
pub use id::SequentialIdGen;
pub use id::{ChannelId, GuildId, IdGen, InvocationId, UserId, UuidIdGen};
pub use text::{
    code_block, escape_md_block, split_message, CODE_BLOCK_OVERHEAD, MAX_MESSAGE_LENGTH,
};
pub use time_fmt::format_duration;
pub use track::Track;
pub use value::Value;
