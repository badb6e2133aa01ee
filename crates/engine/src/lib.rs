// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Command execution engine: registry, argument binding and evaluation

mod args;
mod context;
mod error;
mod evaluator;
mod registry;

pub use args::Args;
pub use context::{CancelSignal, CommandContext, Origin};
pub use error::{ArgumentError, CommandError, EvalError, RegistryError};
pub use evaluator::{EvalConfig, Evaluator, DEFAULT_MAX_NESTING_DEPTH};
pub use registry::{
    CommandHandler, CommandRegistry, CommandSpec, Param, ParamType, RegisteredCommand,
    RegistryBuilder, Signature,
};

#[cfg(test)]
mod test_helpers;
