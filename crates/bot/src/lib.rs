// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Console front end for the acme bot: configuration, logging and the
//! line-based gateway.

pub mod app;
pub mod config;
mod env;
pub mod gateway;
pub mod logging;

pub use app::{build_evaluator, build_registry, console_origin, Adapters};
pub use config::{Config, ConfigError, TrackSourceKind};
pub use gateway::{strip_prefix, ConsoleGateway, GatewaySummary};
pub use logging::setup_logging;
