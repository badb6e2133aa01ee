// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Built-in shell utility commands and `help`.

mod files;
mod grep;
mod help;
mod system;
mod text;

use acme_engine::{RegistryBuilder, RegistryError};

/// Settings for commands that shell out.
#[derive(Debug, Clone)]
pub struct ShellOptions {
    /// Program used by `units`.
    pub units_program: String,
}

impl Default for ShellOptions {
    fn default() -> Self {
        Self {
            units_program: "units".to_string(),
        }
    }
}

/// Register every shell utility plus `help`.
pub fn register(builder: &mut RegistryBuilder, options: &ShellOptions) -> Result<(), RegistryError> {
    text::register(builder)?;
    grep::register(builder)?;
    files::register(builder)?;
    system::register(builder, &options.units_program)?;
    help::register(builder)?;
    Ok(())
}

#[cfg(test)]
mod test_helpers;
