// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! acme-bot: evaluate chat commands typed on standard input.

use std::path::PathBuf;
use std::sync::Arc;

use acme_bot::{build_evaluator, console_origin, setup_logging, Adapters, Config, ConsoleGateway};
use anyhow::{Context, Result};
use clap::Parser;
use tokio::io::BufReader;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "acme-bot",
    version,
    about = "Chat bot with a small shell language, driven from the terminal"
)]
struct Cli {
    /// Configuration file (TOML)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Directory standing in for the channel's file history
    #[arg(short, long, value_name = "DIR")]
    files: Option<PathBuf>,

    /// Name of the user sending every message
    #[arg(short, long, value_name = "NAME")]
    user: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(files) = cli.files {
        config.files_dir = Some(files);
    }
    if let Some(user) = cli.user {
        config.user_name = user;
    }
    config.validate()?;

    let _log_guard = setup_logging(&config)?;

    if let Some(dir) = &config.files_dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create files directory {}", dir.display()))?;
    }

    let evaluator = build_evaluator(&config, Adapters::console(&config))?;
    let gateway = ConsoleGateway::new(Arc::new(evaluator), console_origin(&config));

    info!(prefix = %config.prefix, user = %config.user_name, "acme-bot ready");
    let summary = gateway.run(BufReader::new(tokio::io::stdin())).await?;
    info!(
        handled = summary.handled,
        failed = summary.failed,
        "end of input"
    );
    Ok(())
}
