// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Wiring of adapters and commands into an evaluator.

use std::sync::Arc;

use acme_adapters::{
    ChatAdapter, ConsoleChat, ConsoleVoice, DirectoryFiles, OfflineTrackSource, TracedChat,
    TrackSource, VoiceAdapter, YtDlpTrackSource,
};
use acme_commands::ShellOptions;
use acme_engine::{CommandRegistry, Evaluator, Origin, RegistryError};
use acme_music::Music;

use crate::config::{Config, TrackSourceKind};

/// External collaborators of the evaluator.
pub struct Adapters {
    pub chat: Arc<dyn ChatAdapter>,
    pub voice: Arc<dyn VoiceAdapter>,
    pub tracks: Arc<dyn TrackSource>,
}

impl Adapters {
    /// Terminal adapters: stdout chat, an optional files directory, silent
    /// voice and the configured track source.
    pub fn console(config: &Config) -> Self {
        let files = config
            .files_dir
            .as_ref()
            .map(|dir| DirectoryFiles::new(dir, config.history_limit));
        let tracks: Arc<dyn TrackSource> = match config.track_source {
            TrackSourceKind::YtDlp => Arc::new(YtDlpTrackSource::new(&config.ytdlp_program)),
            TrackSourceKind::Offline => Arc::new(OfflineTrackSource),
        };
        Self {
            chat: Arc::new(TracedChat::new(ConsoleChat::stdout(files))),
            voice: Arc::new(ConsoleVoice::new(&config.voice_channel)),
            tracks,
        }
    }
}

/// Registry with every built-in command.
pub fn build_registry(
    config: &Config,
    voice: Arc<dyn VoiceAdapter>,
    tracks: Arc<dyn TrackSource>,
) -> Result<CommandRegistry, RegistryError> {
    let mut builder = CommandRegistry::builder();
    let options = ShellOptions {
        units_program: config.units_program.clone(),
    };
    acme_commands::register(&mut builder, &options)?;
    acme_music::register(&mut builder, Arc::new(Music::new(voice, tracks)))?;
    Ok(builder.build())
}

pub fn build_evaluator(config: &Config, adapters: Adapters) -> Result<Evaluator, RegistryError> {
    let registry = build_registry(config, adapters.voice, adapters.tracks)?;
    Ok(Evaluator::new(registry, adapters.chat, config.eval_config()))
}

/// Origin of every console message.
pub fn console_origin(config: &Config) -> Origin {
    Origin::new(
        config.guild.as_str(),
        config.channel.as_str(),
        config.user_name.as_str(),
    )
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;
