// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Music commands.
//!
//! `join`, `play*` and `volume` connect to the author's voice channel when
//! the guild has no player yet; every other command needs an existing one.
//! All player access goes through the guild lock.

use std::future::Future;
use std::sync::Arc;

use acme_adapters::{SearchProvider, TrackSource, TrackSourceError, VoiceAdapter};
use acme_core::{Track, Value};
use acme_engine::{
    ArgumentError, Args, CommandContext, CommandError, CommandHandler, CommandSpec, ParamType,
    RegistryBuilder, RegistryError,
};
use tokio::sync::MutexGuard;

use crate::error::MusicError;
use crate::player::{Player, MAX_VOLUME};
use crate::players::{Notifier, PlayerRegistry, SharedPlayer};
use crate::queue::{describe, export_tracks};

/// Shared state of the music commands.
pub struct Music {
    players: PlayerRegistry,
    tracks: Arc<dyn TrackSource>,
}

impl Music {
    pub fn new(voice: Arc<dyn VoiceAdapter>, tracks: Arc<dyn TrackSource>) -> Self {
        Self {
            players: PlayerRegistry::new(voice),
            tracks,
        }
    }

    pub fn players(&self) -> &PlayerRegistry {
        &self.players
    }

    async fn join_player(&self, ctx: &CommandContext) -> Result<SharedPlayer, CommandError> {
        let notifier = Notifier {
            chat: ctx.chat(),
            channel: ctx.channel().clone(),
        };
        Ok(self
            .players
            .get_or_join(ctx.guild(), ctx.author(), notifier)
            .await?)
    }

    fn player(&self, ctx: &CommandContext) -> Result<SharedPlayer, CommandError> {
        Ok(self.players.get(ctx.guild()).ok_or(MusicError::NotConnected)?)
    }

    /// Tracks behind every URL, in order.
    async fn fetch_all(&self, urls: &[String]) -> Result<Vec<Track>, CommandError> {
        let mut tracks = Vec::new();
        for url in urls {
            tracks.extend(self.tracks.fetch(url).await?);
        }
        Ok(tracks)
    }
}

/// Acquire the guild lock, failing if the player has since disconnected.
async fn lock_active(shared: &SharedPlayer) -> Result<MutexGuard<'_, Player>, MusicError> {
    let player = shared.lock().await;
    player.ensure_connected()?;
    Ok(player)
}

fn handler<F, Fut>(music: &Arc<Music>, f: F) -> impl CommandHandler
where
    F: Fn(Arc<Music>, CommandContext, Args) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<Value, CommandError>> + Send + 'static,
{
    let music = Arc::clone(music);
    move |ctx: CommandContext, args: Args| f(Arc::clone(&music), ctx, args)
}

pub fn register(builder: &mut RegistryBuilder, music: Arc<Music>) -> Result<(), RegistryError> {
    use ParamType::{Bool, Int, Str};

    builder.register(
        CommandSpec::new("join", "Join your current voice channel."),
        handler(&music, join),
    )?;
    builder.register(
        CommandSpec::new(
            "leave",
            "Leave the voice channel and drop the player.\n\n\
             RETURN VALUE\n    The queue as exported track URLs.",
        )
        .alias("leav"),
        handler(&music, leave),
    )?;
    builder.register(
        CommandSpec::new(
            "play",
            "Search YouTube and queue the first result.\n\n\
             ARGUMENTS\n    query... - the search query\n\n\
             RETURN VALUE\n    The added track URL.",
        )
        .rest("query", Str),
        handler(&music, play),
    )?;
    builder.register(
        CommandSpec::new(
            "play-snd",
            "Search SoundCloud and queue the first result.\n\n\
             ARGUMENTS\n    query... - the search query\n\n\
             RETURN VALUE\n    The added track URL.",
        )
        .alias("psnd")
        .rest("query", Str),
        handler(&music, play_snd),
    )?;
    builder.register(
        CommandSpec::new(
            "play-url",
            "Queue tracks from YouTube or SoundCloud URLs.\n\n\
             Only the first word of each line is used, so `queue` output can\n\
             be piped back in.\n\n\
             ARGUMENTS\n    urls... - track or playlist URLs\n\n\
             RETURN VALUE\n    The added track URLs.",
        )
        .alias("purl")
        .rest("urls", Str),
        handler(&music, play_url),
    )?;
    builder.register(
        CommandSpec::new(
            "list-urls",
            "Extract the tracks behind URLs without queueing them.\n\n\
             ARGUMENTS\n    urls... - track or playlist URLs\n\n\
             RETURN VALUE\n    The extracted track URLs.",
        )
        .alias("lurl")
        .rest("urls", Str),
        handler(&music, list_urls),
    )?;
    builder.register(
        CommandSpec::new(
            "skip",
            "Play a later track.\n\n\
             ARGUMENTS\n    offset - how many tracks to move forward\n\n\
             RETURN VALUE\n    The new track URL.",
        )
        .alias("next")
        .alias("forward")
        .opt("offset", Int, 1i64),
        handler(&music, skip),
    )?;
    builder.register(
        CommandSpec::new(
            "previous",
            "Play an earlier track.\n\n\
             ARGUMENTS\n    offset - how many tracks to move back\n\n\
             RETURN VALUE\n    The new track URL.",
        )
        .alias("prev")
        .alias("back")
        .opt("offset", Int, 1i64),
        handler(&music, previous),
    )?;
    builder.register(
        CommandSpec::new(
            "loop",
            "Set whether the queue starts over after the last track.\n\n\
             ARGUMENTS\n    do_loop - whether to loop\n\n\
             RETURN VALUE\n    The loop setting.",
        )
        .arg("do_loop", Bool),
        handler(&music, set_loop),
    )?;
    builder.register(
        CommandSpec::new("pause", "Pause the player.").alias("paus"),
        handler(&music, pause),
    )?;
    builder.register(
        CommandSpec::new("resume", "Resume a paused or stopped player.").alias("resu"),
        handler(&music, resume),
    )?;
    builder.register(
        CommandSpec::new("stop", "Stop the player."),
        handler(&music, stop),
    )?;
    builder.register(
        CommandSpec::new(
            "queue",
            "Show the queue, starting at the current track.\n\n\
             RETURN VALUE\n    The queue as exported track URLs.",
        )
        .alias("queu"),
        handler(&music, queue),
    )?;
    builder.register(
        CommandSpec::new(
            "clear",
            "Delete every track from the queue.\n\n\
             RETURN VALUE\n    The removed tracks as exported URLs.",
        )
        .alias("clea"),
        handler(&music, clear),
    )?;
    builder.register(
        CommandSpec::new(
            "volume",
            "Change the player volume.\n\n\
             ARGUMENTS\n    volume - the volume in percent, from 0 to 1000\n\n\
             RETURN VALUE\n    The new volume.",
        )
        .alias("volu")
        .arg("volume", Int),
        handler(&music, volume),
    )?;
    builder.register(
        CommandSpec::new(
            "current",
            "Show the current track.\n\n\
             RETURN VALUE\n    The current track URL.",
        )
        .alias("curr"),
        handler(&music, current),
    )?;
    builder.register(
        CommandSpec::new(
            "remove",
            "Remove a track from the queue.\n\n\
             ARGUMENTS\n    offset - position relative to the current track\n\n\
             RETURN VALUE\n    The removed track URL.",
        )
        .alias("remo")
        .arg("offset", Int),
        handler(&music, remove),
    )?;
    Ok(())
}

fn now_playing(track: &Track) -> String {
    format!("\u{25B6}\u{FE0F} Playing {}.", describe(track))
}

/// First word of every non-empty line.
pub(crate) fn strip_urls(text: &str) -> Vec<String> {
    text.lines()
        .filter_map(|line| line.split_whitespace().next())
        .map(str::to_string)
        .collect()
}

fn joined_rest(args: &Args, param: &str, separator: &str) -> Result<String, ArgumentError> {
    let text = args.rest_text().join(separator);
    if text.trim().is_empty() {
        return Err(ArgumentError::Missing {
            param: param.to_string(),
            expected: ParamType::Str.name(),
        });
    }
    Ok(text)
}

async fn join(music: Arc<Music>, ctx: CommandContext, _args: Args) -> Result<Value, CommandError> {
    let shared = music.join_player(&ctx).await?;
    let name = lock_active(&shared).await?.channel().name.clone();
    ctx.show(&format!("\u{27A1}\u{FE0F} Joining channel **{name}**."))
        .await?;
    Ok(Value::Unit)
}

async fn leave(music: Arc<Music>, ctx: CommandContext, _args: Args) -> Result<Value, CommandError> {
    let shared = music.player(&ctx)?;
    let (name, export) = {
        let mut player = lock_active(&shared).await?;
        music.players.remove(ctx.guild());
        let export = player.disconnect().await?;
        (player.channel().name.clone(), export)
    };
    ctx.show(&format!("\u{23CF}\u{FE0F} Quitting channel **{name}**."))
        .await?;
    Ok(Value::Str(export))
}

async fn play(music: Arc<Music>, ctx: CommandContext, args: Args) -> Result<Value, CommandError> {
    play_search(&music, &ctx, &args, SearchProvider::Youtube).await
}

async fn play_snd(
    music: Arc<Music>,
    ctx: CommandContext,
    args: Args,
) -> Result<Value, CommandError> {
    play_search(&music, &ctx, &args, SearchProvider::Soundcloud).await
}

async fn play_search(
    music: &Music,
    ctx: &CommandContext,
    args: &Args,
    provider: SearchProvider,
) -> Result<Value, CommandError> {
    let query = joined_rest(args, "query", " ")?;
    let shared = music.join_player(ctx).await?;

    // Search without holding the guild lock.
    let track = music
        .tracks
        .search(&query, provider)
        .await?
        .into_iter()
        .next()
        .ok_or_else(|| TrackSourceError::NoResults(format!("the query '{query}'")))?;

    let started = lock_active(&shared)
        .await?
        .enqueue(vec![track.clone()])
        .await?;
    if started.is_some() {
        ctx.show(&now_playing(&track)).await?;
    } else {
        ctx.show(&format!("\u{2795} {} added to the queue.", describe(&track)))
            .await?;
    }
    Ok(Value::Str(track.export_entry()))
}

async fn play_url(
    music: Arc<Music>,
    ctx: CommandContext,
    args: Args,
) -> Result<Value, CommandError> {
    let urls = strip_urls(&joined_rest(&args, "urls", "\n")?);
    let shared = music.join_player(&ctx).await?;
    let tracks = music.fetch_all(&urls).await?;

    let started = lock_active(&shared)
        .await?
        .enqueue(tracks.clone())
        .await?;
    ctx.show(&format!("\u{2705}\u{FE0F} Extracted {} tracks.", tracks.len()))
        .await?;
    if let Some(track) = started {
        ctx.show(&now_playing(&track)).await?;
    }
    Ok(Value::Str(export_tracks(&tracks)))
}

async fn list_urls(
    music: Arc<Music>,
    ctx: CommandContext,
    args: Args,
) -> Result<Value, CommandError> {
    let urls = strip_urls(&joined_rest(&args, "urls", "\n")?);
    let tracks = music.fetch_all(&urls).await?;
    ctx.show(&format!("\u{2705}\u{FE0F} Extracted {} tracks.", tracks.len()))
        .await?;
    Ok(Value::Str(export_tracks(&tracks)))
}

async fn skip(music: Arc<Music>, ctx: CommandContext, args: Args) -> Result<Value, CommandError> {
    let offset = args.positive("offset")? as i64;
    seek(&music, &ctx, offset).await
}

async fn previous(
    music: Arc<Music>,
    ctx: CommandContext,
    args: Args,
) -> Result<Value, CommandError> {
    let offset = args.positive("offset")? as i64;
    seek(&music, &ctx, -offset).await
}

async fn seek(music: &Music, ctx: &CommandContext, offset: i64) -> Result<Value, CommandError> {
    let shared = music.player(ctx)?;
    let track = {
        let mut player = lock_active(&shared).await?;
        player.ensure_not_empty()?;
        player.skip(offset).await?
    };
    ctx.show(&now_playing(&track)).await?;
    Ok(Value::Str(track.export_entry()))
}

async fn set_loop(
    music: Arc<Music>,
    ctx: CommandContext,
    args: Args,
) -> Result<Value, CommandError> {
    let do_loop = args.bool("do_loop")?;
    let shared = music.player(&ctx)?;
    lock_active(&shared).await?.set_looping(do_loop);
    let state = if do_loop { "on" } else { "off" };
    ctx.show(&format!("\u{1F501} Playlist loop {state}.")).await?;
    Ok(Value::Bool(do_loop))
}

async fn pause(music: Arc<Music>, ctx: CommandContext, _args: Args) -> Result<Value, CommandError> {
    let shared = music.player(&ctx)?;
    lock_active(&shared).await?.pause().await?;
    ctx.show("\u{23F8}\u{FE0F} Paused.").await?;
    Ok(Value::Unit)
}

async fn resume(music: Arc<Music>, ctx: CommandContext, _args: Args) -> Result<Value, CommandError> {
    let shared = music.player(&ctx)?;
    let track = lock_active(&shared).await?.resume().await?;
    ctx.show(&now_playing(&track)).await?;
    Ok(Value::Unit)
}

async fn stop(music: Arc<Music>, ctx: CommandContext, _args: Args) -> Result<Value, CommandError> {
    let shared = music.player(&ctx)?;
    lock_active(&shared).await?.stop().await?;
    ctx.show("\u{23F9}\u{FE0F} Stopped.").await?;
    Ok(Value::Unit)
}

async fn queue(music: Arc<Music>, ctx: CommandContext, _args: Args) -> Result<Value, CommandError> {
    let shared = music.player(&ctx)?;
    let (listing, export) = {
        let player = lock_active(&shared).await?;
        player.ensure_not_empty()?;
        (player.queue().listing(), player.queue().export())
    };
    ctx.show(&listing).await?;
    Ok(Value::Str(export))
}

async fn clear(music: Arc<Music>, ctx: CommandContext, _args: Args) -> Result<Value, CommandError> {
    let shared = music.player(&ctx)?;
    let export = lock_active(&shared).await?.clear().await?;
    ctx.show("\u{2716}\u{FE0F} Queue cleared.").await?;
    Ok(Value::Str(export))
}

async fn volume(music: Arc<Music>, ctx: CommandContext, args: Args) -> Result<Value, CommandError> {
    let value = args.int("volume")?;
    let volume = u16::try_from(value)
        .ok()
        .filter(|v| *v <= MAX_VOLUME)
        .ok_or_else(|| {
            ArgumentError::range(
                "volume",
                format!("must be between 0 and {MAX_VOLUME}, got {value}"),
            )
        })?;

    let shared = music.join_player(&ctx).await?;
    lock_active(&shared).await?.set_volume(volume).await?;
    ctx.show(&format!("\u{1F4E2} Volume is now at **{volume}%**."))
        .await?;
    Ok(Value::Int(i64::from(volume)))
}

async fn current(
    music: Arc<Music>,
    ctx: CommandContext,
    _args: Args,
) -> Result<Value, CommandError> {
    let shared = music.player(&ctx)?;
    let track = lock_active(&shared).await?.current().cloned();
    let Some(track) = track else {
        return Ok(Value::Unit);
    };
    ctx.show(&format!(
        "\u{25B6}\u{FE0F} Playing {} now.\n{}",
        describe(&track),
        track.url
    ))
    .await?;
    Ok(Value::Str(track.export_entry()))
}

async fn remove(music: Arc<Music>, ctx: CommandContext, args: Args) -> Result<Value, CommandError> {
    let offset = args.int("offset")?;
    let shared = music.player(&ctx)?;
    let removed = lock_active(&shared).await?.remove(offset).await?;
    ctx.show(&format!("\u{2796} {} removed from the queue.", describe(&removed)))
        .await?;
    Ok(Value::Str(removed.export_entry()))
}

#[cfg(test)]
#[path = "commands_tests/mod.rs"]
mod tests;
