//! Music command specs with the console voice adapter and offline tracks.

use crate::prelude::*;

fn offline() -> (Files, BotBuilder) {
    let dir = Files::new().with("bot.toml", "track_source = \"offline\"\n");
    let config = dir.path().join("bot.toml").to_string_lossy().to_string();
    let builder = bot().args(&["--config", &config]);
    (dir, builder)
}

#[test]
fn join_announces_console_channel() {
    let (_dir, bot) = offline();
    bot.input(&["!join"])
        .passes()
        .stdout_eq("\u{27A1}\u{FE0F} Joining channel **console**.\n");
}

#[test]
fn play_url_then_queue() {
    let (_dir, bot) = offline();
    bot.input(&["!play-url https://example.com/one https://example.com/two && queue"])
        .passes()
        .stdout_eq(
            "\u{2705}\u{FE0F} Extracted 2 tracks.\n\
             \u{25B6}\u{FE0F} Playing **one**.\n\
             \u{1F3BC} Current queue:\n\
             0. **one** - 0:00\n\
             1. **two** - 0:00\n",
        );
}

#[test]
fn queue_without_player_fails() {
    let (_dir, bot) = offline();
    bot.input(&["!queue"])
        .passes()
        .stdout_eq("Error: queue: You are not connected to a voice channel.\n");
}

#[test]
fn search_is_unavailable_offline() {
    let (_dir, bot) = offline();
    bot.input(&["!play never gonna give you up"])
        .passes()
        .stdout_has("track search is unavailable");
}

#[test]
fn skip_and_remove_follow_the_queue() {
    let (_dir, bot) = offline();
    bot.input(&[
        "!purl https://e.com/a https://e.com/b https://e.com/c && skip && remove 1 && current",
    ])
    .passes()
    .stdout_has("\u{25B6}\u{FE0F} Playing **b**.\n")
    .stdout_has("\u{2796} **c** removed from the queue.\n")
    .stdout_has("\u{25B6}\u{FE0F} Playing **b** now.\nhttps://e.com/b\n");
}
