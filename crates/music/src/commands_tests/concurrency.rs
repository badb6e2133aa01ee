// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use acme_engine::Origin;
use std::collections::HashSet;
use std::time::Duration;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_remove_and_queue_never_tear() {
    let names: Vec<String> = (0..20).map(|i| format!("t{i:02}")).collect();
    let refs: Vec<&str> = names.iter().map(String::as_str).collect();
    let h = Arc::new(playing(&refs).await);
    let all: HashSet<String> = names.iter().map(|n| url(n)).collect();

    let mut removals = Vec::new();
    let mut reads = Vec::new();
    for i in 0..10 {
        let h1 = Arc::clone(&h);
        removals.push(tokio::spawn(async move {
            h1.eval_as(&format!("user-{i}"), "remove 1").await
        }));
        let h2 = Arc::clone(&h);
        reads.push(tokio::spawn(async move { h2.eval("queue").await }));
    }

    let mut removed = HashSet::new();
    for handle in removals {
        let entry = handle.await.unwrap().unwrap().into_text();
        let url = entry.split_whitespace().next().unwrap().to_string();
        assert!(removed.insert(url), "removed twice: {entry}");
    }
    for handle in reads {
        let export = handle.await.unwrap().unwrap().into_text();
        let urls: Vec<&str> = export
            .lines()
            .filter_map(|l| l.split_whitespace().next())
            .collect();
        let unique: HashSet<&str> = urls.iter().copied().collect();
        assert_eq!(unique.len(), urls.len(), "duplicate entries in {export}");
        assert!((10..=20).contains(&urls.len()));
        assert!(urls.iter().all(|u| all.contains(*u)));
    }

    let remaining: HashSet<String> = h.titles().await.into_iter().collect();
    assert_eq!(remaining.len(), 10);
    assert!(remaining.is_disjoint(&removed));
    assert_eq!(remaining.len() + removed.len(), all.len());
}

#[tokio::test]
async fn guilds_do_not_block_each_other() {
    let h = playing(&["a"]).await;
    let player = h.player();
    let _held = player.lock().await;

    // Same guild waits for the lock.
    let blocked = tokio::time::timeout(Duration::from_millis(50), h.eval("stop")).await;
    assert!(blocked.is_err());

    // Another guild proceeds.
    let ctx = h
        .evaluator
        .context(Origin::new("guild-2", "chan-2", "bob"));
    let other = tokio::time::timeout(
        Duration::from_secs(5),
        h.evaluator.evaluate("play-url https://t/z", &ctx),
    )
    .await
    .unwrap();
    assert!(other.is_ok());
    assert_eq!(h.music.players().len(), 2);
}
