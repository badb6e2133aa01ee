// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[tokio::test]
async fn fake_chat_records_sends() {
    let chat = FakeChat::new();
    let channel = ChannelId::new("c1");

    chat.send(&channel, "one").await.unwrap();
    chat.send(&channel, "two").await.unwrap();

    assert_eq!(chat.sent(), vec!["one", "two"]);
}

#[tokio::test]
async fn fake_chat_finds_newest_file_in_channel() {
    let chat = FakeChat::new();
    let c1 = ChannelId::new("c1");
    let c2 = ChannelId::new("c2");
    chat.add_file(&c1, "a.txt", "old");
    chat.add_file(&c1, "a.txt", "new");
    chat.add_file(&c2, "b.txt", "other channel");

    let found = chat.find_file(&c1, "a.txt").await.unwrap().unwrap();
    assert_eq!(found.text(), "new");
    assert!(chat.find_file(&c1, "b.txt").await.unwrap().is_none());
}

#[tokio::test]
async fn uploads_become_findable() {
    let chat = FakeChat::new();
    let channel = ChannelId::new("c1");
    chat.upload(&channel, ChatFile::new("x.txt", "data"))
        .await
        .unwrap();

    assert_eq!(chat.uploads().len(), 1);
    assert!(chat.find_file(&channel, "x.txt").await.unwrap().is_some());
}

#[tokio::test]
async fn failing_sends() {
    let chat = FakeChat::new();
    chat.fail_sends();
    assert!(matches!(
        chat.send(&ChannelId::new("c"), "x").await,
        Err(ChatError::SendFailed(_))
    ));
    assert!(chat.sent().is_empty());
}
