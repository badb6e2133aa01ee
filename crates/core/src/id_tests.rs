// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use std::collections::HashMap;

#[test]
fn ids_display_their_value() {
    let guild = GuildId::new("1234");
    assert_eq!(guild.as_str(), "1234");
    assert_eq!(guild.to_string(), "1234");
    assert!(guild == *"1234");
}

#[test]
fn ids_work_as_map_keys_with_str_lookup() {
    let mut map = HashMap::new();
    map.insert(ChannelId::from("general"), 1);
    assert_eq!(map.get("general"), Some(&1));
}

#[test]
fn ids_serialize_transparently() {
    let json = serde_json::to_string(&UserId::new("alice")).unwrap();
    assert_eq!(json, "\"alice\"");
}

#[test]
fn uuid_ids_are_unique() {
    let id_gen = UuidIdGen;
    let a = id_gen.next();
    let b = id_gen.next();
    assert_ne!(a, b);
    assert_eq!(a.len(), 32);
}

#[test]
fn sequential_ids_count_up_across_clones() {
    let id_gen = SequentialIdGen::new("inv");
    let other = id_gen.clone();
    assert_eq!(id_gen.next(), "inv-1");
    assert_eq!(other.next(), "inv-2");
}
