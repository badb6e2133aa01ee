// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use yare::parameterized;

const TEN: &str = "1\n2\n3\n4\n5\n6\n7\n8\n9\n10";

#[parameterized(
    fewer = { "a\nb\nc", 2, "b\nc" },
    more_than_available = { "a\nb", 5, "a\nb" },
    trailing_newline = { "a\nb\n", 1, "b" },
    empty = { "", 3, "" },
)]
fn tail_keeps_last(data: &str, n: usize, expected: &str) {
    assert_eq!(tail_lines(data, n), expected);
}

#[parameterized(
    fewer = { "a\nb\nc", 2, "a\nb" },
    more_than_available = { "a\nb", 5, "a\nb" },
    one = { TEN, 1, "1" },
)]
fn head_keeps_first(data: &str, n: usize, expected: &str) {
    assert_eq!(head_lines(data, n), expected);
}

#[parameterized(
    middle = { 3, 5, "3\n4\n5" },
    single = { 7, 7, "7" },
    clamped = { 9, 40, "9\n10" },
    beyond = { 20, 30, "" },
)]
fn line_range_is_inclusive(start: usize, end: i64, expected: &str) {
    assert_eq!(line_range(TEN, start, end).unwrap(), expected);
}

#[test]
fn line_range_rejects_inverted_bounds() {
    let err = line_range(TEN, 5, 4).unwrap_err();
    assert_eq!(
        err.to_string(),
        "argument `start` must not be greater than `end`"
    );
    assert!(line_range(TEN, 1, -1).is_err());
}

#[test]
fn enumerate_pads_to_widest_number() {
    let output = enumerate_lines(TEN);
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines[0], " 1  1");
    assert_eq!(lines[9], "10  10");
}

#[test]
fn enumerate_single_digit() {
    assert_eq!(enumerate_lines("x\ny"), "1  x\n2  y");
    assert_eq!(enumerate_lines(""), "");
}

#[test]
fn sort_orders_lines() {
    assert_eq!(sort_lines("pear\napple\nBanana"), "Banana\napple\npear");
}

#[test]
fn unique_drops_adjacent_duplicates_only() {
    assert_eq!(unique_lines("a\na\nb\na\na"), "a\nb\na");
}

#[test]
fn shuffle_keeps_every_line() {
    let mut rng = StdRng::seed_from_u64(7);
    let output = shuffle_lines(TEN, &mut rng);
    assert_eq!(sort_lines(&output), sort_lines(TEN));
    assert_eq!(output.lines().count(), 10);
}
