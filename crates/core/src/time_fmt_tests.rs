// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::format_duration;

#[yare::parameterized(
    zero          = { 0,     "0:00" },
    seconds       = { 7,     "0:07" },
    one_minute    = { 60,    "1:00" },
    minutes       = { 75,    "1:15" },
    max_minutes   = { 3599,  "59:59" },
    one_hour      = { 3600,  "1:00:00" },
    hour_mixed    = { 3725,  "1:02:05" },
    long          = { 40000, "11:06:40" },
)]
fn duration(secs: u64, expected: &str) {
    assert_eq!(format_duration(secs), expected);
}
