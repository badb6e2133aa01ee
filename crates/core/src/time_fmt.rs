// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Track duration formatting.

/// Format seconds as `M:SS`, or `H:MM:SS` from one hour up.
///
/// ```ignore
/// assert_eq!(format_duration(75), "1:15");
/// assert_eq!(format_duration(3725), "1:02:05");
/// ```
pub fn format_duration(secs: u64) -> String {
    let hrs = secs / 3600;
    let mins = (secs % 3600) / 60;
    let secs = secs % 60;
    if hrs > 0 {
        format!("{hrs}:{mins:02}:{secs:02}")
    } else {
        format!("{mins}:{secs:02}")
    }
}

#[cfg(test)]
#[path = "time_fmt_tests.rs"]
mod tests;
