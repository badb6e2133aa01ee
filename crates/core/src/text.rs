// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Chat text helpers: code blocks and message pagination.

/// Longest message the chat platform accepts, in characters.
pub const MAX_MESSAGE_LENGTH: usize = 2000;

const FENCE: &str = "```";
/// Backticks separated by zero-width spaces.
const BROKEN_FENCE: &str = "`\u{200b}`\u{200b}`";

/// Break up triple backticks so `text` cannot close an enclosing block.
pub fn escape_md_block(text: &str) -> String {
    text.replace(FENCE, BROKEN_FENCE)
}

/// Wrap `text` in a fenced block, escaping nested fences.
pub fn code_block(text: &str) -> String {
    format!("{FENCE}\n{}\n{FENCE}", escape_md_block(text))
}

/// Characters added around each page by [`code_block`].
pub const CODE_BLOCK_OVERHEAD: usize = 2 * FENCE.len() + 2;

/// Split `text` into pages of at most `limit` characters.
///
/// Pages break between lines. Lines longer than the limit are word-wrapped,
/// and words longer than the limit are cut. Empty lines are preserved and
/// trailing whitespace is trimmed from each page.
pub fn split_message(text: &str, limit: usize) -> Vec<String> {
    let limit = limit.max(1);
    let mut pages = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for line in text.lines().flat_map(|line| wrap_line(line, limit)) {
        let line_len = line.chars().count();
        if current_len + line_len > limit {
            pages.push(current.trim_end().to_string());
            current.clear();
            current_len = 0;
        }
        current.push_str(&line);
        current.push('\n');
        current_len += line_len + 1;
    }

    pages.push(current.trim_end().to_string());
    pages
}

fn wrap_line(line: &str, limit: usize) -> Vec<String> {
    if line.chars().count() <= limit {
        return vec![line.to_string()];
    }

    let mut out = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;
    for word in line.split_whitespace() {
        let chars: Vec<char> = word.chars().collect();
        for piece in chars.chunks(limit) {
            let piece_len = piece.len();
            let needed = if current_len == 0 { piece_len } else { current_len + 1 + piece_len };
            if needed > limit {
                out.push(std::mem::take(&mut current));
                current_len = 0;
            }
            if current_len > 0 {
                current.push(' ');
                current_len += 1;
            }
            current.extend(piece);
            current_len += piece_len;
        }
    }
    if !current.is_empty() {
        out.push(current);
    }
    out
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
