// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Source location tracking for command text.

use serde::{Deserialize, Serialize};

/// A byte range in the source text.
///
/// Spans use byte offsets so they can slice the original UTF-8 input directly.
///
/// # Examples
///
/// ```ignore
/// use acme_shell::Span;
///
/// let source = "concat hello";
/// let span = Span::new(7, 12);
/// assert_eq!(span.slice(source), "hello");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Span {
    /// Start byte offset (inclusive)
    pub start: usize,
    /// End byte offset (exclusive)
    pub end: usize,
}

impl Span {
    /// Create a new span from start to end byte positions.
    #[inline]
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "span start must not exceed end");
        Self { start, end }
    }

    /// Create an empty span at a position.
    #[inline]
    pub fn empty(pos: usize) -> Self {
        Self::new(pos, pos)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Merge two spans into one that covers both.
    #[inline]
    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// Extract the spanned text, or `""` when out of bounds.
    #[inline]
    pub fn slice<'a>(&self, source: &'a str) -> &'a str {
        source.get(self.start..self.end).unwrap_or("")
    }
}

/// Locate a span in source, returning `(line_number, column, line_content)`.
///
/// Lines are 1-indexed, columns are 0-indexed character counts from the
/// start of the line.
pub fn locate_span(source: &str, span: Span) -> (usize, usize, &str) {
    let start = span.start.min(source.len());
    let mut line_num = 1;
    let mut line_start = 0;

    for (i, ch) in source.char_indices() {
        if i >= start {
            break;
        }
        if ch == '\n' {
            line_num += 1;
            line_start = i + 1;
        }
    }

    let line_end = source[line_start..]
        .find('\n')
        .map(|i| line_start + i)
        .unwrap_or(source.len());
    let col = source
        .get(line_start..start)
        .map(|s| s.chars().count())
        .unwrap_or(0);

    (line_num, col, &source[line_start..line_end])
}

/// Render a diagnostic with line/column info and a caret under the span.
///
/// ```text
/// error: unexpected token '|'
///   --> line 1, column 8
///    |
///  1 | concat | | bad
///    |        ^
/// ```
pub fn diagnostic_context(source: &str, span: Span, message: &str) -> String {
    let (line_num, col, line_content) = locate_span(source, span);
    // Multi-line spans only underline up to the end of the first line.
    let visible = line_content.chars().count().saturating_sub(col).max(1);
    let caret_len = span.slice(source).chars().count().clamp(1, visible);

    format!(
        "error: {}\n  --> line {}, column {}\n   |\n{:>3} | {}\n   | {}{}",
        message,
        line_num,
        col + 1,
        line_num,
        line_content,
        " ".repeat(col),
        "^".repeat(caret_len)
    )
}

#[cfg(test)]
#[path = "span_tests.rs"]
mod tests;
