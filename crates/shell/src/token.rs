// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Token types produced by the lexer.

use std::fmt;

pub use crate::span::Span;

/// The boolean vocabulary. Matching is case-insensitive on the whole word.
pub const TRUE_WORDS: [&str; 4] = ["yes", "true", "enable", "on"];
pub const FALSE_WORDS: [&str; 4] = ["no", "false", "disable", "off"];

/// A lexical token with its source span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }
}

/// Token categories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// Unquoted word; classified as a command name, integer, boolean or
    /// string by the parser depending on position.
    Word(String),
    /// `"..."` or `'...'` with escapes resolved.
    Quoted(String),
    /// Fenced code block content without the fences or language tag.
    CodeBlock(String),
    /// `[name]` file reference.
    FileRef(String),
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `|`
    Pipe,
    /// `&&`
    And,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Word(w) => write!(f, "'{w}'"),
            TokenKind::Quoted(_) => write!(f, "quoted string"),
            TokenKind::CodeBlock(_) => write!(f, "code block"),
            TokenKind::FileRef(name) => write!(f, "file reference '[{name}]'"),
            TokenKind::LParen => write!(f, "'('"),
            TokenKind::RParen => write!(f, "')'"),
            TokenKind::Pipe => write!(f, "'|'"),
            TokenKind::And => write!(f, "'&&'"),
        }
    }
}

/// Word characters, as in the regex class `\w`.
#[inline]
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Check whether `s` is a valid command name: word characters and `-`.
pub fn is_command_name(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| is_word_char(c) || c == '-')
}

/// Check whether a character may appear inside `[...]`.
#[inline]
pub fn is_file_name_char(c: char) -> bool {
    is_word_char(c) || matches!(c, '-' | '.' | ' ' | '\'' | '"')
}

/// Interpret a whole word as a boolean keyword.
pub fn parse_bool_word(s: &str) -> Option<bool> {
    if TRUE_WORDS.iter().any(|w| w.eq_ignore_ascii_case(s)) {
        Some(true)
    } else if FALSE_WORDS.iter().any(|w| w.eq_ignore_ascii_case(s)) {
        Some(false)
    } else {
        None
    }
}

/// Check whether a whole word has integer shape: optional sign, then digits.
pub fn is_integer_word(s: &str) -> bool {
    let digits = s.strip_prefix(['-', '+']).unwrap_or(s);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}
