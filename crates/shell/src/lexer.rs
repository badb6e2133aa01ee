// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Lexer that turns command text into tokens.
//!
//! The lexer is context-free: bare words are emitted as [`TokenKind::Word`]
//! and the parser decides whether a word is a command name, an integer, a
//! boolean or a plain string based on where it appears.

pub use crate::error::LexerError;
use crate::token::{is_file_name_char, is_word_char, Span, Token, TokenKind};

const FENCE: &str = "```";

/// Tokenizer over a borrowed input string.
pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    /// Tokenize the whole input.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// use acme_shell::{Lexer, TokenKind};
    ///
    /// let tokens = Lexer::tokenize("concat a | print")?;
    /// assert_eq!(tokens.len(), 4);
    /// assert_eq!(tokens[2].kind, TokenKind::Pipe);
    /// # Ok::<(), acme_shell::LexerError>(())
    /// ```
    pub fn tokenize(input: &'a str) -> Result<Vec<Token>, LexerError> {
        let mut lexer = Lexer { input, pos: 0 };
        let mut tokens = Vec::new();
        while let Some(token) = lexer.next_token()? {
            tokens.push(token);
        }
        Ok(tokens)
    }

    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn skip_whitespace(&mut self) {
        let rest = self.rest();
        self.pos += rest.len() - rest.trim_start().len();
    }

    fn next_token(&mut self) -> Result<Option<Token>, LexerError> {
        self.skip_whitespace();
        let start = self.pos;
        let rest = self.rest();
        let Some(c) = rest.chars().next() else {
            return Ok(None);
        };

        let kind = if rest.starts_with("&&") {
            self.pos += 2;
            TokenKind::And
        } else if rest.starts_with(FENCE) {
            self.lex_code_block(start)?
        } else {
            match c {
                '|' => {
                    self.pos += 1;
                    TokenKind::Pipe
                }
                '(' => {
                    self.pos += 1;
                    TokenKind::LParen
                }
                ')' => {
                    self.pos += 1;
                    TokenKind::RParen
                }
                '[' => self.lex_file_ref(start)?,
                '"' | '\'' => self.lex_quoted(c, start)?,
                _ => self.lex_word(start)?,
            }
        };

        Ok(Some(Token::new(kind, Span::new(start, self.pos))))
    }

    /// Fenced block: opening fence, optional language line, lazy content.
    fn lex_code_block(&mut self, start: usize) -> Result<TokenKind, LexerError> {
        let body_start = start + FENCE.len();
        let body = &self.input[body_start..];

        // The language line may not contain backticks.
        let content_start = match body.find(['`', '\n']) {
            Some(i) if body[i..].starts_with('\n') => body_start + i + 1,
            _ => body_start,
        };

        match self.input[content_start..].find(FENCE) {
            Some(len) => {
                let content = &self.input[content_start..content_start + len];
                self.pos = content_start + len + FENCE.len();
                Ok(TokenKind::CodeBlock(content.to_string()))
            }
            None => Err(LexerError::UnterminatedCodeBlock {
                span: Span::new(start, self.input.len()),
            }),
        }
    }

    fn lex_file_ref(&mut self, start: usize) -> Result<TokenKind, LexerError> {
        let name_start = start + 1;
        for (i, ch) in self.input[name_start..].char_indices() {
            let at = name_start + i;
            if ch == ']' {
                let name = self.input[name_start..at].trim();
                self.pos = at + 1;
                if name.is_empty() {
                    return Err(LexerError::EmptyFileName {
                        span: Span::new(start, self.pos),
                    });
                }
                return Ok(TokenKind::FileRef(name.to_string()));
            }
            if !is_file_name_char(ch) {
                return Err(LexerError::InvalidFileNameChar {
                    ch,
                    span: Span::new(at, at + ch.len_utf8()),
                });
            }
        }
        Err(LexerError::UnterminatedFileRef {
            span: Span::new(start, self.input.len()),
        })
    }

    /// Quoted string. A backslash escapes the quote character or itself;
    /// any other backslash is kept literally.
    fn lex_quoted(&mut self, quote: char, start: usize) -> Result<TokenKind, LexerError> {
        let mut value = String::new();
        let mut chars = self.input[start + 1..].char_indices();

        while let Some((i, ch)) = chars.next() {
            if ch == quote {
                self.pos = start + 1 + i + ch.len_utf8();
                return Ok(TokenKind::Quoted(value));
            }
            if ch == '\\' {
                let escaped = chars.as_str().chars().next();
                if let Some(next) = escaped.filter(|&n| n == quote || n == '\\') {
                    value.push(next);
                    chars.next();
                    continue;
                }
            }
            value.push(ch);
        }

        Err(LexerError::UnterminatedString {
            span: Span::new(start, self.input.len()),
        })
    }

    /// Bare word: the longest prefix of the non-whitespace run that ends on a
    /// word boundary.
    fn lex_word(&mut self, start: usize) -> Result<TokenKind, LexerError> {
        let rest = self.rest();
        let run_len = rest.find(char::is_whitespace).unwrap_or(rest.len());
        let run = &rest[..run_len];

        let mut end = None;
        let mut chars = run.char_indices().peekable();
        while let Some((i, ch)) = chars.next() {
            let next_is_word = chars.peek().is_some_and(|&(_, n)| is_word_char(n));
            if is_word_char(ch) != next_is_word {
                end = Some(i + ch.len_utf8());
            }
        }

        match end {
            Some(len) => {
                self.pos += len;
                Ok(TokenKind::Word(run[..len].to_string()))
            }
            None => {
                let ch = run.chars().next().unwrap_or_default();
                Err(LexerError::UnexpectedChar {
                    ch,
                    span: Span::new(start, start + ch.len_utf8()),
                })
            }
        }
    }
}

#[cfg(test)]
#[path = "lexer_tests.rs"]
mod tests;
