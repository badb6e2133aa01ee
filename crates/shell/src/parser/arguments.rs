// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Argument classification.
//!
//! A bare word is tried as an integer, then as a boolean keyword, and is a
//! string otherwise. Quoted text and code blocks are always strings.

use super::Parser;
use crate::ast::{Argument, BoolLiteral, FileContent, IntLiteral, StrLiteral, StrStyle};
use crate::parse_error::ParseError;
use crate::token::{is_integer_word, parse_bool_word, TokenKind};

impl Parser {
    /// Whether the current token can begin an argument.
    pub(super) fn at_argument_start(&self) -> bool {
        matches!(
            self.peek_kind(),
            Some(
                TokenKind::Word(_)
                    | TokenKind::Quoted(_)
                    | TokenKind::CodeBlock(_)
                    | TokenKind::FileRef(_)
                    | TokenKind::LParen
            )
        )
    }

    pub(super) fn parse_argument(&mut self) -> Result<Argument, ParseError> {
        let Some(token) = self.peek() else {
            return Err(self.unexpected_token("argument"));
        };
        let span = token.span;
        match &token.kind {
            TokenKind::Word(w) => {
                let arg = classify_word(w, span)?;
                self.advance();
                Ok(arg)
            }
            TokenKind::FileRef(name) => {
                let file_name = name.clone();
                self.advance();
                Ok(Argument::FileContent(FileContent { file_name, span }))
            }
            TokenKind::LParen => Ok(Argument::Subst(self.parse_subst()?)),
            TokenKind::Quoted(_) | TokenKind::CodeBlock(_) => {
                Ok(Argument::Str(self.parse_quoted_literal()?))
            }
            _ => Err(self.unexpected_token("argument")),
        }
    }
}

fn classify_word(word: &str, span: crate::Span) -> Result<Argument, ParseError> {
    if is_integer_word(word) {
        return word
            .parse::<i64>()
            .map(|value| Argument::Int(IntLiteral { value, span }))
            .map_err(|_| ParseError::InvalidInteger {
                text: word.to_string(),
                span,
            });
    }
    if let Some(value) = parse_bool_word(word) {
        return Ok(Argument::Bool(BoolLiteral { value, span }));
    }
    Ok(Argument::Str(StrLiteral {
        value: word.to_string(),
        style: StrStyle::Bare,
        span,
    }))
}
