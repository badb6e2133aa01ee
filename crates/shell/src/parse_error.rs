// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Parser error types.

use crate::error::LexerError;
use crate::span::{diagnostic_context, Span};
use crate::token::TokenKind;
use thiserror::Error;

/// Parser errors.
///
/// Every variant carries a source span so callers can point at the offending
/// input with [`ParseError::diagnostic`].
///
/// # Examples
///
/// ```ignore
/// use acme_shell::{Parser, ParseError};
///
/// let result = Parser::parse("concat a |");
/// assert!(matches!(result, Err(ParseError::UnexpectedEof { .. })));
///
/// let result = Parser::parse("concat a | 'x'");
/// assert!(matches!(result, Err(ParseError::UnexpectedToken { .. })));
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Lexer error during tokenization.
    #[error("{0}")]
    Lexer(#[from] LexerError),

    /// A token that does not fit the grammar at this point.
    #[error("unexpected token {found} at position {}, expected {expected}", span.start)]
    UnexpectedToken {
        found: TokenKind,
        expected: String,
        span: Span,
    },

    /// Input ended while more was required.
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEof { expected: String, span: Span },

    /// Integer-shaped word that does not fit in 64 bits.
    #[error("integer literal '{text}' out of range at position {}", span.start)]
    InvalidInteger { text: String, span: Span },

    /// Substitutions nested deeper than the parser allows.
    #[error("substitutions nested deeper than {limit} levels at position {}", span.start)]
    NestingTooDeep { limit: usize, span: Span },
}

impl ParseError {
    /// Source span of the error.
    pub fn span(&self) -> Span {
        match self {
            ParseError::Lexer(e) => e.span(),
            ParseError::UnexpectedToken { span, .. }
            | ParseError::UnexpectedEof { span, .. }
            | ParseError::InvalidInteger { span, .. }
            | ParseError::NestingTooDeep { span, .. } => *span,
        }
    }

    /// Generate a rich diagnostic with line/column info.
    ///
    /// ```text
    /// error: unexpected end of input, expected command name
    ///   --> line 1, column 11
    ///    |
    ///  1 | concat a |
    ///    |           ^
    /// ```
    pub fn diagnostic(&self, input: &str) -> String {
        diagnostic_context(input, self.span(), &self.to_string())
    }
}
