// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Lexer error types.

use crate::span::Span;
use thiserror::Error;

/// Errors raised while tokenizing command text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LexerError {
    #[error("unterminated string starting at position {}", span.start)]
    UnterminatedString { span: Span },

    #[error("unterminated code block starting at position {}", span.start)]
    UnterminatedCodeBlock { span: Span },

    #[error("unterminated file reference starting at position {}", span.start)]
    UnterminatedFileRef { span: Span },

    #[error("character '{ch}' is not allowed in a file name (position {})", span.start)]
    InvalidFileNameChar { ch: char, span: Span },

    #[error("empty file name at position {}", span.start)]
    EmptyFileName { span: Span },

    #[error("unexpected character '{ch}' at position {}", span.start)]
    UnexpectedChar { ch: char, span: Span },
}

impl LexerError {
    pub fn span(&self) -> Span {
        match self {
            LexerError::UnterminatedString { span }
            | LexerError::UnterminatedCodeBlock { span }
            | LexerError::UnterminatedFileRef { span }
            | LexerError::InvalidFileNameChar { span, .. }
            | LexerError::EmptyFileName { span }
            | LexerError::UnexpectedChar { span, .. } => *span,
        }
    }
}
