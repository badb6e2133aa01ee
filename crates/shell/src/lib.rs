// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Lexer and parser for the bot command language.
//!
//! # Quick Start
//!
//! ```ignore
//! use acme_shell::Parser;
//!
//! let ast = Parser::parse("concat (units \"tempF(451)\" K) \" Kelvin\"")?;
//! assert_eq!(ast.command_names(), vec!["concat", "units"]);
//! # Ok::<(), acme_shell::ParseError>(())
//! ```
//!
//! # Syntax
//!
//! - **Sequences**: `a && b` runs `b` only if `a` succeeds
//! - **Pipelines**: `a | b` passes the value of `a` as the first argument of `b`
//! - **Substitution**: `(cmd ...)` evaluates a nested sequence in place
//! - **File content**: `[name.txt]` reads a file from the channel history
//! - **Literals**: integers, `yes`/`no`-style booleans, quoted strings,
//!   fenced code blocks and bare words
//!
//! # AST Traversal
//!
//! Implement [`AstVisitor`] for custom traversal, or use the helpers on
//! [`ExprSeq`] such as [`ExprSeq::command_names`] and
//! [`ExprSeq::max_substitution_depth`].

mod ast;
mod error;
mod lexer;
mod parse_error;
mod parser;
pub mod span;
mod token;

pub use ast::{
    Argument, AstVisitor, BoolLiteral, Command, Expr, ExprComp, ExprSeq, ExprSubst, FileContent,
    IntLiteral, StrLiteral, StrStyle,
};
pub use error::LexerError;
pub use lexer::Lexer;
pub use parse_error::ParseError;
pub use parser::{Parser, MAX_PARSE_DEPTH};
pub use span::{diagnostic_context, locate_span, Span};
pub use token::{
    is_command_name, is_integer_word, parse_bool_word, Token, TokenKind, FALSE_WORDS, TRUE_WORDS,
};

#[cfg(test)]
mod parser_tests;
