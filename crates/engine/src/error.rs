// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for evaluation and command dispatch

use std::time::Duration;

use acme_adapters::{ChatError, TrackSourceError, VoiceError};
use acme_core::code_block;
use acme_shell::{diagnostic_context, ParseError, Span};
use thiserror::Error;

use crate::registry::CommandRegistry;

/// Argument binding failures, always naming the parameter involved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgumentError {
    #[error("missing required argument `{param}` ({expected})")]
    Missing { param: String, expected: &'static str },
    #[error("too many arguments: expected at most {max}, got {got}")]
    TooMany { max: usize, got: usize },
    #[error("argument `{param}` expects {expected}, got {found}")]
    Type {
        param: String,
        expected: &'static str,
        found: String,
    },
    #[error("argument `{param}` {message}")]
    Range { param: String, message: String },
}

impl ArgumentError {
    pub fn range(param: impl Into<String>, message: impl Into<String>) -> Self {
        ArgumentError::Range {
            param: param.into(),
            message: message.into(),
        }
    }
}

/// Failures raised by command handlers.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0}")]
    Failed(String),
    #[error(transparent)]
    Argument(#[from] ArgumentError),
    #[error(transparent)]
    Chat(#[from] ChatError),
    #[error(transparent)]
    Voice(#[from] VoiceError),
    #[error(transparent)]
    Tracks(#[from] TrackSourceError),
    #[error("timed out after {}ms", .0.as_millis())]
    Timeout(Duration),
    /// A named file is missing; reported like a `[name]` reference.
    #[error("File `{0}` not found")]
    FileNotFound(String),
}

impl CommandError {
    pub fn failed(message: impl Into<String>) -> Self {
        CommandError::Failed(message.into())
    }
}

/// Registry construction errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("command name or alias `{0}` is already registered")]
    Duplicate(String),
    #[error("`{0}` is not a valid command name")]
    InvalidName(String),
    #[error("invalid signature for `{command}`: {reason}")]
    InvalidSignature { command: String, reason: String },
}

/// Everything that can stop an evaluation.
///
/// Exactly one of these is reported to the user per failed message.
#[derive(Debug, Error)]
pub enum EvalError {
    #[error("syntax error: {0}")]
    Syntax(ParseError),
    #[error("Command `{name}` not found")]
    UnknownCommand { name: String, span: Span },
    #[error("{source}")]
    Argument {
        command: String,
        source: ArgumentError,
        span: Span,
    },
    #[error("File `{name}` not found")]
    FileNotFound { name: String, span: Span },
    #[error("{command}: {source}")]
    Handler {
        command: String,
        source: CommandError,
        span: Span,
    },
    #[error("substitutions nested deeper than {limit} levels")]
    NestingLimitExceeded { limit: usize, span: Span },
    #[error("evaluation cancelled")]
    Cancelled,
}

impl From<ParseError> for EvalError {
    fn from(err: ParseError) -> Self {
        match err {
            ParseError::NestingTooDeep { limit, span } => {
                EvalError::NestingLimitExceeded { limit, span }
            }
            other => EvalError::Syntax(other),
        }
    }
}

impl EvalError {
    /// Source span the error points at, if any.
    pub fn span(&self) -> Option<Span> {
        match self {
            EvalError::Syntax(e) => Some(e.span()),
            EvalError::UnknownCommand { span, .. }
            | EvalError::Argument { span, .. }
            | EvalError::FileNotFound { span, .. }
            | EvalError::Handler { span, .. }
            | EvalError::NestingLimitExceeded { span, .. } => Some(*span),
            EvalError::Cancelled => None,
        }
    }

    /// Short kind label used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            EvalError::Syntax(_) => "syntax",
            EvalError::UnknownCommand { .. } => "unknown_command",
            EvalError::Argument { .. } => "argument",
            EvalError::FileNotFound { .. } => "file_not_found",
            EvalError::Handler { .. } => "handler",
            EvalError::NestingLimitExceeded { .. } => "nesting_limit",
            EvalError::Cancelled => "cancelled",
        }
    }

    /// Render the single message shown to the user.
    ///
    /// ```text
    /// Error: argument `line_count` expects integer, got string "ten"
    /// Command usage: `!tail <data> [line_count=10]`
    /// For more information, refer to `!help tail`.
    /// ```
    pub fn report(&self, input: &str, registry: &CommandRegistry, prefix: &str) -> String {
        match self {
            EvalError::Syntax(e) => format!("Syntax error:\n{}", code_block(&e.diagnostic(input))),
            EvalError::NestingLimitExceeded { span, .. } => {
                let snippet = diagnostic_context(input, *span, &self.to_string());
                format!("Error:\n{}", code_block(&snippet))
            }
            EvalError::Argument {
                command, source, ..
            } => {
                let mut out = format!("Error: {source}");
                if let Some(cmd) = registry.resolve(command) {
                    out.push_str(&format!(
                        "\nCommand usage: `{}`\nFor more information, refer to `{prefix}help {}`.",
                        cmd.spec.usage(prefix),
                        cmd.spec.name
                    ));
                }
                out
            }
            EvalError::Handler {
                command,
                source: CommandError::Argument(source),
                span,
            } => EvalError::Argument {
                command: command.clone(),
                source: source.clone(),
                span: *span,
            }
            .report(input, registry, prefix),
            other => format!("Error: {other}"),
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
