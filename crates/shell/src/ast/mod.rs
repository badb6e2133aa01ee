// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Expression tree for parsed command text.
//!
//! ```text
//! ExprSeq
//! └── ExprComp[]          joined by &&
//!     ├── head: Expr      Command | FileContent | ExprSubst | StrLiteral
//!     └── stages: Command[]  joined by |
//!         └── args: Argument[]
//! ```
//!
//! Nodes carry spans for error reporting. Equality ignores spans and string
//! quoting style, so two trees compare equal when they evaluate the same way.

mod render;
mod utils;
mod visitor;

pub use visitor::AstVisitor;

use crate::span::Span;

/// `ExprComp ( '&&' ExprComp )*`
#[derive(Debug, Clone)]
pub struct ExprSeq {
    pub comps: Vec<ExprComp>,
    pub span: Span,
}

/// `Expr ( '|' Command )*`
///
/// The value of `head` is passed as the first argument of `stages[0]`, whose
/// value is passed to `stages[1]`, and so on.
#[derive(Debug, Clone)]
pub struct ExprComp {
    pub head: Expr,
    pub stages: Vec<Command>,
    pub span: Span,
}

impl ExprComp {
    /// Number of pipeline stages including the head.
    pub fn stage_count(&self) -> usize {
        1 + self.stages.len()
    }
}

/// A value-producing expression in first pipeline position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Command(Command),
    FileContent(FileContent),
    Subst(ExprSubst),
    Str(StrLiteral),
}

impl Expr {
    pub fn span(&self) -> Span {
        match self {
            Expr::Command(c) => c.span,
            Expr::FileContent(f) => f.span,
            Expr::Subst(s) => s.span,
            Expr::Str(s) => s.span,
        }
    }
}

/// `COMMAND_NAME Argument*`
#[derive(Debug, Clone)]
pub struct Command {
    pub name: String,
    pub name_span: Span,
    pub args: Vec<Argument>,
    pub span: Span,
}

/// A command argument, classified in precedence order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Argument {
    Int(IntLiteral),
    Bool(BoolLiteral),
    FileContent(FileContent),
    Subst(ExprSubst),
    Str(StrLiteral),
}

impl Argument {
    pub fn span(&self) -> Span {
        match self {
            Argument::Int(i) => i.span,
            Argument::Bool(b) => b.span,
            Argument::FileContent(f) => f.span,
            Argument::Subst(s) => s.span,
            Argument::Str(s) => s.span,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct IntLiteral {
    pub value: i64,
    pub span: Span,
}

#[derive(Debug, Clone, Copy)]
pub struct BoolLiteral {
    pub value: bool,
    pub span: Span,
}

/// `[name]`: contents of the most recent channel file with this name.
#[derive(Debug, Clone)]
pub struct FileContent {
    pub file_name: String,
    pub span: Span,
}

/// `( ExprSeq )`
#[derive(Debug, Clone)]
pub struct ExprSubst {
    pub body: ExprSeq,
    pub span: Span,
}

/// How a string literal was written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrStyle {
    Bare,
    Quoted,
    CodeBlock,
}

#[derive(Debug, Clone)]
pub struct StrLiteral {
    pub value: String,
    pub style: StrStyle,
    pub span: Span,
}

// Span-insensitive equality.

impl PartialEq for ExprSeq {
    fn eq(&self, other: &Self) -> bool {
        self.comps == other.comps
    }
}
impl Eq for ExprSeq {}

impl PartialEq for ExprComp {
    fn eq(&self, other: &Self) -> bool {
        self.head == other.head && self.stages == other.stages
    }
}
impl Eq for ExprComp {}

impl PartialEq for Command {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.args == other.args
    }
}
impl Eq for Command {}

impl PartialEq for IntLiteral {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}
impl Eq for IntLiteral {}

impl PartialEq for BoolLiteral {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}
impl Eq for BoolLiteral {}

impl PartialEq for FileContent {
    fn eq(&self, other: &Self) -> bool {
        self.file_name == other.file_name
    }
}
impl Eq for FileContent {}

impl PartialEq for ExprSubst {
    fn eq(&self, other: &Self) -> bool {
        self.body == other.body
    }
}
impl Eq for ExprSubst {}

impl PartialEq for StrLiteral {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}
impl Eq for StrLiteral {}
