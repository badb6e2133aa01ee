// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Recursive-descent parser over the token stream.

mod arguments;

use crate::ast::{Command, Expr, ExprComp, ExprSeq, ExprSubst, FileContent, StrLiteral, StrStyle};
use crate::lexer::Lexer;
use crate::parse_error::ParseError;
use crate::token::{is_command_name, Span, Token, TokenKind};

/// Deepest `( ... )` nesting the parser accepts.
pub const MAX_PARSE_DEPTH: usize = 128;

/// Parser that transforms tokens into an [`ExprSeq`].
///
/// Parsing is all-or-nothing: any grammar violation fails with a
/// [`ParseError`] pointing at the offending token and no tree is returned.
///
/// # Examples
///
/// ```ignore
/// use acme_shell::Parser;
///
/// let ast = Parser::parse("enumerate [code.py] | grep eval | print python")?;
/// assert_eq!(ast.comps.len(), 1);
/// assert_eq!(ast.comps[0].stages.len(), 2);
///
/// let ast = Parser::parse("clear && play-url [urls.txt]")?;
/// assert_eq!(ast.comps.len(), 2);
/// # Ok::<(), acme_shell::ParseError>(())
/// ```
pub struct Parser {
    /// The tokens to parse.
    tokens: Vec<Token>,
    /// Current position in the token stream.
    pos: usize,
    /// Length of the original input (for end-of-input spans).
    input_len: usize,
    /// Current substitution nesting.
    depth: usize,
}

impl Parser {
    /// Parse input string into an expression sequence.
    pub fn parse(input: &str) -> Result<ExprSeq, ParseError> {
        let tokens = Lexer::tokenize(input)?;
        let mut parser = Parser {
            tokens,
            pos: 0,
            input_len: input.len(),
            depth: 0,
        };
        let seq = parser.parse_expr_seq()?;
        match parser.peek() {
            None => Ok(seq),
            Some(_) => Err(parser.unexpected_token("'&&', '|' or end of input")),
        }
    }

    /// `ExprComp ( '&&' ExprComp )*`
    fn parse_expr_seq(&mut self) -> Result<ExprSeq, ParseError> {
        let start = self.current_span_start();
        let mut comps = vec![self.parse_expr_comp()?];
        while matches!(self.peek_kind(), Some(TokenKind::And)) {
            self.advance();
            comps.push(self.parse_expr_comp()?);
        }
        Ok(ExprSeq {
            comps,
            span: Span::new(start, self.current_span_end()),
        })
    }

    /// `Expr ( '|' Command )*`
    fn parse_expr_comp(&mut self) -> Result<ExprComp, ParseError> {
        let start = self.current_span_start();
        let head = self.parse_expr()?;
        let mut stages = Vec::new();
        while matches!(self.peek_kind(), Some(TokenKind::Pipe)) {
            self.advance();
            stages.push(self.parse_pipeline_stage()?);
        }
        Ok(ExprComp {
            head,
            stages,
            span: Span::new(start, self.current_span_end()),
        })
    }

    /// First pipeline position: any value-producing expression.
    fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        let Some(token) = self.peek() else {
            return Err(self.unexpected_token("command"));
        };
        let span = token.span;
        match &token.kind {
            TokenKind::Word(w) if is_command_name(w) => Ok(Expr::Command(self.parse_command()?)),
            TokenKind::Word(w) => {
                let value = w.clone();
                self.advance();
                Ok(Expr::Str(StrLiteral {
                    value,
                    style: StrStyle::Bare,
                    span,
                }))
            }
            TokenKind::Quoted(_) | TokenKind::CodeBlock(_) => {
                let lit = self.parse_quoted_literal()?;
                Ok(Expr::Str(lit))
            }
            TokenKind::FileRef(name) => {
                let file_name = name.clone();
                self.advance();
                Ok(Expr::FileContent(FileContent { file_name, span }))
            }
            TokenKind::LParen => Ok(Expr::Subst(self.parse_subst()?)),
            _ => Err(self.unexpected_token("command")),
        }
    }

    /// Stages after `|` must be commands.
    fn parse_pipeline_stage(&mut self) -> Result<Command, ParseError> {
        match self.peek_kind() {
            Some(TokenKind::Word(w)) if is_command_name(w) => self.parse_command(),
            _ => Err(self.unexpected_token("command name")),
        }
    }

    /// `COMMAND_NAME Argument*`
    fn parse_command(&mut self) -> Result<Command, ParseError> {
        let (name, name_span) = match self.peek() {
            Some(Token {
                kind: TokenKind::Word(w),
                span,
            }) => (w.clone(), *span),
            _ => return Err(self.unexpected_token("command name")),
        };
        self.advance();

        let mut args = Vec::new();
        while self.at_argument_start() {
            args.push(self.parse_argument()?);
        }

        Ok(Command {
            name,
            name_span,
            args,
            span: Span::new(name_span.start, self.current_span_end()),
        })
    }

    /// `'(' ExprSeq ')'`
    fn parse_subst(&mut self) -> Result<ExprSubst, ParseError> {
        let open = self.current_span_start();
        self.advance();

        self.depth += 1;
        if self.depth > MAX_PARSE_DEPTH {
            return Err(ParseError::NestingTooDeep {
                limit: MAX_PARSE_DEPTH,
                span: Span::new(open, open + 1),
            });
        }
        let body = self.parse_expr_seq()?;
        self.depth -= 1;

        match self.peek_kind() {
            Some(TokenKind::RParen) => {
                self.advance();
            }
            _ => return Err(self.unexpected_token("')'")),
        }

        Ok(ExprSubst {
            body,
            span: Span::new(open, self.current_span_end()),
        })
    }

    /// Quoted string or code block at the current position.
    fn parse_quoted_literal(&mut self) -> Result<StrLiteral, ParseError> {
        let lit = match self.peek() {
            Some(Token {
                kind: TokenKind::Quoted(s),
                span,
            }) => StrLiteral {
                value: s.clone(),
                style: StrStyle::Quoted,
                span: *span,
            },
            Some(Token {
                kind: TokenKind::CodeBlock(s),
                span,
            }) => StrLiteral {
                value: s.clone(),
                style: StrStyle::CodeBlock,
                span: *span,
            },
            _ => return Err(self.unexpected_token("string")),
        };
        self.advance();
        Ok(lit)
    }

    // Helper methods

    /// Peek at the current token without consuming it.
    #[inline]
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    /// Peek at the kind of the current token.
    #[inline]
    fn peek_kind(&self) -> Option<&TokenKind> {
        self.peek().map(|t| &t.kind)
    }

    /// Advance to the next token.
    #[inline]
    fn advance(&mut self) -> Option<&Token> {
        let token = self.tokens.get(self.pos);
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn current_span_start(&self) -> usize {
        self.peek().map(|t| t.span.start).unwrap_or(self.input_len)
    }

    fn current_span_end(&self) -> usize {
        match self.pos.checked_sub(1).and_then(|i| self.tokens.get(i)) {
            Some(token) => token.span.end,
            None => 0,
        }
    }

    /// Create an unexpected token error at the current position.
    fn unexpected_token(&self, expected: &str) -> ParseError {
        match self.peek() {
            Some(token) => ParseError::UnexpectedToken {
                found: token.kind.clone(),
                expected: expected.to_string(),
                span: token.span,
            },
            None => ParseError::UnexpectedEof {
                expected: expected.to_string(),
                span: Span::empty(self.input_len),
            },
        }
    }
}
