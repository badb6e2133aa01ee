// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use crate::{LexerError, ParseError, Parser, Span, TokenKind, MAX_PARSE_DEPTH};

#[test]
fn empty_input_is_rejected() {
    assert_eq!(
        Parser::parse(""),
        Err(ParseError::UnexpectedEof {
            expected: "command".into(),
            span: Span::empty(0)
        })
    );
}

#[test]
fn trailing_pipe() {
    assert!(matches!(
        Parser::parse("concat a |"),
        Err(ParseError::UnexpectedEof { span, .. }) if span == Span::empty(10)
    ));
}

#[test]
fn trailing_and() {
    assert!(matches!(
        Parser::parse("ping &&"),
        Err(ParseError::UnexpectedEof { .. })
    ));
}

#[test]
fn piping_into_literal_is_rejected() {
    match Parser::parse("concat a | 'x'") {
        Err(ParseError::UnexpectedToken { found, span, .. }) => {
            assert_eq!(found, TokenKind::Quoted("x".into()));
            assert_eq!(span, Span::new(11, 14));
        }
        other => panic!("expected UnexpectedToken, got {other:?}"),
    }
}

#[test]
fn piping_into_file_is_rejected() {
    assert!(matches!(
        Parser::parse("ping | [a.txt]"),
        Err(ParseError::UnexpectedToken { found: TokenKind::FileRef(_), .. })
    ));
}

#[test]
fn literal_head_cannot_take_arguments() {
    assert!(matches!(
        Parser::parse("'a' 'b'"),
        Err(ParseError::UnexpectedToken { .. })
    ));
}

#[test]
fn unclosed_substitution() {
    assert!(matches!(
        Parser::parse("concat (ping"),
        Err(ParseError::UnexpectedEof { ref expected, .. }) if expected == "')'"
    ));
}

#[test]
fn stray_closing_paren() {
    assert!(matches!(
        Parser::parse("ping)"),
        Err(ParseError::UnexpectedToken { found: TokenKind::RParen, .. })
    ));
}

#[test]
fn empty_substitution() {
    assert!(matches!(
        Parser::parse("concat ()"),
        Err(ParseError::UnexpectedToken { found: TokenKind::RParen, .. })
    ));
}

#[test]
fn integer_overflow() {
    assert!(matches!(
        Parser::parse("tail x 99999999999999999999"),
        Err(ParseError::InvalidInteger { ref text, .. }) if text == "99999999999999999999"
    ));
}

#[test]
fn lexer_errors_propagate() {
    assert!(matches!(
        Parser::parse("print \"oops"),
        Err(ParseError::Lexer(LexerError::UnterminatedString { .. }))
    ));
}

#[test]
fn nesting_cap() {
    let deep = format!(
        "{}ping{}",
        "concat (".repeat(MAX_PARSE_DEPTH + 1),
        ")".repeat(MAX_PARSE_DEPTH + 1)
    );
    assert!(matches!(
        Parser::parse(&deep),
        Err(ParseError::NestingTooDeep { limit, .. }) if limit == MAX_PARSE_DEPTH
    ));

    let ok = format!(
        "{}ping{}",
        "concat (".repeat(MAX_PARSE_DEPTH),
        ")".repeat(MAX_PARSE_DEPTH)
    );
    assert_eq!(
        Parser::parse(&ok).unwrap().max_substitution_depth(),
        MAX_PARSE_DEPTH
    );
}

#[test]
fn diagnostic_points_at_token() {
    let input = "concat a | 'x'";
    let err = Parser::parse(input).unwrap_err();
    let diag = err.diagnostic(input);
    assert!(diag.starts_with("error: unexpected token quoted string"));
    assert!(diag.contains("line 1, column 12"));
    assert!(diag.ends_with("|            ^^^"));
}
