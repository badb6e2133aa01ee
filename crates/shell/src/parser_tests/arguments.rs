// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::StrStyle;

#[yare::parameterized(
    zero     = { "0", 0 },
    positive = { "42", 42 },
    negative = { "-7", -7 },
    plus     = { "+3", 3 },
    max      = { "9223372036854775807", i64::MAX },
)]
fn integer_arguments(word: &str, expected: i64) {
    let args = args_of(&format!("tail x {word}"));
    assert!(matches!(&args[1], Argument::Int(i) if i.value == expected));
}

#[yare::parameterized(
    on      = { "on", true },
    yes_mix = { "Yes", true },
    enable  = { "ENABLE", true },
    true_   = { "true", true },
    off     = { "off", false },
    no      = { "no", false },
    disable = { "disable", false },
    false_  = { "FaLsE", false },
)]
fn boolean_arguments(word: &str, expected: bool) {
    let args = args_of(&format!("loop {word}"));
    assert!(matches!(&args[0], Argument::Bool(b) if b.value == expected));
}

#[test]
fn boolean_must_be_whole_word() {
    let args = args_of("print online yesterday");
    assert!(matches!(&args[0], Argument::Str(s) if s.value == "online"));
    assert!(matches!(&args[1], Argument::Str(s) if s.value == "yesterday"));
}

#[test]
fn integer_must_be_whole_word() {
    let args = args_of("print 12abc");
    assert!(matches!(&args[0], Argument::Str(s) if s.value == "12abc"));
}

#[test]
fn quoted_keywords_stay_strings() {
    let args = args_of("print \"on\" '5'");
    assert!(matches!(&args[0], Argument::Str(s) if s.value == "on" && s.style == StrStyle::Quoted));
    assert!(matches!(&args[1], Argument::Str(s) if s.value == "5"));
}

#[test]
fn file_content_argument() {
    let args = args_of("grep [my log.txt] error");
    assert!(matches!(&args[0], Argument::FileContent(f) if f.file_name == "my log.txt"));
    assert!(matches!(&args[1], Argument::Str(s) if s.value == "error"));
}

#[test]
fn option_like_words_are_strings() {
    let args = args_of("grep x pattern -iv");
    assert!(matches!(&args[2], Argument::Str(s) if s.value == "-iv"));
}

#[test]
fn code_block_argument() {
    let args = args_of("print ```py\nx = 1\n``` python");
    assert!(matches!(&args[0], Argument::Str(s) if s.value == "x = 1\n" && s.style == StrStyle::CodeBlock));
    assert!(matches!(&args[1], Argument::Str(s) if s.value == "python"));
}
