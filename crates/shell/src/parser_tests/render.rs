// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[yare::parameterized(
    bare_words   = { "concat a b", r#"concat "a" "b""# },
    literals     = { "tail x 5 && loop ON", r#"tail "x" 5 && loop true"# },
    pipeline     = { "[f.txt]|count", "[f.txt] | count" },
    file_spaces  = { "open [ a b.txt ]", "open [a b.txt]" },
    substitution = { "concat (print 'x') y", r#"concat (print "x") "y""# },
    escapes      = { r#"print 'say "hi" \\o/'"#, r#"print "say \"hi\" \\o/""# },
    code_block   = { "print ```py\nx\n```", "print \"x\n\"" },
)]
fn canonical_rendering(input: &str, expected: &str) {
    assert_eq!(parse(input).to_string(), expected);
}

#[yare::parameterized(
    simple     = { "ping" },
    sequence   = { "clear && play-url [urls.txt]" },
    pipeline   = { "enumerate [code.py] | grep eval | print python" },
    nested     = { "concat (units \"tempF(451)\" K) \" Kelvin\"" },
    literal    = { "'hello world' | count" },
    code       = { "```\nlet x = \"a\\\\b\";\n``` | grep let" },
    head_subst = { "(concat a (print b)) | count && ping" },
)]
fn rendering_reparses_to_equal_tree(input: &str) {
    let first = parse(input);
    let second = parse(&first.to_string());
    assert_eq!(first, second);
}
