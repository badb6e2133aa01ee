//! File reference specs against a files directory.

use crate::prelude::*;

const CODE: &str = "import os\nx = eval(input())\nprint(x)\n";

#[test]
fn enumerate_grep_print_pipeline() {
    let files = Files::new().with("code.py", CODE);
    bot()
        .files(&files)
        .input(&["!enumerate [code.py] | grep eval | print python"])
        .passes()
        .stdout_has("```python\n2  x = eval(input())");
}

#[test]
fn missing_file_aborts_the_pipeline() {
    let files = Files::new();
    bot()
        .files(&files)
        .input(&["!count [nope.txt] | concat \"lines\""])
        .passes()
        .stdout_eq("Error: File `nope.txt` not found\n");
}

#[test]
fn open_missing_file_reports_like_a_reference() {
    let files = Files::new();
    bot()
        .files(&files)
        .input(&["!open nope.txt"])
        .passes()
        .stdout_eq("Error: File `nope.txt` not found\n");
}

#[test]
fn to_file_stores_under_author_name() {
    let files = Files::new();
    bot()
        .files(&files)
        .args(&["--user", "bob"])
        .input(&["!concat \"hello\" | to-file notes.txt && open bob_notes.txt"])
        .passes()
        .stdout_has("Created file **bob_notes.txt**.")
        .stdout_has("```\nhello\n```");
    assert_eq!(files.read("bob_notes.txt"), "hello");
}

#[test]
fn files_dir_from_environment() {
    let files = Files::new().with("words.txt", "b\na\nc\n");
    bot()
        .env("ACME_FILES_DIR", files.path())
        .input(&["!sort [words.txt]"])
        .passes()
        .stdout_eq("```\na\nb\nc\n```\n");
}
