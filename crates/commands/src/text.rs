// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Line-oriented text utilities: concat, print, head, tail, lines, count,
//! enumerate, sort, unique and shuffle.

use acme_core::Value;
use acme_engine::{
    ArgumentError, Args, CommandContext, CommandError, CommandSpec, ParamType, RegistryBuilder,
    RegistryError,
};
use rand::seq::SliceRandom;
use rand::Rng;

pub(crate) fn register(builder: &mut RegistryBuilder) -> Result<(), RegistryError> {
    use ParamType::{Int, Str};

    builder.register(
        CommandSpec::new(
            "concat",
            "Concatenate all arguments into one string.\n\n\
             ARGUMENTS\n    arguments... - strings to join\n\n\
             RETURN VALUE\n    The arguments joined without a separator.",
        )
        .alias("conc")
        .alias("cat")
        .rest("arguments", Str),
        concat,
    )?;
    builder.register(
        CommandSpec::new(
            "print",
            "Show a string with optional syntax highlighting.\n\n\
             ARGUMENTS\n    content     - string to show\n    \
             file_format - highlighting language (default: none)\n\n\
             RETURN VALUE\n    The content, unchanged.",
        )
        .alias("prin")
        .arg("content", Str)
        .opt("file_format", Str, ""),
        print,
    )?;
    builder.register(
        CommandSpec::new(
            "tail",
            "Keep the last lines of a string.\n\n\
             ARGUMENTS\n    data       - input string\n    \
             line_count - how many lines to keep (default: 10)\n\n\
             RETURN VALUE\n    The final line_count lines.",
        )
        .arg("data", Str)
        .opt("line_count", Int, 10i64),
        tail,
    )?;
    builder.register(
        CommandSpec::new(
            "head",
            "Keep the first lines of a string.\n\n\
             ARGUMENTS\n    data       - input string\n    \
             line_count - how many lines to keep (default: 10)\n\n\
             RETURN VALUE\n    The first line_count lines.",
        )
        .arg("data", Str)
        .opt("line_count", Int, 10i64),
        head,
    )?;
    builder.register(
        CommandSpec::new(
            "lines",
            "Keep an inclusive range of lines.\n\n\
             ARGUMENTS\n    data  - input string\n    start - first line, counting from 1\n    \
             end   - last line\n\n\
             RETURN VALUE\n    Lines start through end.",
        )
        .alias("line")
        .arg("data", Str)
        .arg("start", Int)
        .arg("end", Int),
        lines,
    )?;
    builder.register(
        CommandSpec::new(
            "count",
            "Count the lines of a string.\n\n\
             ARGUMENTS\n    data - input string\n\n\
             RETURN VALUE\n    The number of lines as an integer.",
        )
        .alias("coun")
        .alias("wc")
        .arg("data", Str),
        count,
    )?;
    builder.register(
        CommandSpec::new(
            "enumerate",
            "Number the lines of a string.\n\n\
             ARGUMENTS\n    data - input string\n\n\
             RETURN VALUE\n    Each line prefixed with its right-aligned number.",
        )
        .alias("enum")
        .alias("nl")
        .arg("data", Str),
        enumerate,
    )?;
    builder.register(
        CommandSpec::new(
            "sort",
            "Sort the lines of a string.\n\n\
             ARGUMENTS\n    data - input string\n\n\
             RETURN VALUE\n    The lines in ascending order.",
        )
        .arg("data", Str),
        sort,
    )?;
    builder.register(
        CommandSpec::new(
            "unique",
            "Collapse runs of identical adjacent lines.\n\n\
             ARGUMENTS\n    data - input string\n\n\
             RETURN VALUE\n    The lines with adjacent duplicates removed.",
        )
        .alias("uniq")
        .arg("data", Str),
        unique,
    )?;
    builder.register(
        CommandSpec::new(
            "shuffle",
            "Put the lines of a string in random order.\n\n\
             ARGUMENTS\n    data - input string\n\n\
             RETURN VALUE\n    The shuffled lines.",
        )
        .alias("shuf")
        .arg("data", Str),
        shuffle,
    )?;
    Ok(())
}

/// Show `output` in a code block when displaying and return it.
async fn block_result(ctx: &CommandContext, output: String) -> Result<Value, CommandError> {
    ctx.show_block(&output).await?;
    Ok(Value::Str(output))
}

async fn concat(ctx: CommandContext, args: Args) -> Result<Value, CommandError> {
    block_result(&ctx, args.rest_text().concat()).await
}

async fn print(ctx: CommandContext, args: Args) -> Result<Value, CommandError> {
    let content = args.str("content")?;
    if ctx.display() {
        ctx.send_block_as(content, args.str("file_format")?).await?;
    }
    Ok(Value::Str(content.to_string()))
}

async fn tail(ctx: CommandContext, args: Args) -> Result<Value, CommandError> {
    let output = tail_lines(args.str("data")?, args.positive("line_count")?);
    block_result(&ctx, output).await
}

async fn head(ctx: CommandContext, args: Args) -> Result<Value, CommandError> {
    let output = head_lines(args.str("data")?, args.positive("line_count")?);
    block_result(&ctx, output).await
}

async fn lines(ctx: CommandContext, args: Args) -> Result<Value, CommandError> {
    let start = args.positive("start")?;
    let end = args.int("end")?;
    let output = line_range(args.str("data")?, start, end)?;
    block_result(&ctx, output).await
}

async fn count(ctx: CommandContext, args: Args) -> Result<Value, CommandError> {
    let n = args.str("data")?.lines().count();
    ctx.show_block(&n.to_string()).await?;
    Ok(Value::Int(n as i64))
}

async fn enumerate(ctx: CommandContext, args: Args) -> Result<Value, CommandError> {
    block_result(&ctx, enumerate_lines(args.str("data")?)).await
}

async fn sort(ctx: CommandContext, args: Args) -> Result<Value, CommandError> {
    block_result(&ctx, sort_lines(args.str("data")?)).await
}

async fn unique(ctx: CommandContext, args: Args) -> Result<Value, CommandError> {
    block_result(&ctx, unique_lines(args.str("data")?)).await
}

async fn shuffle(ctx: CommandContext, args: Args) -> Result<Value, CommandError> {
    let output = shuffle_lines(args.str("data")?, &mut rand::rng());
    block_result(&ctx, output).await
}

pub(crate) fn tail_lines(data: &str, n: usize) -> String {
    let lines: Vec<&str> = data.lines().collect();
    lines[lines.len().saturating_sub(n)..].join("\n")
}

pub(crate) fn head_lines(data: &str, n: usize) -> String {
    data.lines().take(n).collect::<Vec<_>>().join("\n")
}

/// Lines `start..=end`, counting from 1. `end` past the input is clamped.
pub(crate) fn line_range(data: &str, start: usize, end: i64) -> Result<String, ArgumentError> {
    let end = usize::try_from(end).unwrap_or(0);
    if start > end {
        return Err(ArgumentError::range(
            "start",
            "must not be greater than `end`",
        ));
    }
    Ok(data
        .lines()
        .skip(start - 1)
        .take(end - start + 1)
        .collect::<Vec<_>>()
        .join("\n"))
}

/// `cat -n` style numbering: numbers padded to the widest, then two spaces.
pub(crate) fn enumerate_lines(data: &str) -> String {
    let lines: Vec<&str> = data.lines().collect();
    let width = lines.len().to_string().len();
    lines
        .iter()
        .enumerate()
        .map(|(i, line)| format!("{:>width$}  {line}", i + 1))
        .collect::<Vec<_>>()
        .join("\n")
}

pub(crate) fn sort_lines(data: &str) -> String {
    let mut lines: Vec<&str> = data.lines().collect();
    lines.sort_unstable();
    lines.join("\n")
}

pub(crate) fn unique_lines(data: &str) -> String {
    let mut lines: Vec<&str> = data.lines().collect();
    lines.dedup();
    lines.join("\n")
}

pub(crate) fn shuffle_lines<R: Rng + ?Sized>(data: &str, rng: &mut R) -> String {
    let mut lines: Vec<&str> = data.lines().collect();
    lines.shuffle(rng);
    lines.join("\n")
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
