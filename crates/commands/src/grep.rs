// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! grep: select lines matching one or more patterns.

use acme_core::Value;
use acme_engine::{
    Args, CommandContext, CommandError, CommandSpec, ParamType, RegistryBuilder, RegistryError,
};
use regex::{Regex, RegexBuilder};

pub(crate) fn register(builder: &mut RegistryBuilder) -> Result<(), RegistryError> {
    builder.register(
        CommandSpec::new(
            "grep",
            "Select the lines of a string that match patterns.\n\n\
             ARGUMENTS\n    data     - input string\n    \
             patterns - one regular expression per line\n    \
             opts...  - options, combinable as in `-iv`:\n        \
             -A<n>  also show n lines after each match\n        \
             -B<n>  also show n lines before each match\n        \
             -C<n>  also show n lines around each match\n        \
             -E     extended regular expressions (default)\n        \
             -F     fixed strings\n        \
             -G     basic regular expressions\n        \
             -i     ignore case\n        \
             -o     show only the matching parts\n        \
             -v     select non-matching lines\n        \
             -w     match whole words only\n        \
             -x     match whole lines only\n\n\
             RETURN VALUE\n    The selected lines, or nothing when no line matches.",
        )
        .arg("data", ParamType::Str)
        .arg("patterns", ParamType::Str)
        .rest("opts", ParamType::Str),
        grep_command,
    )?;
    Ok(())
}

async fn grep_command(ctx: CommandContext, args: Args) -> Result<Value, CommandError> {
    let options = GrepOptions::parse(&args.rest_text())?;
    let output = grep(args.str("data")?, args.str("patterns")?, &options)?;
    ctx.show_block(&output).await?;
    Ok(Value::Str(output))
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum Syntax {
    #[default]
    Extended,
    Fixed,
    Basic,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct GrepOptions {
    pub ignore_case: bool,
    pub only_matching: bool,
    pub invert: bool,
    pub word: bool,
    pub line: bool,
    pub syntax: Syntax,
    pub before: usize,
    pub after: usize,
}

impl GrepOptions {
    /// Parse option words such as `-i`, `-vx` or `-A3`.
    ///
    /// A bare number (`-2`) sets context on both sides.
    pub fn parse(opts: &[String]) -> Result<Self, CommandError> {
        let mut options = Self::default();
        for opt in opts {
            let Some(body) = opt.strip_prefix('-').filter(|b| !b.is_empty()) else {
                return Err(not_allowed(opt));
            };
            let mut chars = body.chars().peekable();
            while let Some(c) = chars.next() {
                match c {
                    'i' => options.ignore_case = true,
                    'o' => options.only_matching = true,
                    'v' => options.invert = true,
                    'w' => options.word = true,
                    'x' => options.line = true,
                    'E' => options.syntax = Syntax::Extended,
                    'F' => options.syntax = Syntax::Fixed,
                    'G' => options.syntax = Syntax::Basic,
                    'A' | 'B' | 'C' | '0'..='9' => {
                        let mut digits = String::new();
                        if c.is_ascii_digit() {
                            digits.push(c);
                        }
                        while let Some(d) = chars.next_if(char::is_ascii_digit) {
                            digits.push(d);
                        }
                        let n: usize = digits.parse().map_err(|_| {
                            CommandError::failed(format!("Option `-{c}` requires a number."))
                        })?;
                        match c {
                            'A' => options.after = n,
                            'B' => options.before = n,
                            _ => {
                                options.before = n;
                                options.after = n;
                            }
                        }
                    }
                    _ => return Err(not_allowed(opt)),
                }
            }
        }
        Ok(options)
    }

    fn build_regex(&self, patterns: &str) -> Result<Regex, CommandError> {
        let alternatives: Vec<String> = patterns
            .lines()
            .filter(|p| !p.is_empty())
            .map(|p| match self.syntax {
                Syntax::Fixed => regex::escape(p),
                Syntax::Extended | Syntax::Basic => p.to_string(),
            })
            .map(|p| format!("(?:{p})"))
            .collect();
        let mut pattern = alternatives.join("|");
        if self.line {
            pattern = format!("^(?:{pattern})$");
        } else if self.word {
            pattern = format!(r"\b(?:{pattern})\b");
        }
        RegexBuilder::new(&pattern)
            .case_insensitive(self.ignore_case)
            .build()
            .map_err(|e| CommandError::failed(format!("Invalid pattern: {e}")))
    }
}

fn not_allowed(opt: &str) -> CommandError {
    CommandError::failed(format!("Argument `{opt}` is not allowed."))
}

/// Run grep over `data`. Every output line ends with a newline.
pub(crate) fn grep(data: &str, patterns: &str, options: &GrepOptions) -> Result<String, CommandError> {
    let regex = options.build_regex(patterns)?;
    let lines: Vec<&str> = data.lines().collect();
    let mut output = String::new();

    if options.only_matching {
        if !options.invert {
            for line in &lines {
                for m in regex.find_iter(line).filter(|m| !m.as_str().is_empty()) {
                    output.push_str(m.as_str());
                    output.push('\n');
                }
            }
        }
        return Ok(output);
    }

    let has_context = options.before > 0 || options.after > 0;
    let mut last_printed: Option<usize> = None;
    let mut after_left = 0;
    for (i, line) in lines.iter().enumerate() {
        if regex.is_match(line) != options.invert {
            let floor = last_printed.map_or(0, |l| l + 1);
            let from = i.saturating_sub(options.before).max(floor);
            if has_context && last_printed.is_some_and(|l| from > l + 1) {
                output.push_str("--\n");
            }
            for context in &lines[from..i] {
                output.push_str(context);
                output.push('\n');
            }
            output.push_str(line);
            output.push('\n');
            last_printed = Some(i);
            after_left = options.after;
        } else if after_left > 0 {
            output.push_str(line);
            output.push('\n');
            last_printed = Some(i);
            after_left -= 1;
        }
    }
    Ok(output)
}

#[cfg(test)]
#[path = "grep_tests.rs"]
mod tests;
