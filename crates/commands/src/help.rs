// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! help: command listing and per-command usage.

use acme_core::Value;
use acme_engine::{
    Args, CommandContext, CommandError, CommandRegistry, CommandSpec, ParamType, RegistryBuilder,
    RegistryError,
};

pub(crate) fn register(builder: &mut RegistryBuilder) -> Result<(), RegistryError> {
    builder.register(
        CommandSpec::new(
            "help",
            "Show the available commands, or details about one of them.\n\n\
             ARGUMENTS\n    command - command name or alias (default: list everything)\n\n\
             RETURN VALUE\n    The help text.",
        )
        .opt("command", ParamType::Str, ""),
        help,
    )?;
    Ok(())
}

async fn help(ctx: CommandContext, args: Args) -> Result<Value, CommandError> {
    let name = args.str("command")?;
    let text = if name.is_empty() {
        overview(ctx.registry(), ctx.prefix())
    } else {
        let spec = ctx
            .registry()
            .resolve(name)
            .map(|c| &c.spec)
            .ok_or_else(|| CommandError::failed(format!("No command called `{name}` found.")))?;
        details(spec, ctx.prefix())
    };
    ctx.show_block(&text).await?;
    Ok(Value::Str(text))
}

/// One line per command: name padded to a column, then its summary.
pub(crate) fn overview(registry: &CommandRegistry, prefix: &str) -> String {
    let width = registry
        .list_all()
        .map(|s| s.name.len())
        .max()
        .unwrap_or(0);
    let mut out = String::from("Commands:\n");
    for spec in registry.list_all() {
        out.push_str(&format!("  {:<width$}  {}\n", spec.name, spec.summary()));
    }
    out.push_str(&format!(
        "\nType {prefix}help <command> for more information on a command."
    ));
    out
}

pub(crate) fn details(spec: &CommandSpec, prefix: &str) -> String {
    let mut out = spec.usage(prefix);
    if !spec.aliases.is_empty() {
        out.push_str(&format!("\nAliases: {}", spec.aliases.join(", ")));
    }
    if !spec.description.is_empty() {
        out.push_str("\n\n");
        out.push_str(&spec.description);
    }
    out
}

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
