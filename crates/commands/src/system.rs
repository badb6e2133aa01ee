// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Commands that reach outside the bot: ping and units.

use std::sync::Arc;
use std::time::Instant;

use acme_adapters::subprocess::{run_checked, UNITS_TIMEOUT};
use acme_core::Value;
use acme_engine::{
    Args, CommandContext, CommandError, CommandSpec, ParamType, RegistryBuilder, RegistryError,
};
use tokio::process::Command;

pub(crate) fn register(
    builder: &mut RegistryBuilder,
    units_program: &str,
) -> Result<(), RegistryError> {
    builder.register(
        CommandSpec::new(
            "ping",
            "Measure the round trip to the chat service.\n\n\
             RETURN VALUE\n    The latency in milliseconds.",
        ),
        ping,
    )?;

    let program: Arc<str> = Arc::from(units_program);
    builder.register(
        CommandSpec::new(
            "units",
            "Convert between units of measurement with GNU units.\n\n\
             ARGUMENTS\n    from_unit - quantity or expression to convert\n    \
             to_unit   - target unit\n\n\
             RETURN VALUE\n    The converted value.",
        )
        .alias("unit")
        .arg("from_unit", ParamType::Str)
        .arg("to_unit", ParamType::Str),
        move |ctx: CommandContext, args: Args| {
            let program = Arc::clone(&program);
            async move { units(ctx, args, &program).await }
        },
    )?;
    Ok(())
}

async fn ping(ctx: CommandContext, _args: Args) -> Result<Value, CommandError> {
    let start = Instant::now();
    ctx.send("\u{1F3D3}").await?;
    let millis = start.elapsed().as_millis() as i64;
    ctx.show(&format!("\u{1F4A8} Meep meep! **{millis} ms**."))
        .await?;
    Ok(Value::Int(millis))
}

async fn units(ctx: CommandContext, args: Args, program: &str) -> Result<Value, CommandError> {
    let from = args.str("from_unit")?;
    let to = args.str("to_unit")?;

    let mut cmd = Command::new(program);
    cmd.args(["--terse", "--", from, to]);
    let output = run_checked(cmd, UNITS_TIMEOUT, "units")
        .await
        .map_err(CommandError::Failed)?;
    let output = output.trim().to_string();

    ctx.show(&format!("\u{1F9EE} {from} = {output} {to}."))
        .await?;
    Ok(Value::Str(output))
}

#[cfg(test)]
#[path = "system_tests.rs"]
mod tests;
