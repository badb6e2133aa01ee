// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Reading and writing channel files.

use acme_adapters::ChatFile;
use acme_core::Value;
use acme_engine::{
    Args, CommandContext, CommandError, CommandSpec, ParamType, RegistryBuilder, RegistryError,
};

pub(crate) fn register(builder: &mut RegistryBuilder) -> Result<(), RegistryError> {
    builder.register(
        CommandSpec::new(
            "to-file",
            "Save a string as a file in this channel.\n\n\
             The file name is prefixed with your user name.\n\n\
             ARGUMENTS\n    content   - string to save\n    file_name - name of the new file\n\n\
             RETURN VALUE\n    The content, unchanged.",
        )
        .alias("tfil")
        .alias("tee")
        .arg("content", ParamType::Str)
        .arg("file_name", ParamType::Str),
        to_file,
    )?;
    builder.register(
        CommandSpec::new(
            "open",
            "Read the most recent channel file with the given name.\n\n\
             ARGUMENTS\n    file_name - name of the file\n\n\
             RETURN VALUE\n    The file contents.",
        )
        .arg("file_name", ParamType::Str),
        open,
    )?;
    Ok(())
}

async fn to_file(ctx: CommandContext, args: Args) -> Result<Value, CommandError> {
    let content = args.str("content")?;
    let name = format!("{}_{}", ctx.author(), args.str("file_name")?);
    tracing::info!(file = %name, bytes = content.len(), "saving file");
    ctx.upload(ChatFile::new(name.as_str(), content)).await?;
    ctx.send(&format!("\u{1F4BE} Created file **{name}**.")).await?;
    Ok(Value::Str(content.to_string()))
}

async fn open(ctx: CommandContext, args: Args) -> Result<Value, CommandError> {
    let name = args.str("file_name")?;
    let Some(file) = ctx.find_file(name).await? else {
        return Err(CommandError::FileNotFound(name.to_string()));
    };
    let content = file.text();
    ctx.show_block(&content).await?;
    Ok(Value::Str(content))
}

#[cfg(test)]
#[path = "files_tests.rs"]
mod tests;
