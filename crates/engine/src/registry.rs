// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Command registry: names, aliases, signatures and handlers.
//!
//! The registry is assembled once with [`RegistryBuilder`] and frozen into a
//! [`CommandRegistry`]. Lookups after that are read-only and need no locking.

use std::collections::{HashMap, HashSet};
use std::future::Future;
use std::sync::Arc;

use acme_core::Value;
use acme_shell::parse_bool_word;
use async_trait::async_trait;
use indexmap::IndexMap;

use crate::args::Args;
use crate::context::CommandContext;
use crate::error::{CommandError, RegistryError};

/// Declared type of a command parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamType {
    Str,
    Int,
    Bool,
    /// Any value other than unit, passed through unchanged.
    Any,
}

impl ParamType {
    /// Name used in argument errors and help text.
    pub fn name(self) -> &'static str {
        match self {
            ParamType::Str => "string",
            ParamType::Int => "integer",
            ParamType::Bool => "boolean",
            ParamType::Any => "value",
        }
    }

    /// Convert `value` to this type.
    ///
    /// Returns the original value on failure so the caller can describe it.
    /// Unit never converts.
    pub fn coerce(self, value: Value) -> Result<Value, Value> {
        match (self, value) {
            (_, Value::Unit) => Err(Value::Unit),
            (ParamType::Any, v) => Ok(v),
            (ParamType::Str, Value::Str(s)) => Ok(Value::Str(s)),
            (ParamType::Str, v) => Ok(Value::Str(v.to_string())),
            (ParamType::Int, Value::Int(i)) => Ok(Value::Int(i)),
            (ParamType::Int, Value::Str(s)) => match s.trim().parse::<i64>() {
                Ok(i) => Ok(Value::Int(i)),
                Err(_) => Err(Value::Str(s)),
            },
            (ParamType::Bool, Value::Bool(b)) => Ok(Value::Bool(b)),
            (ParamType::Bool, Value::Str(s)) => match parse_bool_word(s.trim()) {
                Some(b) => Ok(Value::Bool(b)),
                None => Err(Value::Str(s)),
            },
            (_, v) => Err(v),
        }
    }
}

/// A named, typed parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    pub name: String,
    pub ty: ParamType,
    /// Value used when the argument is omitted. `None` means required.
    pub default: Option<Value>,
}

impl Param {
    pub fn required(name: impl Into<String>, ty: ParamType) -> Self {
        Self {
            name: name.into(),
            ty,
            default: None,
        }
    }

    pub fn optional(name: impl Into<String>, ty: ParamType, default: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            ty,
            default: Some(default.into()),
        }
    }

    pub fn is_required(&self) -> bool {
        self.default.is_none()
    }
}

/// Ordered parameters plus an optional trailing variadic parameter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Signature {
    pub params: Vec<Param>,
    pub rest: Option<Param>,
}

impl Signature {
    /// Number of arguments the signature needs at minimum.
    pub fn min_args(&self) -> usize {
        self.params.iter().filter(|p| p.is_required()).count()
    }

    /// Maximum number of arguments, or `None` when variadic.
    pub fn max_args(&self) -> Option<usize> {
        match self.rest {
            Some(_) => None,
            None => Some(self.params.len()),
        }
    }

    /// Render as `<param> [optional=default] [rest...]`.
    pub fn render(&self) -> String {
        let params = self.params.iter().map(|param| match &param.default {
            None => format!("<{}>", param.name),
            Some(default) => format!("[{}={}]", param.name, render_default(default)),
        });
        let rest = self.rest.iter().map(|rest| format!("[{}...]", rest.name));
        params.chain(rest).collect::<Vec<_>>().join(" ")
    }

    fn validate(&self, command: &str) -> Result<(), RegistryError> {
        let mut seen_optional = false;
        for param in &self.params {
            if param.is_required() && seen_optional {
                return Err(RegistryError::InvalidSignature {
                    command: command.to_string(),
                    reason: format!("required parameter `{}` follows an optional one", param.name),
                });
            }
            seen_optional |= !param.is_required();
            if let Some(default) = &param.default {
                if param.ty.coerce(default.clone()).is_err() {
                    return Err(RegistryError::InvalidSignature {
                        command: command.to_string(),
                        reason: format!(
                            "default for `{}` is not a {}",
                            param.name,
                            param.ty.name()
                        ),
                    });
                }
            }
        }
        Ok(())
    }
}

fn render_default(value: &Value) -> String {
    match value {
        Value::Str(s) if s.is_empty() => "\"\"".to_string(),
        other => other.to_string(),
    }
}

/// Name, aliases, description and signature of a command.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandSpec {
    pub name: String,
    pub aliases: Vec<String>,
    pub description: String,
    pub signature: Signature,
}

impl CommandSpec {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            aliases: Vec::new(),
            description: description.into(),
            signature: Signature::default(),
        }
    }

    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    pub fn param(mut self, param: Param) -> Self {
        self.signature.params.push(param);
        self
    }

    /// Shorthand for a required parameter.
    pub fn arg(self, name: impl Into<String>, ty: ParamType) -> Self {
        self.param(Param::required(name, ty))
    }

    /// Shorthand for an optional parameter.
    pub fn opt(self, name: impl Into<String>, ty: ParamType, default: impl Into<Value>) -> Self {
        self.param(Param::optional(name, ty, default))
    }

    /// Trailing variadic parameter.
    pub fn rest(mut self, name: impl Into<String>, ty: ParamType) -> Self {
        self.signature.rest = Some(Param::required(name, ty));
        self
    }

    /// Usage line, e.g. `!tail <data> [line_count=10]`.
    pub fn usage(&self, prefix: &str) -> String {
        let sig = self.signature.render();
        if sig.is_empty() {
            format!("{prefix}{}", self.name)
        } else {
            format!("{prefix}{} {sig}", self.name)
        }
    }

    /// First line of the description.
    pub fn summary(&self) -> &str {
        self.description.lines().next().unwrap_or_default()
    }
}

/// Async command implementation.
///
/// Closures `Fn(CommandContext, Args) -> impl Future<Output = Result<Value,
/// CommandError>>` implement this trait.
#[async_trait]
pub trait CommandHandler: Send + Sync + 'static {
    async fn call(&self, ctx: CommandContext, args: Args) -> Result<Value, CommandError>;
}

#[async_trait]
impl<F, Fut> CommandHandler for F
where
    F: Fn(CommandContext, Args) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<Value, CommandError>> + Send + 'static,
{
    async fn call(&self, ctx: CommandContext, args: Args) -> Result<Value, CommandError> {
        (self)(ctx, args).await
    }
}

/// A registered command.
pub struct RegisteredCommand {
    pub spec: CommandSpec,
    pub handler: Arc<dyn CommandHandler>,
}

impl std::fmt::Debug for RegisteredCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisteredCommand")
            .field("spec", &self.spec)
            .finish_non_exhaustive()
    }
}

/// Collects commands before the registry is frozen.
#[derive(Default)]
pub struct RegistryBuilder {
    commands: IndexMap<String, Arc<RegisteredCommand>>,
    aliases: HashMap<String, String>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a command under its name and aliases.
    ///
    /// Fails if the name or any alias is already taken.
    pub fn register(
        &mut self,
        spec: CommandSpec,
        handler: impl CommandHandler,
    ) -> Result<&mut Self, RegistryError> {
        spec.signature.validate(&spec.name)?;
        let mut seen = HashSet::new();
        for name in std::iter::once(&spec.name).chain(&spec.aliases) {
            if !acme_shell::is_command_name(name) {
                return Err(RegistryError::InvalidName(name.clone()));
            }
            if self.is_taken(name) || !seen.insert(name.as_str()) {
                return Err(RegistryError::Duplicate(name.clone()));
            }
        }

        for alias in &spec.aliases {
            self.aliases.insert(alias.clone(), spec.name.clone());
        }
        self.commands.insert(
            spec.name.clone(),
            Arc::new(RegisteredCommand {
                spec,
                handler: Arc::new(handler),
            }),
        );
        Ok(self)
    }

    fn is_taken(&self, name: &str) -> bool {
        self.commands.contains_key(name) || self.aliases.contains_key(name)
    }

    pub fn build(self) -> CommandRegistry {
        CommandRegistry {
            commands: self.commands,
            aliases: self.aliases,
        }
    }
}

/// Frozen name and alias table.
#[derive(Debug, Default)]
pub struct CommandRegistry {
    commands: IndexMap<String, Arc<RegisteredCommand>>,
    aliases: HashMap<String, String>,
}

impl CommandRegistry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Look up a command by name or alias.
    pub fn resolve(&self, name: &str) -> Option<&Arc<RegisteredCommand>> {
        self.commands.get(name).or_else(|| {
            self.aliases
                .get(name)
                .and_then(|canonical| self.commands.get(canonical))
        })
    }

    /// All commands in registration order.
    pub fn list_all(&self) -> impl Iterator<Item = &CommandSpec> {
        self.commands.values().map(|c| &c.spec)
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
