// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Expression evaluator
//!
//! Walks a parsed [`ExprSeq`] strictly left to right. Compositions run in
//! order and the first failure aborts the rest of the sequence; effects of
//! compositions that already completed are kept. Inside a composition the
//! value of each stage becomes the first argument of the next command.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::{Duration, Instant};

use acme_adapters::ChatAdapter;
use acme_core::{IdGen, InvocationId, UuidIdGen, Value};
use acme_shell::{
    Argument, AstVisitor, Command, Expr, ExprComp, ExprSeq, ExprSubst, FileContent, Parser, Span,
};
use tracing::Instrument;

use crate::args::Args;
use crate::context::{CommandContext, Origin};
use crate::error::{CommandError, EvalError};
use crate::registry::CommandRegistry;

type EvalFuture<'a> = Pin<Box<dyn Future<Output = Result<Value, EvalError>> + Send + 'a>>;

/// Default limit on nested `( ... )` substitutions.
pub const DEFAULT_MAX_NESTING_DEPTH: usize = 16;

/// Evaluation policy.
#[derive(Debug, Clone)]
pub struct EvalConfig {
    /// Prefix shown in usage lines and help text.
    pub prefix: String,
    pub max_nesting_depth: usize,
    /// Per-command limit; `None` lets handlers run to completion.
    pub command_timeout: Option<Duration>,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            prefix: "!".to_string(),
            max_nesting_depth: DEFAULT_MAX_NESTING_DEPTH,
            command_timeout: None,
        }
    }
}

/// Evaluates messages against a frozen command registry.
pub struct Evaluator {
    registry: Arc<CommandRegistry>,
    chat: Arc<dyn ChatAdapter>,
    config: EvalConfig,
    ids: Arc<dyn IdGen>,
}

impl Evaluator {
    pub fn new(registry: CommandRegistry, chat: Arc<dyn ChatAdapter>, config: EvalConfig) -> Self {
        Self {
            registry: Arc::new(registry),
            chat,
            config,
            ids: Arc::new(UuidIdGen),
        }
    }

    pub fn with_id_gen(mut self, ids: impl IdGen + 'static) -> Self {
        self.ids = Arc::new(ids);
        self
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    pub fn config(&self) -> &EvalConfig {
        &self.config
    }

    /// Fresh context for a message from `origin`.
    pub fn context(&self, origin: Origin) -> CommandContext {
        CommandContext::new(
            InvocationId::new(self.ids.next()),
            origin,
            Arc::clone(&self.chat),
            Arc::clone(&self.registry),
            self.config.prefix.clone(),
        )
    }

    /// Evaluate one message and report any failure back to its channel.
    ///
    /// `input` is the message text with the prefix already removed.
    pub async fn handle(&self, origin: Origin, input: &str) -> Result<Value, EvalError> {
        let ctx = self.context(origin);
        let span = tracing::info_span!(
            "invocation",
            id = %ctx.id(),
            guild = %ctx.guild(),
            channel = %ctx.channel(),
            author = %ctx.author(),
        );
        async {
            let start = Instant::now();
            let result = self.evaluate(input, &ctx).await;
            let elapsed_ms = start.elapsed().as_millis() as u64;
            match &result {
                Ok(value) => tracing::info!(elapsed_ms, result = value.type_name(), "evaluated"),
                Err(e) => {
                    tracing::warn!(elapsed_ms, kind = e.kind(), error = %e, "evaluation failed");
                    let report = e.report(input, &self.registry, &self.config.prefix);
                    if let Err(send_err) = ctx.send(&report).await {
                        tracing::error!(error = %send_err, "failed to report error");
                    }
                }
            }
            result
        }
        .instrument(span)
        .await
    }

    /// Parse and evaluate `input`.
    ///
    /// Parse errors and nesting violations are detected before any command
    /// runs.
    pub async fn evaluate(&self, input: &str, ctx: &CommandContext) -> Result<Value, EvalError> {
        let ast = Parser::parse(input)?;
        self.evaluate_ast(&ast, ctx).await
    }

    /// Evaluate an already parsed sequence.
    pub async fn evaluate_ast(
        &self,
        ast: &ExprSeq,
        ctx: &CommandContext,
    ) -> Result<Value, EvalError> {
        let limit = self.config.max_nesting_depth;
        if let Some(span) = first_substitution_deeper_than(ast, limit) {
            return Err(EvalError::NestingLimitExceeded { limit, span });
        }
        self.eval_seq(ast, ctx).await
    }

    fn eval_seq<'a>(&'a self, seq: &'a ExprSeq, ctx: &'a CommandContext) -> EvalFuture<'a> {
        Box::pin(async move {
            let mut values = Vec::with_capacity(seq.comps.len());
            for comp in &seq.comps {
                let value = self.eval_comp(comp, ctx).await?;
                if !value.is_unit() {
                    values.push(value);
                }
            }
            Ok(join_values(values))
        })
    }

    async fn eval_comp(&self, comp: &ExprComp, ctx: &CommandContext) -> Result<Value, EvalError> {
        // Name resolution covers the whole composition before any stage runs.
        if let Some(unknown) = first_unknown_command(comp, &self.registry) {
            return Err(EvalError::UnknownCommand {
                name: unknown.name.clone(),
                span: unknown.name_span,
            });
        }

        let last = comp.stages.len();
        let head_ctx = ctx.with_display(ctx.display() && last == 0);
        let mut value = self.eval_head(&comp.head, &head_ctx).await?;

        for (i, stage) in comp.stages.iter().enumerate() {
            let stage_ctx = ctx.with_display(ctx.display() && i + 1 == last);
            value = self.dispatch(stage, Some(value), &stage_ctx).await?;
        }
        Ok(value)
    }

    async fn eval_head(&self, expr: &Expr, ctx: &CommandContext) -> Result<Value, EvalError> {
        match expr {
            Expr::Command(cmd) => self.dispatch(cmd, None, ctx).await,
            Expr::Subst(subst) => self.eval_seq(&subst.body, ctx).await,
            Expr::Str(lit) => {
                show_literal(ctx, &lit.value, lit.span).await?;
                Ok(Value::Str(lit.value.clone()))
            }
            Expr::FileContent(file) => {
                let content = self.read_file(file, ctx).await?;
                show_literal(ctx, &content, file.span).await?;
                Ok(Value::Str(content))
            }
        }
    }

    async fn eval_argument(&self, arg: &Argument, ctx: &CommandContext) -> Result<Value, EvalError> {
        match arg {
            Argument::Int(i) => Ok(Value::Int(i.value)),
            Argument::Bool(b) => Ok(Value::Bool(b.value)),
            Argument::Str(s) => Ok(Value::Str(s.value.clone())),
            Argument::FileContent(file) => self.read_file(file, ctx).await.map(Value::Str),
            Argument::Subst(subst) => self.eval_seq(&subst.body, ctx).await,
        }
    }

    async fn read_file(&self, file: &FileContent, ctx: &CommandContext) -> Result<String, EvalError> {
        let found = ctx
            .find_file(&file.file_name)
            .await
            .map_err(|source| EvalError::Handler {
                command: format!("[{}]", file.file_name),
                source,
                span: file.span,
            })?;
        match found {
            Some(f) => Ok(f.text()),
            None => Err(EvalError::FileNotFound {
                name: file.file_name.clone(),
                span: file.span,
            }),
        }
    }

    /// Resolve, bind and run one command.
    ///
    /// `piped` is the value of the previous pipeline stage; a unit value is
    /// not passed on.
    async fn dispatch(
        &self,
        cmd: &Command,
        piped: Option<Value>,
        ctx: &CommandContext,
    ) -> Result<Value, EvalError> {
        let Some(entry) = self.registry.resolve(&cmd.name) else {
            return Err(EvalError::UnknownCommand {
                name: cmd.name.clone(),
                span: cmd.name_span,
            });
        };
        let name = entry.spec.name.as_str();

        let arg_ctx = ctx.with_display(false);
        let mut values = Vec::with_capacity(cmd.args.len() + 1);
        values.extend(piped.filter(|v| !v.is_unit()));
        for arg in &cmd.args {
            values.push(self.eval_argument(arg, &arg_ctx).await?);
        }

        let args = Args::bind(&entry.spec.signature, values).map_err(|source| {
            EvalError::Argument {
                command: name.to_string(),
                source,
                span: cmd.span,
            }
        })?;

        if ctx.cancel_signal().is_cancelled() {
            return Err(EvalError::Cancelled);
        }

        let span = tracing::info_span!("command", command = name);
        async {
            tracing::info!(display = ctx.display(), "executing");
            let start = Instant::now();
            let call = entry.handler.call(ctx.clone(), args);
            let result = match self.config.command_timeout {
                Some(limit) => match tokio::time::timeout(limit, call).await {
                    Ok(result) => result,
                    Err(_) => Err(CommandError::Timeout(limit)),
                },
                None => call.await,
            };
            let elapsed_ms = start.elapsed().as_millis() as u64;
            match &result {
                Ok(value) => tracing::info!(elapsed_ms, result = value.type_name(), "completed"),
                Err(e) => tracing::error!(elapsed_ms, error = %e, "failed"),
            }
            result.map_err(|source| match source {
                CommandError::FileNotFound(file) => EvalError::FileNotFound {
                    name: file,
                    span: cmd.span,
                },
                source => EvalError::Handler {
                    command: name.to_string(),
                    source,
                    span: cmd.span,
                },
            })
        }
        .instrument(span)
        .await
    }
}

async fn show_literal(ctx: &CommandContext, text: &str, span: Span) -> Result<(), EvalError> {
    ctx.show_block(text)
        .await
        .map_err(|source| EvalError::Handler {
            command: "display".to_string(),
            source,
            span,
        })
}

/// A single value passes through unchanged; several are concatenated as text.
fn join_values(mut values: Vec<Value>) -> Value {
    match values.len() {
        0 => Value::Unit,
        1 => values.pop().unwrap_or_default(),
        _ => Value::Str(values.into_iter().map(Value::into_text).collect()),
    }
}

fn first_unknown_command<'a>(comp: &'a ExprComp, registry: &CommandRegistry) -> Option<&'a Command> {
    let unknown = |cmd: &Command| registry.resolve(&cmd.name).is_none();
    let mut pending: Vec<&'a ExprComp> = vec![comp];
    while let Some(comp) = pending.pop() {
        let head_args: &[Argument] = match &comp.head {
            Expr::Command(cmd) if unknown(cmd) => return Some(cmd),
            Expr::Command(cmd) => &cmd.args,
            Expr::Subst(subst) => {
                pending.extend(subst.body.comps.iter().rev());
                &[]
            }
            Expr::Str(_) | Expr::FileContent(_) => &[],
        };
        if let Some(stage) = comp.stages.iter().find(|s| unknown(s)) {
            return Some(stage);
        }
        for arg in head_args.iter().chain(comp.stages.iter().flat_map(|s| &s.args)) {
            if let Argument::Subst(subst) = arg {
                pending.extend(subst.body.comps.iter().rev());
            }
        }
    }
    None
}

fn first_substitution_deeper_than(ast: &ExprSeq, limit: usize) -> Option<Span> {
    struct Finder {
        limit: usize,
        depth: usize,
        found: Option<Span>,
    }
    impl AstVisitor for Finder {
        fn visit_subst(&mut self, subst: &ExprSubst) {
            if self.found.is_some() {
                return;
            }
            self.depth += 1;
            if self.depth > self.limit {
                self.found = Some(subst.span);
            } else {
                self.walk_subst(subst);
            }
            self.depth -= 1;
        }
    }
    let mut finder = Finder {
        limit,
        depth: 0,
        found: None,
    };
    finder.visit_expr_seq(ast);
    finder.found
}

#[cfg(test)]
#[path = "evaluator_tests/mod.rs"]
mod tests;
