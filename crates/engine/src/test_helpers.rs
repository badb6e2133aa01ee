// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for the engine crate.

use std::sync::Arc;
use std::time::Duration;

use acme_adapters::FakeChat;
use acme_core::{ChannelId, SequentialIdGen, Value};
use parking_lot::Mutex;

use crate::{
    Args, CommandContext, CommandError, CommandRegistry, CommandSpec, EvalConfig, EvalError,
    Evaluator, Origin, ParamType,
};

/// Evaluator wired to a fake chat and a small set of probe commands.
pub(crate) struct TestEngine {
    pub evaluator: Evaluator,
    pub chat: FakeChat,
    /// Names of the commands that ran, in order.
    pub log: Arc<Mutex<Vec<String>>>,
}

pub(crate) fn origin() -> Origin {
    Origin::new("guild-1", "chan-1", "user-1")
}

pub(crate) fn channel() -> ChannelId {
    ChannelId::new("chan-1")
}

impl TestEngine {
    pub fn new() -> Self {
        Self::with_config(EvalConfig::default())
    }

    pub fn with_config(config: EvalConfig) -> Self {
        let log = Arc::new(Mutex::new(Vec::new()));
        let chat = FakeChat::new();
        let registry = probe_registry(&log);
        let evaluator = Evaluator::new(registry, Arc::new(chat.clone()), config)
            .with_id_gen(SequentialIdGen::new("inv"));
        Self {
            evaluator,
            chat,
            log,
        }
    }

    pub async fn eval(&self, input: &str) -> Result<Value, EvalError> {
        let ctx = self.evaluator.context(origin());
        self.evaluator.evaluate(input, &ctx).await
    }

    pub fn ran(&self) -> Vec<String> {
        self.log.lock().clone()
    }
}

fn record(log: &Arc<Mutex<Vec<String>>>, name: &str) {
    log.lock().push(name.to_string());
}

pub(crate) fn probe_registry(log: &Arc<Mutex<Vec<String>>>) -> CommandRegistry {
    let mut builder = CommandRegistry::builder();

    let l = Arc::clone(log);
    builder
        .register(
            CommandSpec::new("concat", "Concatenate arguments.")
                .alias("cat")
                .rest("arguments", ParamType::Str),
            move |ctx: CommandContext, args: Args| {
                let l = Arc::clone(&l);
                async move {
                    record(&l, "concat");
                    let text: String = args.rest_text().concat();
                    ctx.show_block(&text).await?;
                    Ok::<_, CommandError>(Value::Str(text))
                }
            },
        )
        .unwrap();

    let l = Arc::clone(log);
    builder
        .register(
            CommandSpec::new("add", "Add two integers.")
                .arg("a", ParamType::Int)
                .opt("b", ParamType::Int, 1i64),
            move |_ctx: CommandContext, args: Args| {
                let l = Arc::clone(&l);
                async move {
                    record(&l, "add");
                    Ok::<_, CommandError>(Value::Int(args.int("a")? + args.int("b")?))
                }
            },
        )
        .unwrap();

    let l = Arc::clone(log);
    builder
        .register(
            CommandSpec::new("not", "Negate a boolean.").arg("value", ParamType::Bool),
            move |_ctx: CommandContext, args: Args| {
                let l = Arc::clone(&l);
                async move {
                    record(&l, "not");
                    Ok::<_, CommandError>(Value::Bool(!args.bool("value")?))
                }
            },
        )
        .unwrap();

    let l = Arc::clone(log);
    builder
        .register(
            CommandSpec::new("nothing", "Return nothing."),
            move |_ctx: CommandContext, _args: Args| {
                let l = Arc::clone(&l);
                async move {
                    record(&l, "nothing");
                    Ok::<_, CommandError>(Value::Unit)
                }
            },
        )
        .unwrap();

    let l = Arc::clone(log);
    builder
        .register(
            CommandSpec::new("fail", "Always fail.").opt("message", ParamType::Str, "boom"),
            move |_ctx: CommandContext, args: Args| {
                let l = Arc::clone(&l);
                async move {
                    record(&l, "fail");
                    Err::<Value, _>(CommandError::failed(args.str("message")?))
                }
            },
        )
        .unwrap();

    let l = Arc::clone(log);
    builder
        .register(
            CommandSpec::new("take", "Positive count.").arg("count", ParamType::Int),
            move |_ctx: CommandContext, args: Args| {
                let l = Arc::clone(&l);
                async move {
                    record(&l, "take");
                    Ok::<_, CommandError>(Value::Int(args.positive("count")? as i64))
                }
            },
        )
        .unwrap();

    let l = Arc::clone(log);
    builder
        .register(
            CommandSpec::new("slow", "Sleep, then return.").opt("millis", ParamType::Int, 50i64),
            move |_ctx: CommandContext, args: Args| {
                let l = Arc::clone(&l);
                async move {
                    record(&l, "slow");
                    let millis = args.positive("millis")? as u64;
                    tokio::time::sleep(Duration::from_millis(millis)).await;
                    Ok::<_, CommandError>(Value::Str("done".to_string()))
                }
            },
        )
        .unwrap();

    let l = Arc::clone(log);
    builder
        .register(
            CommandSpec::new("abort", "Cancel the current invocation."),
            move |ctx: CommandContext, _args: Args| {
                let l = Arc::clone(&l);
                async move {
                    record(&l, "abort");
                    ctx.cancel_signal().cancel();
                    Ok::<_, CommandError>(Value::Unit)
                }
            },
        )
        .unwrap();

    builder.build()
}
