//! QuickJS 运行时

use crate::error::BridgeError;
use super::host::HOST_PRELUDE;
use super::ScriptRuntime;
use log::{debug, error, info, warn};
use rquickjs::{Context, Function, Runtime, Value};

/// QuickJS 运行时参数
#[derive(Debug, Clone)]
pub struct RuntimeOptions {
    /// 内存上限（字节）
    pub memory_limit: Option<usize>,
    /// bundle 执行完后最多执行几个定时器
    pub max_timer_rounds: u32,
}

impl Default for RuntimeOptions {
    fn default() -> Self {
        Self {
            memory_limit: None,
            max_timer_rounds: 64,
        }
    }
}

/// QuickJS 运行时，每次 mount 使用一个新的 Context
pub struct QuickJsRuntime {
    runtime: Runtime,
    options: RuntimeOptions,
}

impl QuickJsRuntime {
    pub fn new() -> Result<Self, BridgeError> {
        Self::with_options(RuntimeOptions::default())
    }

    pub fn with_options(options: RuntimeOptions) -> Result<Self, BridgeError> {
        let runtime = Runtime::new().map_err(js_error)?;
        if let Some(limit) = options.memory_limit {
            runtime.set_memory_limit(limit);
        }
        Ok(Self { runtime, options })
    }

    pub fn options(&self) -> &RuntimeOptions {
        &self.options
    }

    /// 新建 Context 并注入宿主预置脚本
    fn prepare(&self) -> Result<Context, BridgeError> {
        let context = Context::full(&self.runtime).map_err(js_error)?;
        context
            .with(|ctx| -> rquickjs::Result<()> {
                let log_fn = Function::new(ctx.clone(), |level: String, message: String| {
                    forward_console(&level, &message);
                })?;
                ctx.globals().set("__native_log", log_fn)?;
                let _: Value = ctx.eval(HOST_PRELUDE)?;
                Ok(())
            })
            .map_err(js_error)?;
        Ok(context)
    }

    fn run_pending_jobs(&self) -> Result<(), BridgeError> {
        loop {
            match self.runtime.execute_pending_job() {
                Ok(true) => continue,
                Ok(false) => return Ok(()),
                Err(_) => {
                    return Err(BridgeError::Mount(
                        "pending job raised an exception".to_string(),
                    ))
                }
            }
        }
    }

    /// 冲刷微任务和定时器：每轮先跑完微任务，再执行一个到期最早的定时器
    fn settle(&self, context: &Context) -> Result<(), BridgeError> {
        for _ in 0..self.options.max_timer_rounds {
            self.run_pending_jobs()?;
            let fired: i32 = context
                .with(|ctx| ctx.eval("__run_next_timer()"))
                .map_err(js_error)?;
            if fired < 0 {
                return Err(BridgeError::Mount(read_mount_error(context)));
            }
            if fired == 0 {
                return Ok(());
            }
        }
        self.run_pending_jobs()?;
        warn!(
            "timers still queued after {} rounds, serializing current hierarchy",
            self.options.max_timer_rounds
        );
        Ok(())
    }
}

impl ScriptRuntime for QuickJsRuntime {
    fn mount(&mut self, payload: &str) -> Result<String, BridgeError> {
        if payload.trim().is_empty() {
            return Err(BridgeError::Mount("empty bundle".to_string()));
        }

        let context = self.prepare()?;

        let failure: String = context
            .with(|ctx| -> rquickjs::Result<String> {
                ctx.globals().set("__bundle_source", payload)?;
                ctx.eval("__run_bundle()")
            })
            .map_err(js_error)?;
        if !failure.is_empty() {
            return Err(BridgeError::Mount(failure));
        }

        self.settle(&context)?;

        let tree: Option<String> = context
            .with(|ctx| ctx.eval("__kivy_mount()"))
            .map_err(js_error)?;
        match tree {
            Some(json) => {
                debug!("mount produced {} bytes of widget JSON", json.len());
                Ok(json)
            }
            None => Err(BridgeError::Mount(read_mount_error(&context))),
        }
    }
}

fn read_mount_error(context: &Context) -> String {
    context
        .with(|ctx| ctx.globals().get::<_, String>("__mount_error"))
        .unwrap_or_else(|e| e.to_string())
}

fn js_error(err: rquickjs::Error) -> BridgeError {
    BridgeError::Mount(err.to_string())
}

/// console 输出转到 log
fn forward_console(level: &str, message: &str) {
    match level {
        "error" => error!(target: "mini_bridge::js", "{}", message),
        "warn" => warn!(target: "mini_bridge::js", "{}", message),
        "debug" => debug!(target: "mini_bridge::js", "{}", message),
        _ => info!(target: "mini_bridge::js", "{}", message),
    }
}
