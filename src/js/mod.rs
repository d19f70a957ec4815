//! 脚本运行时
//!
//! 桥接层只依赖 [`ScriptRuntime::mount`]：给一段 bundle，返回控件树 JSON。

mod host;
mod runtime;

pub use runtime::{QuickJsRuntime, RuntimeOptions};

use crate::error::BridgeError;

/// 脚本运行时
pub trait ScriptRuntime {
    /// 执行 bundle，返回控件树 JSON 文本
    fn mount(&mut self, payload: &str) -> Result<String, BridgeError>;
}

impl<T: ScriptRuntime + ?Sized> ScriptRuntime for Box<T> {
    fn mount(&mut self, payload: &str) -> Result<String, BridgeError> {
        (**self).mount(payload)
    }
}

/// 直通运行时：payload 本身就是控件树 JSON
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonRuntime;

impl ScriptRuntime for JsonRuntime {
    fn mount(&mut self, payload: &str) -> Result<String, BridgeError> {
        Ok(payload.to_string())
    }
}
