//! Mini Bridge - 声明式 UI 到原生控件树的桥接层
//! 脚本运行时 mount 出控件树 JSON，按类型名解析原生控件类并组装成树，
//! 解析失败时整棵树降级为固定的三种控件。

pub mod error;
pub mod config;

pub use error::BridgeError;
pub use config::AppConfig;

// 控件树 JSON 解析
pub mod parser;

// 原生控件库
pub mod ui;

// 解析、合成与降级
pub mod bridge;

// QuickJS 脚本运行时
pub mod js;

// 应用运行时
pub mod runtime;

pub use bridge::{BuildStrategy, FallbackBuilder, TreeSynthesizer, WidgetBridge, WidgetResolver};
pub use js::{JsonRuntime, QuickJsRuntime, ScriptRuntime};
pub use parser::WidgetNode;
pub use ui::{Widget, WidgetTree};

// 单元测试
#[cfg(test)]
mod tests;
