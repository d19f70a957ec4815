//! 桥接层错误类型

use thiserror::Error;

/// 同步一棵控件树时可能出现的错误
#[derive(Debug, Error)]
pub enum BridgeError {
    /// 控件类型名在原生控件库中找不到对应的类
    #[error("unresolved widget '{name}' at {path}")]
    UnresolvedWidget { name: String, path: String },

    /// mount 输出不是合法 JSON，或者节点结构不对
    #[error("malformed widget payload: {0}")]
    MalformedPayload(String),

    /// 原生控件拒绝了传入的属性（或拒绝挂载子控件）
    #[error("{widget} construction failed: {message}")]
    NativeConstruction { widget: String, message: String },

    /// 脚本运行时 mount 失败
    #[error("script runtime mount failed: {0}")]
    Mount(String),
}

impl BridgeError {
    pub fn construction(widget: &str, message: impl Into<String>) -> Self {
        Self::NativeConstruction {
            widget: widget.to_string(),
            message: message.into(),
        }
    }

    /// 只有这一种错误会触发降级构建
    pub fn is_unresolved(&self) -> bool {
        matches!(self, Self::UnresolvedWidget { .. })
    }
}
