//! 静态降级构建
//!
//! 只认识 BoxLayout 和 Button，其余类型一律构造成 Label，
//! 因此不会出现未解析错误；清洗和挂载规则与动态合成相同。

use crate::error::BridgeError;
use crate::parser::WidgetNode;
use crate::ui::{Widget, WidgetClass, BOX_LAYOUT, BUTTON, LABEL};
use super::sanitize::sanitize;
use super::synthesizer::attach_child;

/// 降级构建器
#[derive(Debug, Default, Clone, Copy)]
pub struct FallbackBuilder;

impl FallbackBuilder {
    pub fn new() -> Self {
        Self
    }

    /// 固定的三路分派
    pub fn class_for(widget_type: &str) -> &'static WidgetClass {
        match widget_type {
            "BoxLayout" => &BOX_LAYOUT,
            "Button" => &BUTTON,
            _ => &LABEL,
        }
    }

    pub fn build(&self, node: &WidgetNode) -> Result<Box<dyn Widget>, BridgeError> {
        let class = Self::class_for(&node.widget_type);
        let mut widget = class.instantiate(sanitize(&node.props))?;

        for child in &node.children {
            let child = self.build(child)?;
            attach_child(widget.as_mut(), child)?;
        }

        Ok(widget)
    }
}
