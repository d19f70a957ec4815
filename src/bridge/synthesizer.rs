//! 控件树合成
//!
//! 前序深度优先：先构造当前节点，再按顺序构造并挂载子节点。
//! 任何一个节点解析失败，整次构建失败，已经构造出来的子树随错误一起丢弃。

use crate::error::BridgeError;
use crate::parser::WidgetNode;
use crate::ui::Widget;
use super::resolver::WidgetResolver;
use super::sanitize::sanitize;
use log::debug;

/// 控件树合成器
pub struct TreeSynthesizer {
    resolver: WidgetResolver,
}

impl TreeSynthesizer {
    pub fn new(resolver: WidgetResolver) -> Self {
        Self { resolver }
    }

    pub fn build(&mut self, node: &WidgetNode) -> Result<Box<dyn Widget>, BridgeError> {
        let class = self.resolver.resolve(&node.widget_type)?;
        let mut widget = class.instantiate(sanitize(&node.props))?;

        for child in &node.children {
            let child = self.build(child)?;
            attach_child(widget.as_mut(), child)?;
        }

        Ok(widget)
    }

    pub fn resolver(&self) -> &WidgetResolver {
        &self.resolver
    }

    pub fn resolver_mut(&mut self) -> &mut WidgetResolver {
        &mut self.resolver
    }
}

/// 挂载子控件；叶子控件没有容器能力，子控件构造完后直接丢弃
pub(crate) fn attach_child(
    parent: &mut dyn Widget,
    child: Box<dyn Widget>,
) -> Result<bool, BridgeError> {
    let parent_type = parent.type_name();
    match parent.as_container_mut() {
        Some(container) => {
            container.add_widget(child)?;
            Ok(true)
        }
        None => {
            debug!("{} accepts no children, dropping {}", parent_type, child.type_name());
            Ok(false)
        }
    }
}
