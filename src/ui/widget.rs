//! 控件基础定义

use crate::error::BridgeError;
use crate::parser::PropMap;
use super::class::{PropertyKind, PropertySpec, WidgetClass};
use serde::Serialize;
use std::any::Any;
use std::sync::atomic::{AtomicU64, Ordering};

static WIDGET_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// 控件 ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WidgetId(pub u64);

impl WidgetId {
    pub fn new() -> Self {
        Self(WIDGET_ID_COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl Default for WidgetId {
    fn default() -> Self {
        Self::new()
    }
}

/// 每个控件都持有的公共状态
pub struct WidgetCore {
    id: WidgetId,
    class: &'static WidgetClass,
    properties: PropMap,
    bindings: Vec<String>,
}

impl WidgetCore {
    pub fn new(class: &'static WidgetClass, properties: PropMap, bindings: Vec<String>) -> Self {
        Self {
            id: WidgetId::new(),
            class,
            properties,
            bindings,
        }
    }

    pub fn str_prop(&self, name: &str) -> Option<&str> {
        self.properties.get(name).and_then(|v| v.as_str())
    }

    pub fn f64_prop(&self, name: &str) -> Option<f64> {
        self.properties.get(name).and_then(|v| v.as_f64())
    }

    pub fn u64_prop(&self, name: &str) -> Option<u64> {
        self.properties.get(name).and_then(|v| v.as_u64())
    }

    pub fn bool_prop(&self, name: &str) -> Option<bool> {
        self.properties.get(name).and_then(|v| v.as_bool())
    }
}

/// 控件 trait
pub trait Widget {
    fn core(&self) -> &WidgetCore;

    fn as_any(&self) -> &dyn Any;

    fn id(&self) -> WidgetId {
        self.core().id
    }

    fn class(&self) -> &'static WidgetClass {
        self.core().class
    }

    /// 控件类型名
    fn type_name(&self) -> &'static str {
        self.core().class.name
    }

    /// 构造时接受的属性
    fn properties(&self) -> &PropMap {
        &self.core().properties
    }

    /// 构造时接受的事件绑定名
    fn bindings(&self) -> &[String] {
        &self.core().bindings
    }

    /// 容器能力，叶子控件返回 None
    fn as_container(&self) -> Option<&dyn Container> {
        None
    }

    fn as_container_mut(&mut self) -> Option<&mut dyn Container> {
        None
    }

    fn children(&self) -> &[Box<dyn Widget>] {
        match self.as_container() {
            Some(container) => container.children(),
            None => &[],
        }
    }
}

impl std::fmt::Debug for dyn Widget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct(self.type_name())
            .field("id", &self.id().0)
            .field("children", &self.children().len())
            .finish()
    }
}

/// 可挂载子控件的能力
pub trait Container {
    /// 挂载子控件，按调用顺序排列
    fn add_widget(&mut self, child: Box<dyn Widget>) -> Result<(), BridgeError>;

    fn children(&self) -> &[Box<dyn Widget>];
}

/// 控件库的基类 `Widget`，本身就是一个可以放子控件的空白容器
pub static WIDGET: WidgetClass = WidgetClass {
    name: "Widget",
    module: "widget",
    properties: &[PropertySpec::new("canvas", PropertyKind::Any)],
    events: &["on_touch_down", "on_touch_up", "on_touch_move"],
    parent: None,
    construct: BaseWidget::construct,
};

pub struct BaseWidget {
    core: WidgetCore,
    children: Vec<Box<dyn Widget>>,
}

impl BaseWidget {
    fn construct(core: WidgetCore) -> Box<dyn Widget> {
        Box::new(Self { core, children: Vec::new() })
    }
}

impl Widget for BaseWidget {
    fn core(&self) -> &WidgetCore {
        &self.core
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_container(&self) -> Option<&dyn Container> {
        Some(self)
    }

    fn as_container_mut(&mut self) -> Option<&mut dyn Container> {
        Some(self)
    }
}

impl Container for BaseWidget {
    fn add_widget(&mut self, child: Box<dyn Widget>) -> Result<(), BridgeError> {
        self.children.push(child);
        Ok(())
    }

    fn children(&self) -> &[Box<dyn Widget>] {
        &self.children
    }
}

/// 控件快照，便于打印和比对
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WidgetSnapshot {
    pub widget_type: String,
    pub props: PropMap,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub bindings: Vec<String>,
    pub children: Vec<WidgetSnapshot>,
}

impl WidgetSnapshot {
    pub fn capture(widget: &dyn Widget) -> Self {
        Self {
            widget_type: widget.type_name().to_string(),
            props: widget.properties().clone(),
            bindings: widget.bindings().to_vec(),
            children: widget.children().iter().map(|c| Self::capture(c.as_ref())).collect(),
        }
    }
}

/// 控件树，根控件归应用所有
pub struct WidgetTree {
    root: Option<Box<dyn Widget>>,
}

impl WidgetTree {
    pub fn new() -> Self {
        Self { root: None }
    }

    /// 整棵替换，旧树直接丢弃
    pub fn set_root(&mut self, root: Box<dyn Widget>) -> Option<Box<dyn Widget>> {
        self.root.replace(root)
    }

    pub fn root(&self) -> Option<&dyn Widget> {
        self.root.as_deref()
    }

    pub fn take_root(&mut self) -> Option<Box<dyn Widget>> {
        self.root.take()
    }

    /// 节点总数
    pub fn count(&self) -> usize {
        self.root().map(count_widgets).unwrap_or(0)
    }

    pub fn snapshot(&self) -> Option<WidgetSnapshot> {
        self.root().map(WidgetSnapshot::capture)
    }
}

impl Default for WidgetTree {
    fn default() -> Self {
        Self::new()
    }
}

/// 子树节点总数（含自身）
pub fn count_widgets(widget: &dyn Widget) -> usize {
    1 + widget
        .children()
        .iter()
        .map(|c| count_widgets(c.as_ref()))
        .sum::<usize>()
}
