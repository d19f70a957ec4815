//! BoxLayout 控件 - 线性布局容器

use crate::error::BridgeError;
use super::class::{PropertyKind, PropertySpec, WidgetClass};
use super::widget::{Container, Widget, WidgetCore};
use std::any::Any;

pub static BOX_LAYOUT: WidgetClass = WidgetClass {
    name: "BoxLayout",
    module: "boxlayout",
    properties: &[
        PropertySpec::new("orientation", PropertyKind::Option(&["horizontal", "vertical"])),
        PropertySpec::new("padding", PropertyKind::VariableList),
        PropertySpec::new("spacing", PropertyKind::Numeric),
    ],
    events: &[],
    parent: None,
    construct: BoxLayout::construct,
};

/// BoxLayout - 子控件按水平或垂直方向依次排列
pub struct BoxLayout {
    core: WidgetCore,
    children: Vec<Box<dyn Widget>>,
}

impl BoxLayout {
    fn construct(core: WidgetCore) -> Box<dyn Widget> {
        Box::new(Self { core, children: Vec::new() })
    }

    pub fn is_vertical(&self) -> bool {
        self.core.str_prop("orientation") == Some("vertical")
    }

    pub fn spacing(&self) -> f64 {
        self.core.f64_prop("spacing").unwrap_or(0.0)
    }
}

impl Widget for BoxLayout {
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

impl Container for BoxLayout {
    fn add_widget(&mut self, child: Box<dyn Widget>) -> Result<(), BridgeError> {
        self.children.push(child);
        Ok(())
    }

    fn children(&self) -> &[Box<dyn Widget>] {
        &self.children
    }
}
