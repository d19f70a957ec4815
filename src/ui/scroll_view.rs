//! ScrollView 控件 - 滚动容器，只能放一个子控件

use crate::error::BridgeError;
use super::class::{PropertyKind, PropertySpec, WidgetClass};
use super::widget::{Container, Widget, WidgetCore};
use std::any::Any;

pub static SCROLL_VIEW: WidgetClass = WidgetClass {
    name: "ScrollView",
    module: "scrollview",
    properties: &[
        PropertySpec::new("do_scroll_x", PropertyKind::Boolean),
        PropertySpec::new("do_scroll_y", PropertyKind::Boolean),
        PropertySpec::new("scroll_x", PropertyKind::Numeric),
        PropertySpec::new("scroll_y", PropertyKind::Numeric),
        PropertySpec::new("bar_width", PropertyKind::Numeric),
        PropertySpec::new("effect_cls", PropertyKind::String),
    ],
    events: &["on_scroll_start", "on_scroll_move", "on_scroll_stop"],
    parent: None,
    construct: ScrollView::construct,
};

pub struct ScrollView {
    core: WidgetCore,
    content: Vec<Box<dyn Widget>>,
}

impl ScrollView {
    fn construct(core: WidgetCore) -> Box<dyn Widget> {
        Box::new(Self { core, content: Vec::new() })
    }

    pub fn content(&self) -> Option<&dyn Widget> {
        self.content.first().map(|c| c.as_ref())
    }
}

impl Widget for ScrollView {
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

impl Container for ScrollView {
    fn add_widget(&mut self, child: Box<dyn Widget>) -> Result<(), BridgeError> {
        if !self.content.is_empty() {
            return Err(BridgeError::construction(
                SCROLL_VIEW.name,
                "ScrollView accepts only one widget",
            ));
        }
        self.content.push(child);
        Ok(())
    }

    fn children(&self) -> &[Box<dyn Widget>] {
        &self.content
    }
}
