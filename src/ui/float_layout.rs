//! FloatLayout 控件 - 绝对定位容器

use crate::error::BridgeError;
use super::class::WidgetClass;
use super::widget::{Container, Widget, WidgetCore};
use std::any::Any;

pub static FLOAT_LAYOUT: WidgetClass = WidgetClass {
    name: "FloatLayout",
    module: "floatlayout",
    properties: &[],
    events: &[],
    parent: None,
    construct: FloatLayout::construct,
};

pub struct FloatLayout {
    core: WidgetCore,
    children: Vec<Box<dyn Widget>>,
}

impl FloatLayout {
    fn construct(core: WidgetCore) -> Box<dyn Widget> {
        Box::new(Self { core, children: Vec::new() })
    }
}

impl Widget for FloatLayout {
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

impl Container for FloatLayout {
    fn add_widget(&mut self, child: Box<dyn Widget>) -> Result<(), BridgeError> {
        self.children.push(child);
        Ok(())
    }

    fn children(&self) -> &[Box<dyn Widget>] {
        &self.children
    }
}
