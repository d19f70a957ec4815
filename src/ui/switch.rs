//! Switch 控件 - 开关

use super::class::{PropertyKind, PropertySpec, WidgetClass};
use super::widget::{Widget, WidgetCore};
use std::any::Any;

pub static SWITCH: WidgetClass = WidgetClass {
    name: "Switch",
    module: "switch",
    properties: &[PropertySpec::new("active", PropertyKind::Boolean)],
    events: &[],
    parent: None,
    construct: Switch::construct,
};

pub struct Switch {
    core: WidgetCore,
}

impl Switch {
    fn construct(core: WidgetCore) -> Box<dyn Widget> {
        Box::new(Self { core })
    }

    pub fn is_active(&self) -> bool {
        self.core.bool_prop("active").unwrap_or(false)
    }
}

impl Widget for Switch {
    fn core(&self) -> &WidgetCore {
        &self.core
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
