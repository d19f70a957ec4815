//! CheckBox 控件 - 复选框

use super::class::{PropertyKind, PropertySpec, WidgetClass};
use super::widget::{Widget, WidgetCore};
use std::any::Any;

pub static CHECK_BOX: WidgetClass = WidgetClass {
    name: "CheckBox",
    module: "checkbox",
    properties: &[
        PropertySpec::new("active", PropertyKind::Boolean),
        // 设置 group 后表现为单选框
        PropertySpec::new("group", PropertyKind::String).nullable(),
        PropertySpec::new("color", PropertyKind::Color),
    ],
    events: &[],
    parent: None,
    construct: CheckBox::construct,
};

pub struct CheckBox {
    core: WidgetCore,
}

impl CheckBox {
    fn construct(core: WidgetCore) -> Box<dyn Widget> {
        Box::new(Self { core })
    }

    pub fn is_active(&self) -> bool {
        self.core.bool_prop("active").unwrap_or(false)
    }

    pub fn is_radio(&self) -> bool {
        self.core.str_prop("group").is_some()
    }
}

impl Widget for CheckBox {
    fn core(&self) -> &WidgetCore {
        &self.core
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
