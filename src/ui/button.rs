//! Button 控件 - 可点击按钮

use super::class::{PropertyKind, PropertySpec, WidgetClass};
use super::label::LABEL;
use super::widget::{Widget, WidgetCore};
use std::any::Any;

/// 按钮继承 Label 的全部属性
pub static BUTTON: WidgetClass = WidgetClass {
    name: "Button",
    module: "button",
    properties: &[
        PropertySpec::new("background_color", PropertyKind::Color),
        PropertySpec::new("background_normal", PropertyKind::String),
        PropertySpec::new("background_down", PropertyKind::String),
        PropertySpec::new("state", PropertyKind::Option(&["normal", "down"])),
        PropertySpec::new("always_release", PropertyKind::Boolean),
    ],
    events: &["on_press", "on_release"],
    parent: Some(&LABEL),
    construct: Button::construct,
};

/// Button - 按钮组件
pub struct Button {
    core: WidgetCore,
}

impl Button {
    fn construct(core: WidgetCore) -> Box<dyn Widget> {
        Box::new(Self { core })
    }

    pub fn text(&self) -> &str {
        self.core.str_prop("text").unwrap_or("")
    }

    pub fn is_down(&self) -> bool {
        self.core.str_prop("state") == Some("down")
    }
}

impl Widget for Button {
    fn core(&self) -> &WidgetCore {
        &self.core
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
