//! TextInput 控件 - 文本输入框

use super::class::{PropertyKind, PropertySpec, WidgetClass};
use super::widget::{Widget, WidgetCore};
use std::any::Any;

pub static TEXT_INPUT: WidgetClass = WidgetClass {
    name: "TextInput",
    module: "textinput",
    properties: &[
        PropertySpec::new("text", PropertyKind::String),
        PropertySpec::new("hint_text", PropertyKind::String),
        PropertySpec::new("multiline", PropertyKind::Boolean),
        PropertySpec::new("password", PropertyKind::Boolean),
        PropertySpec::new("readonly", PropertyKind::Boolean),
        PropertySpec::new("font_size", PropertyKind::Numeric),
        PropertySpec::new("foreground_color", PropertyKind::Color),
        PropertySpec::new("background_color", PropertyKind::Color),
        PropertySpec::new("padding", PropertyKind::VariableList),
        PropertySpec::new(
            "input_filter",
            PropertyKind::Option(&["int", "float"]),
        )
        .nullable(),
    ],
    events: &["on_text_validate", "on_double_tap"],
    parent: None,
    construct: TextInput::construct,
};

/// TextInput - 输入框组件
pub struct TextInput {
    core: WidgetCore,
}

impl TextInput {
    fn construct(core: WidgetCore) -> Box<dyn Widget> {
        Box::new(Self { core })
    }

    pub fn text(&self) -> &str {
        self.core.str_prop("text").unwrap_or("")
    }

    pub fn hint_text(&self) -> &str {
        self.core.str_prop("hint_text").unwrap_or("")
    }

    pub fn is_multiline(&self) -> bool {
        self.core.bool_prop("multiline").unwrap_or(true)
    }
}

impl Widget for TextInput {
    fn core(&self) -> &WidgetCore {
        &self.core
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
