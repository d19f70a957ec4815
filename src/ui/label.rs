//! Label 控件 - 文本显示

use super::class::{PropertyKind, PropertySpec, WidgetClass};
use super::widget::{Widget, WidgetCore};
use std::any::Any;

pub(crate) const HALIGN: &[&str] = &["left", "center", "right", "justify", "auto"];
pub(crate) const VALIGN: &[&str] = &["bottom", "middle", "center", "top"];

pub static LABEL: WidgetClass = WidgetClass {
    name: "Label",
    module: "label",
    properties: &[
        PropertySpec::new("text", PropertyKind::String),
        PropertySpec::new("font_size", PropertyKind::Numeric),
        PropertySpec::new("font_name", PropertyKind::String),
        PropertySpec::new("color", PropertyKind::Color),
        PropertySpec::new("bold", PropertyKind::Boolean),
        PropertySpec::new("italic", PropertyKind::Boolean),
        PropertySpec::new("markup", PropertyKind::Boolean),
        PropertySpec::new("halign", PropertyKind::Option(HALIGN)),
        PropertySpec::new("valign", PropertyKind::Option(VALIGN)),
        PropertySpec::new("text_size", PropertyKind::List),
        PropertySpec::new("padding", PropertyKind::VariableList),
        PropertySpec::new("max_lines", PropertyKind::Numeric),
    ],
    events: &["on_ref_press"],
    parent: None,
    construct: Label::construct,
};

/// Label - 文本组件，不接受子控件
pub struct Label {
    core: WidgetCore,
}

impl Label {
    fn construct(core: WidgetCore) -> Box<dyn Widget> {
        Box::new(Self { core })
    }

    pub fn text(&self) -> &str {
        self.core.str_prop("text").unwrap_or("")
    }

    pub fn font_size(&self) -> f64 {
        self.core.f64_prop("font_size").unwrap_or(15.0)
    }
}

impl Widget for Label {
    fn core(&self) -> &WidgetCore {
        &self.core
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
