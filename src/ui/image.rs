//! Image / AsyncImage 控件
//!
//! 两个类都放在 `image` 模块下，AsyncImage 按名字推导不出模块路径，
//! 只能通过降级构建器显示成默认的 Label。

use super::class::{PropertyKind, PropertySpec, WidgetClass};
use super::widget::{Widget, WidgetCore};
use std::any::Any;

pub static IMAGE: WidgetClass = WidgetClass {
    name: "Image",
    module: "image",
    properties: &[
        PropertySpec::new("source", PropertyKind::String),
        PropertySpec::new("color", PropertyKind::Color),
        PropertySpec::new("fit_mode", PropertyKind::Option(&["scale-down", "fill", "contain", "cover"])),
        PropertySpec::new("nocache", PropertyKind::Boolean),
        PropertySpec::new("anim_delay", PropertyKind::Numeric),
    ],
    events: &["on_error"],
    parent: None,
    construct: Image::construct,
};

pub static ASYNC_IMAGE: WidgetClass = WidgetClass {
    name: "AsyncImage",
    module: "image",
    properties: &[],
    events: &["on_load"],
    parent: Some(&IMAGE),
    construct: Image::construct,
};

/// Image - 图片组件
pub struct Image {
    core: WidgetCore,
}

impl Image {
    fn construct(core: WidgetCore) -> Box<dyn Widget> {
        Box::new(Self { core })
    }

    pub fn source(&self) -> Option<&str> {
        self.core.str_prop("source")
    }
}

impl Widget for Image {
    fn core(&self) -> &WidgetCore {
        &self.core
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
