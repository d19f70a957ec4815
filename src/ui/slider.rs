//! Slider 控件 - 滑动选择器

use super::class::{PropertyKind, PropertySpec, WidgetClass};
use super::widget::{Widget, WidgetCore};
use std::any::Any;

pub static SLIDER: WidgetClass = WidgetClass {
    name: "Slider",
    module: "slider",
    properties: &[
        PropertySpec::new("value", PropertyKind::Numeric),
        PropertySpec::new("min", PropertyKind::Numeric),
        PropertySpec::new("max", PropertyKind::Numeric),
        PropertySpec::new("step", PropertyKind::Numeric),
        PropertySpec::new("orientation", PropertyKind::Option(&["horizontal", "vertical"])),
        PropertySpec::new("value_track", PropertyKind::Boolean),
        PropertySpec::new("value_track_color", PropertyKind::Color),
    ],
    events: &[],
    parent: None,
    construct: Slider::construct,
};

pub struct Slider {
    core: WidgetCore,
}

impl Slider {
    fn construct(core: WidgetCore) -> Box<dyn Widget> {
        Box::new(Self { core })
    }

    pub fn value(&self) -> f64 {
        self.core.f64_prop("value").unwrap_or(0.0)
    }

    /// 取值范围，默认 0..100
    pub fn range(&self) -> (f64, f64) {
        (
            self.core.f64_prop("min").unwrap_or(0.0),
            self.core.f64_prop("max").unwrap_or(100.0),
        )
    }
}

impl Widget for Slider {
    fn core(&self) -> &WidgetCore {
        &self.core
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
