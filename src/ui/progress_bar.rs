//! ProgressBar 控件 - 进度条

use super::class::{PropertyKind, PropertySpec, WidgetClass};
use super::widget::{Widget, WidgetCore};
use std::any::Any;

pub static PROGRESS_BAR: WidgetClass = WidgetClass {
    name: "ProgressBar",
    module: "progressbar",
    properties: &[
        PropertySpec::new("value", PropertyKind::Numeric),
        PropertySpec::new("max", PropertyKind::Numeric),
    ],
    events: &[],
    parent: None,
    construct: ProgressBar::construct,
};

pub struct ProgressBar {
    core: WidgetCore,
}

impl ProgressBar {
    fn construct(core: WidgetCore) -> Box<dyn Widget> {
        Box::new(Self { core })
    }

    /// 进度百分比，限制在 0..=100
    pub fn percent(&self) -> f64 {
        let max = self.core.f64_prop("max").unwrap_or(100.0);
        if max <= 0.0 {
            return 0.0;
        }
        let value = self.core.f64_prop("value").unwrap_or(0.0);
        (value / max * 100.0).clamp(0.0, 100.0)
    }
}

impl Widget for ProgressBar {
    fn core(&self) -> &WidgetCore {
        &self.core
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
