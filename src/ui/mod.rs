//! 原生控件库
//!
//! 控件类按模块分布在 `uix` 命名空间下，桥接层通过
//! [`crate::bridge::WidgetLibrary`] 查找。

mod class;
mod widget;
mod label;
mod button;
mod text_input;
mod image;
mod check_box;
mod switch;
mod slider;
mod progress_bar;
mod box_layout;
mod grid_layout;
mod float_layout;
mod scroll_view;

pub use class::{PropertyKind, PropertySpec, WidgetClass, BASE_PROPERTIES};
pub use widget::{
    count_widgets, BaseWidget, Container, Widget, WidgetCore, WidgetId, WidgetSnapshot,
    WidgetTree, WIDGET,
};
pub use label::{Label, LABEL};
pub use button::{Button, BUTTON};
pub use text_input::{TextInput, TEXT_INPUT};
pub use image::{Image, ASYNC_IMAGE, IMAGE};
pub use check_box::{CheckBox, CHECK_BOX};
pub use switch::{Switch, SWITCH};
pub use slider::{Slider, SLIDER};
pub use progress_bar::{ProgressBar, PROGRESS_BAR};
pub use box_layout::{BoxLayout, BOX_LAYOUT};
pub use grid_layout::{GridLayout, GRID_LAYOUT};
pub use float_layout::{FloatLayout, FLOAT_LAYOUT};
pub use scroll_view::{ScrollView, SCROLL_VIEW};

/// 控件库自带的全部控件类
pub fn standard_classes() -> [&'static WidgetClass; 14] {
    [
        &WIDGET,
        &LABEL,
        &BUTTON,
        &TEXT_INPUT,
        &IMAGE,
        &ASYNC_IMAGE,
        &CHECK_BOX,
        &SWITCH,
        &SLIDER,
        &PROGRESS_BAR,
        &BOX_LAYOUT,
        &GRID_LAYOUT,
        &FLOAT_LAYOUT,
        &SCROLL_VIEW,
    ]
}
