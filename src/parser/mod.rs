//! mount 输出解析

pub mod node;

pub use node::{PropMap, WidgetNode, DEFAULT_WIDGET_TYPE};
