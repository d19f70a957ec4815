//! GridLayout 控件 - 网格布局容器

use crate::error::BridgeError;
use super::class::{PropertyKind, PropertySpec, WidgetClass};
use super::widget::{Container, Widget, WidgetCore};
use std::any::Any;

pub static GRID_LAYOUT: WidgetClass = WidgetClass {
    name: "GridLayout",
    module: "gridlayout",
    properties: &[
        PropertySpec::new("cols", PropertyKind::Count).nullable(),
        PropertySpec::new("rows", PropertyKind::Count).nullable(),
        PropertySpec::new("padding", PropertyKind::VariableList),
        PropertySpec::new("spacing", PropertyKind::VariableList),
        PropertySpec::new("col_default_width", PropertyKind::Numeric),
        PropertySpec::new("row_default_height", PropertyKind::Numeric),
    ],
    events: &[],
    parent: None,
    construct: GridLayout::construct,
};

pub struct GridLayout {
    core: WidgetCore,
    children: Vec<Box<dyn Widget>>,
}

impl GridLayout {
    fn construct(core: WidgetCore) -> Box<dyn Widget> {
        Box::new(Self { core, children: Vec::new() })
    }

    /// 0 和未设置都表示不限
    fn limit(&self, name: &str) -> Option<u64> {
        self.core.u64_prop(name).filter(|n| *n >= 1)
    }

    /// 行列都设置时的格子数，乘积溢出时视为不限
    pub fn capacity(&self) -> Option<u64> {
        match (self.limit("cols"), self.limit("rows")) {
            (Some(cols), Some(rows)) => cols.checked_mul(rows),
            _ => None,
        }
    }
}

impl Widget for GridLayout {
    fn core(&self) -> &WidgetCore {
        &self.core
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_container(&self) -> Option<&dyn Container> {
        Some(self)
    }

    fn as_container_mut(&mut self) -> Option<&mut dyn Container> {
        Some(self)
    }
}

impl Container for GridLayout {
    fn add_widget(&mut self, child: Box<dyn Widget>) -> Result<(), BridgeError> {
        if let Some(capacity) = self.capacity() {
            if self.children.len() as u64 >= capacity {
                return Err(BridgeError::construction(
                    GRID_LAYOUT.name,
                    format!("too many children ({} cells)", capacity),
                ));
            }
        }
        self.children.push(child);
        Ok(())
    }

    fn children(&self) -> &[Box<dyn Widget>] {
        &self.children
    }
}
