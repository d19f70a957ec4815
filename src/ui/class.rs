//! 原生控件类定义
//!
//! 每个控件类声明自己的属性表和事件，构造时按表校验传入的属性，
//! 校验失败即构造失败。

use crate::error::BridgeError;
use crate::parser::PropMap;
use super::widget::{Widget, WidgetCore};
use serde_json::Value;

/// 属性类型
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PropertyKind {
    String,
    Numeric,
    /// 非负整数（行数、列数之类）
    Count,
    Boolean,
    /// `[r, g, b]` / `[r, g, b, a]` 或 `#rrggbb`
    Color,
    /// 单个数字，或 1/2/4 个数字的列表（padding 之类）
    VariableList,
    List,
    Dict,
    Option(&'static [&'static str]),
    Any,
}

impl PropertyKind {
    fn accepts(&self, value: &Value) -> bool {
        match self {
            PropertyKind::String => value.is_string(),
            PropertyKind::Numeric => value.is_number(),
            PropertyKind::Count => value.is_u64(),
            PropertyKind::Boolean => value.is_boolean(),
            PropertyKind::Color => match value {
                Value::String(s) => s.starts_with('#'),
                Value::Array(items) => {
                    (items.len() == 3 || items.len() == 4) && items.iter().all(Value::is_number)
                }
                _ => false,
            },
            PropertyKind::VariableList => match value {
                Value::Number(_) => true,
                Value::Array(items) => {
                    matches!(items.len(), 1 | 2 | 4) && items.iter().all(Value::is_number)
                }
                _ => false,
            },
            PropertyKind::List => value.is_array(),
            PropertyKind::Dict => value.is_object(),
            PropertyKind::Option(choices) => value
                .as_str()
                .map(|s| choices.contains(&s))
                .unwrap_or(false),
            PropertyKind::Any => true,
        }
    }

    fn describe(&self) -> String {
        match self {
            PropertyKind::String => "a string".to_string(),
            PropertyKind::Numeric => "a number".to_string(),
            PropertyKind::Count => "a non-negative integer".to_string(),
            PropertyKind::Boolean => "a boolean".to_string(),
            PropertyKind::Color => "a color".to_string(),
            PropertyKind::VariableList => "a number or a list of 1, 2 or 4 numbers".to_string(),
            PropertyKind::List => "a list".to_string(),
            PropertyKind::Dict => "an object".to_string(),
            PropertyKind::Option(choices) => format!("one of {:?}", choices),
            PropertyKind::Any => "any value".to_string(),
        }
    }
}

/// 属性声明
#[derive(Debug, Clone, Copy)]
pub struct PropertySpec {
    pub name: &'static str,
    pub kind: PropertyKind,
    pub nullable: bool,
}

impl PropertySpec {
    pub const fn new(name: &'static str, kind: PropertyKind) -> Self {
        Self { name, kind, nullable: false }
    }

    pub const fn nullable(self) -> Self {
        Self { nullable: true, ..self }
    }

    pub fn accepts(&self, value: &Value) -> bool {
        (self.nullable && value.is_null()) || self.kind.accepts(value)
    }
}

/// 所有控件共有的属性
pub const BASE_PROPERTIES: &[PropertySpec] = &[
    PropertySpec::new("x", PropertyKind::Numeric),
    PropertySpec::new("y", PropertyKind::Numeric),
    PropertySpec::new("width", PropertyKind::Numeric),
    PropertySpec::new("height", PropertyKind::Numeric),
    PropertySpec::new("pos", PropertyKind::List),
    PropertySpec::new("size", PropertyKind::List),
    PropertySpec::new("size_hint", PropertyKind::List),
    PropertySpec::new("size_hint_x", PropertyKind::Numeric).nullable(),
    PropertySpec::new("size_hint_y", PropertyKind::Numeric).nullable(),
    PropertySpec::new("pos_hint", PropertyKind::Dict),
    PropertySpec::new("opacity", PropertyKind::Numeric),
    PropertySpec::new("disabled", PropertyKind::Boolean),
];

/// 可构造的原生控件类
pub struct WidgetClass {
    pub name: &'static str,
    /// 所在模块名（控件库根命名空间之下）
    pub module: &'static str,
    pub properties: &'static [PropertySpec],
    /// 声明的事件，带 `on_` 前缀
    pub events: &'static [&'static str],
    /// 父类，属性和事件沿继承链查找
    pub parent: Option<&'static WidgetClass>,
    pub construct: fn(WidgetCore) -> Box<dyn Widget>,
}

impl WidgetClass {
    /// 查找属性声明，沿继承链查找，最后查公共属性
    pub fn property(&self, name: &str) -> Option<&'static PropertySpec> {
        let mut class = Some(self);
        while let Some(current) = class {
            if let Some(spec) = current.properties.iter().find(|spec| spec.name == name) {
                return Some(spec);
            }
            class = current.parent;
        }
        BASE_PROPERTIES.iter().find(|spec| spec.name == name)
    }

    /// `on_xxx` 是否可以作为事件绑定
    pub fn handles_event(&self, key: &str) -> bool {
        let mut class = Some(self);
        while let Some(current) = class {
            if current.events.contains(&key) {
                return true;
            }
            class = current.parent;
        }
        key.strip_prefix("on_")
            .map(|prop| self.property(prop).is_some())
            .unwrap_or(false)
    }

    /// 校验属性并构造控件
    pub fn instantiate(&'static self, props: PropMap) -> Result<Box<dyn Widget>, BridgeError> {
        let mut properties = PropMap::new();
        let mut bindings = Vec::new();

        for (key, value) in props {
            if let Some(spec) = self.property(&key) {
                if !spec.accepts(&value) {
                    return Err(BridgeError::construction(
                        self.name,
                        format!("property '{}' expects {}, got {}", key, spec.kind.describe(), value),
                    ));
                }
                properties.insert(key, value);
            } else if self.handles_event(&key) {
                bindings.push(key);
            } else {
                return Err(BridgeError::construction(
                    self.name,
                    format!("unexpected property '{}'", key),
                ));
            }
        }

        Ok((self.construct)(WidgetCore::new(self, properties, bindings)))
    }
}

impl std::fmt::Debug for WidgetClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WidgetClass")
            .field("name", &self.name)
            .field("module", &self.module)
            .finish()
    }
}
