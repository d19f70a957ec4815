//! 控件树节点解析
//!
//! mount 输出的 JSON 形如：
//! `{"widget_type": "BoxLayout", "props": {...}, "children": [...]}`，
//! 三个字段都可省略。

use crate::error::BridgeError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// 属性表
pub type PropMap = Map<String, Value>;

/// 缺省的控件类型
pub const DEFAULT_WIDGET_TYPE: &str = "Label";

fn default_widget_type() -> String {
    DEFAULT_WIDGET_TYPE.to_string()
}

/// 控件树节点
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidgetNode {
    #[serde(default = "default_widget_type")]
    pub widget_type: String,
    #[serde(default)]
    pub props: PropMap,
    #[serde(default)]
    pub children: Vec<WidgetNode>,
}

impl WidgetNode {
    pub fn new(widget_type: impl Into<String>) -> Self {
        Self {
            widget_type: widget_type.into(),
            props: PropMap::new(),
            children: Vec::new(),
        }
    }

    pub fn with_props(mut self, props: Value) -> Self {
        if let Value::Object(map) = props {
            self.props = map;
        }
        self
    }

    pub fn with_children(mut self, children: Vec<WidgetNode>) -> Self {
        self.children = children;
        self
    }

    /// 解析 mount 输出的 JSON 文本
    pub fn from_json(text: &str) -> Result<Self, BridgeError> {
        let value: Value = serde_json::from_str(text)
            .map_err(|e| BridgeError::MalformedPayload(e.to_string()))?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> Result<Self, BridgeError> {
        check_shape(&value, "$")?;
        serde_json::from_value(value).map_err(|e| BridgeError::MalformedPayload(e.to_string()))
    }

    /// 子树节点总数（含自身）
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(|c| c.count()).sum::<usize>()
    }

    pub fn depth(&self) -> usize {
        1 + self.children.iter().map(|c| c.depth()).max().unwrap_or(0)
    }
}

/// serde 的结构体也接受数组形式，这里先按路径检查每一层都是对象
fn check_shape(value: &Value, path: &str) -> Result<(), BridgeError> {
    let obj = value.as_object().ok_or_else(|| {
        BridgeError::MalformedPayload(format!("{} is not an object", path))
    })?;

    match obj.get("widget_type") {
        None | Some(Value::String(_)) => {}
        Some(_) => {
            return Err(BridgeError::MalformedPayload(format!(
                "{}.widget_type must be a string",
                path
            )))
        }
    }

    if let Some(props) = obj.get("props") {
        if !props.is_object() {
            return Err(BridgeError::MalformedPayload(format!(
                "{}.props must be an object",
                path
            )));
        }
    }

    if let Some(children) = obj.get("children") {
        let list = children.as_array().ok_or_else(|| {
            BridgeError::MalformedPayload(format!("{}.children must be an array", path))
        })?;
        for (i, child) in list.iter().enumerate() {
            check_shape(child, &format!("{}.children[{}]", path, i))?;
        }
    }

    Ok(())
}
