//! 属性清洗
//!
//! 回调函数无法跨过脚本运行时的边界，交给原生构造函数之前先去掉。

use crate::parser::PropMap;

/// 保留的交互回调属性名
pub const CALLBACK_PROP: &str = "on_press";

/// 返回去掉回调属性后的浅拷贝，不修改输入
pub fn sanitize(props: &PropMap) -> PropMap {
    let mut safe = props.clone();
    safe.remove(CALLBACK_PROP);
    safe
}
