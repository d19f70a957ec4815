//! 单元测试模块
//! 覆盖解析、清洗、控件类解析、合成、降级、QuickJS 运行时与应用外壳

pub mod resolver_tests;
pub mod js_tests;
