//! 原生控件库命名空间
//!
//! 控件类按模块注册在 `uix.<module>` 路径下，进程启动时枚举一次。

use crate::ui::{self, WidgetClass};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// 控件库根命名空间
pub const LIBRARY_ROOT: &str = "uix";

static STANDARD_LIBRARY: Lazy<WidgetLibrary> = Lazy::new(|| {
    let mut library = WidgetLibrary::empty();
    for class in ui::standard_classes() {
        library.register(class);
    }
    log::debug!(
        "enumerated {} widget classes in {} modules",
        library.class_count(),
        library.modules.len()
    );
    library
});

/// 一个模块导出的控件类
#[derive(Debug, Clone, Default)]
pub struct Module {
    symbols: HashMap<&'static str, &'static WidgetClass>,
}

impl Module {
    pub fn symbol(&self, name: &str) -> Option<&'static WidgetClass> {
        self.symbols.get(name).copied()
    }

    pub fn symbols(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.symbols.keys().copied()
    }
}

/// 模块查找失败的原因，对外统一成未解析错误
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupMiss {
    NoModule,
    NoSymbol,
}

impl LookupMiss {
    pub fn describe(&self) -> &'static str {
        match self {
            LookupMiss::NoModule => "no such module",
            LookupMiss::NoSymbol => "module has no such symbol",
        }
    }
}

/// 原生控件库
#[derive(Debug, Clone, Default)]
pub struct WidgetLibrary {
    modules: HashMap<String, Module>,
}

impl WidgetLibrary {
    pub fn empty() -> Self {
        Self::default()
    }

    /// 控件库自带的控件
    pub fn standard() -> Self {
        STANDARD_LIBRARY.clone()
    }

    /// 模块路径
    pub fn module_path(module: &str) -> String {
        format!("{}.{}", LIBRARY_ROOT, module)
    }

    /// 注册控件类，同名覆盖
    pub fn register(&mut self, class: &'static WidgetClass) {
        self.modules
            .entry(Self::module_path(class.module))
            .or_default()
            .symbols
            .insert(class.name, class);
    }

    pub fn module(&self, path: &str) -> Option<&Module> {
        self.modules.get(path)
    }

    /// 加载模块并取出符号
    pub fn lookup(&self, path: &str, symbol: &str) -> Result<&'static WidgetClass, LookupMiss> {
        let module = self.module(path).ok_or(LookupMiss::NoModule)?;
        module.symbol(symbol).ok_or(LookupMiss::NoSymbol)
    }

    pub fn class_count(&self) -> usize {
        self.modules.values().map(|m| m.symbols.len()).sum()
    }

    /// 全部模块路径，排序后返回
    pub fn module_paths(&self) -> Vec<&str> {
        let mut paths: Vec<&str> = self.modules.keys().map(|k| k.as_str()).collect();
        paths.sort_unstable();
        paths
    }
}
