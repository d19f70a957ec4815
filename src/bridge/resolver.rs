//! 控件类解析
//!
//! 类型名 → 控件类。模块路径由类型名小写推导，符号名用原始类型名，
//! 结果按原始类型名缓存，进程内不淘汰。

use crate::error::BridgeError;
use crate::ui::WidgetClass;
use super::library::{LookupMiss, WidgetLibrary, LIBRARY_ROOT};
use log::debug;
use std::collections::HashMap;

/// 解析结果，同一个名字永远指向同一个类
pub type ResolvedClass = &'static WidgetClass;

/// 控件类缓存，由解析器独占
#[derive(Debug, Default)]
pub struct WidgetClassCache {
    entries: HashMap<String, ResolvedClass>,
}

impl WidgetClassCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<ResolvedClass> {
        self.entries.get(name).copied()
    }

    pub fn insert(&mut self, name: &str, class: ResolvedClass) {
        self.entries.insert(name.to_string(), class);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// 控件类解析器
pub struct WidgetResolver {
    library: WidgetLibrary,
    cache: WidgetClassCache,
}

impl WidgetResolver {
    pub fn new(library: WidgetLibrary) -> Self {
        Self::with_cache(library, WidgetClassCache::new())
    }

    pub fn with_cache(library: WidgetLibrary, cache: WidgetClassCache) -> Self {
        Self { library, cache }
    }

    /// 类型名推导出的模块路径
    pub fn module_path_for(name: &str) -> String {
        format!("{}.{}", LIBRARY_ROOT, name.to_lowercase())
    }

    pub fn resolve(&mut self, name: &str) -> Result<ResolvedClass, BridgeError> {
        if let Some(class) = self.cache.get(name) {
            return Ok(class);
        }

        let path = Self::module_path_for(name);
        let class = match self.library.lookup(&path, name) {
            Ok(class) => class,
            Err(miss) => {
                debug!("unresolved widget {} at {}: {}", name, path, miss.describe());
                return Err(BridgeError::UnresolvedWidget {
                    name: name.to_string(),
                    path,
                });
            }
        };

        debug!("resolved widget {} -> {}", name, path);
        self.cache.insert(name, class);
        Ok(class)
    }

    pub fn cache(&self) -> &WidgetClassCache {
        &self.cache
    }

    pub fn library(&self) -> &WidgetLibrary {
        &self.library
    }
}

impl Default for WidgetResolver {
    fn default() -> Self {
        Self::new(WidgetLibrary::standard())
    }
}
