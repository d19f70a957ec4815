//! 控件类解析测试

use crate::bridge::{WidgetClassCache, WidgetLibrary, WidgetResolver, LIBRARY_ROOT};
use crate::error::BridgeError;
use crate::ui::{self, Widget, WidgetClass, WidgetCore, BUTTON, LABEL};
use std::any::Any;

fn resolver() -> WidgetResolver {
    WidgetResolver::new(WidgetLibrary::standard())
}

/// 测试标准控件都能按命名约定解析（AsyncImage 除外）
#[test]
fn test_standard_widgets_resolve() {
    let mut resolver = resolver();
    for class in ui::standard_classes() {
        let result = resolver.resolve(class.name);
        if class.name == "AsyncImage" {
            assert!(result.is_err());
        } else {
            assert!(std::ptr::eq(result.unwrap(), class), "{}", class.name);
        }
    }
}

/// 测试重复解析返回同一个类，且只缓存一份
#[test]
fn test_repeated_resolve_is_identical() {
    let mut resolver = resolver();
    let first = resolver.resolve("Button").unwrap();
    let second = resolver.resolve("Button").unwrap();
    assert!(std::ptr::eq(first, second));
    assert!(std::ptr::eq(first, &BUTTON));
    assert_eq!(resolver.cache().len(), 1);
}

/// 测试未知类型的错误带名字和路径
#[test]
fn test_unknown_widget_error() {
    let mut resolver = resolver();
    match resolver.resolve("FooBarWidget") {
        Err(BridgeError::UnresolvedWidget { name, path }) => {
            assert_eq!(name, "FooBarWidget");
            assert_eq!(path, format!("{}.foobarwidget", LIBRARY_ROOT));
        }
        other => panic!("expected unresolved widget, got {:?}", other),
    }
    assert!(resolver.cache().is_empty());
}

/// 测试模块存在但符号名大小写不匹配
#[test]
fn test_symbol_lookup_is_case_sensitive() {
    let mut resolver = resolver();
    assert!(resolver.resolve("button").unwrap_err().is_unresolved());
    assert!(resolver.resolve("BUTTON").unwrap_err().is_unresolved());
    assert!(resolver.resolve("Button").is_ok());
    // 缓存键不做归一化
    assert!(resolver.cache().contains("Button"));
    assert!(!resolver.cache().contains("button"));
}

/// 测试模块路径推导
#[test]
fn test_module_path_derivation() {
    assert_eq!(WidgetResolver::module_path_for("BoxLayout"), "uix.boxlayout");
    assert_eq!(WidgetResolver::module_path_for("TextInput"), "uix.textinput");
    assert_eq!(WidgetResolver::module_path_for(""), "uix.");
}

/// 测试缺少模块和缺少符号统一成同一种错误
#[test]
fn test_missing_module_and_symbol_collapse() {
    let library = WidgetLibrary::standard();
    assert!(library.module("uix.image").is_some());
    assert!(library.module("uix.asyncimage").is_none());

    let mut resolver = WidgetResolver::new(library);
    let no_module = resolver.resolve("AsyncImage").unwrap_err();
    let no_symbol = resolver.resolve("label").unwrap_err();
    assert!(no_module.is_unresolved());
    assert!(no_symbol.is_unresolved());
}

/// 测试注入的缓存优先于控件库
#[test]
fn test_injected_cache_hit_skips_lookup() {
    let mut cache = WidgetClassCache::new();
    cache.insert("Anything", &LABEL);
    let mut resolver = WidgetResolver::with_cache(WidgetLibrary::empty(), cache);
    assert!(std::ptr::eq(resolver.resolve("Anything").unwrap(), &LABEL));
    assert!(resolver.resolve("Label").is_err());
}

struct Panel {
    core: WidgetCore,
}

impl Widget for Panel {
    fn core(&self) -> &WidgetCore {
        &self.core
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

fn construct_panel(core: WidgetCore) -> Box<dyn Widget> {
    Box::new(Panel { core })
}

static PANEL: WidgetClass = WidgetClass {
    name: "Panel",
    module: "panel",
    properties: &[],
    events: &[],
    parent: None,
    construct: construct_panel,
};

/// 测试注册自定义控件类
#[test]
fn test_register_custom_class() {
    let mut library = WidgetLibrary::standard();
    let before = library.class_count();
    library.register(&PANEL);
    assert_eq!(library.class_count(), before + 1);
    assert!(library.module_paths().contains(&"uix.panel"));

    let mut resolver = WidgetResolver::new(library);
    let class = resolver.resolve("Panel").unwrap();
    assert!(std::ptr::eq(class, &PANEL));
    assert!(resolver.library().module("uix.panel").is_some());
}
