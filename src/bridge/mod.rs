//! 动态控件解析与控件树合成

pub mod sanitize;
pub mod library;
pub mod resolver;
pub mod synthesizer;
pub mod fallback;
pub mod facade;

pub use sanitize::{sanitize, CALLBACK_PROP};
pub use library::{LookupMiss, Module, WidgetLibrary, LIBRARY_ROOT};
pub use resolver::{ResolvedClass, WidgetClassCache, WidgetResolver};
pub use synthesizer::TreeSynthesizer;
pub use fallback::FallbackBuilder;
pub use facade::{BuildStrategy, FallbackMount, SyncOutput, WidgetBridge};
