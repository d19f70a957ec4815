//! 桥接门面
//!
//! 一次 sync：mount → 解析 → 动态合成；动态合成遇到未解析的控件类型时，
//! 整棵树改用降级构建器重建。其它错误原样返回，不做降级。

use crate::error::BridgeError;
use crate::js::ScriptRuntime;
use crate::parser::WidgetNode;
use crate::ui::{count_widgets, Widget};
use super::fallback::FallbackBuilder;
use super::library::WidgetLibrary;
use super::resolver::WidgetResolver;
use super::synthesizer::TreeSynthesizer;
use log::{info, warn};
use serde::{Deserialize, Serialize};

/// 降级时控件树的来源
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FallbackMount {
    /// 重新 mount 并解析一次
    #[default]
    Remount,
    /// 复用第一次解析出的树
    ReuseParsed,
}

/// 本次 sync 用的构建方式
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildStrategy {
    Dynamic,
    Fallback { unresolved: String },
}

/// sync 结果
pub struct SyncOutput {
    pub root: Box<dyn Widget>,
    pub strategy: BuildStrategy,
}

/// 桥接门面，持有脚本运行时和一对解析器/合成器
pub struct WidgetBridge<R: ScriptRuntime> {
    runtime: R,
    synthesizer: TreeSynthesizer,
    fallback: FallbackBuilder,
    fallback_mount: FallbackMount,
}

impl<R: ScriptRuntime> WidgetBridge<R> {
    pub fn new(runtime: R) -> Self {
        Self::with_library(runtime, WidgetLibrary::standard())
    }

    pub fn with_library(runtime: R, library: WidgetLibrary) -> Self {
        Self {
            runtime,
            synthesizer: TreeSynthesizer::new(WidgetResolver::new(library)),
            fallback: FallbackBuilder::new(),
            fallback_mount: FallbackMount::default(),
        }
    }

    pub fn with_fallback_mount(mut self, mode: FallbackMount) -> Self {
        self.fallback_mount = mode;
        self
    }

    /// 同步一次，返回新的根控件
    pub fn sync(&mut self, payload: &str) -> Result<Box<dyn Widget>, BridgeError> {
        self.sync_detailed(payload).map(|output| output.root)
    }

    pub fn sync_detailed(&mut self, payload: &str) -> Result<SyncOutput, BridgeError> {
        info!("sync started ({} bytes payload)", payload.len());
        let tree = self.mount_and_parse(payload)?;

        match self.synthesizer.build(&tree) {
            Ok(root) => {
                info!("sync finished: dynamic build, {} widgets", count_widgets(root.as_ref()));
                Ok(SyncOutput {
                    root,
                    strategy: BuildStrategy::Dynamic,
                })
            }
            Err(BridgeError::UnresolvedWidget { name, path }) => {
                warn!("widget {} not found at {}, falling back to static build", name, path);
                let tree = match self.fallback_mount {
                    FallbackMount::Remount => self.mount_and_parse(payload)?,
                    FallbackMount::ReuseParsed => tree,
                };
                let root = self.fallback.build(&tree)?;
                info!("sync finished: fallback build, {} widgets", count_widgets(root.as_ref()));
                Ok(SyncOutput {
                    root,
                    strategy: BuildStrategy::Fallback { unresolved: name },
                })
            }
            Err(err) => Err(err),
        }
    }

    fn mount_and_parse(&mut self, payload: &str) -> Result<WidgetNode, BridgeError> {
        let text = self.runtime.mount(payload)?;
        WidgetNode::from_json(&text)
    }

    pub fn resolver(&self) -> &WidgetResolver {
        self.synthesizer.resolver()
    }

    pub fn runtime(&self) -> &R {
        &self.runtime
    }

    pub fn runtime_mut(&mut self) -> &mut R {
        &mut self.runtime
    }
}
