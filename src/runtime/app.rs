//! 桥接应用外壳
//!
//! 读取 bundle、启动时同步一次、外部触发时整棵重建，
//! 以及可选的一次性自动退出定时器。

use crate::bridge::{BuildStrategy, WidgetBridge};
use crate::config::{auto_exit_delay, AppConfig, ConfigError};
use crate::error::BridgeError;
use crate::js::ScriptRuntime;
use crate::ui::{WidgetSnapshot, WidgetTree};
use log::{info, warn};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use thiserror::Error;

/// 帧间隔
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

#[derive(Debug, Error)]
pub enum AppError {
    #[error("bundle not found: {0}")]
    BundleNotFound(PathBuf),
    #[error("failed to read bundle {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Bridge(#[from] BridgeError),
}

/// 一次性定时器
struct AutoExit {
    deadline: Instant,
}

/// 桥接应用
pub struct BridgeApp<R: ScriptRuntime> {
    bridge: WidgetBridge<R>,
    tree: WidgetTree,
    payload: String,
    auto_exit: Option<Duration>,
    timer: Option<AutoExit>,
    running: bool,
    last_strategy: Option<BuildStrategy>,
}

impl<R: ScriptRuntime> BridgeApp<R> {
    /// 按配置从磁盘读取 bundle
    pub fn load(config: &AppConfig, runtime: R) -> Result<Self, AppError> {
        let payload = read_bundle(&config.bundle_path)?;
        Ok(Self::from_payload(payload, runtime, config))
    }

    pub fn from_payload(payload: String, runtime: R, config: &AppConfig) -> Self {
        let bridge = WidgetBridge::new(runtime).with_fallback_mount(config.fallback_mount);
        Self {
            bridge,
            tree: WidgetTree::new(),
            payload,
            auto_exit: config.auto_exit_seconds.and_then(|seconds| {
                let delay = auto_exit_delay(seconds);
                if delay.is_none() {
                    warn!("ignoring invalid auto exit delay {}s", seconds);
                }
                delay
            }),
            timer: None,
            running: false,
            last_strategy: None,
        }
    }

    /// 启动：同步一次并安排自动退出
    pub fn start(&mut self) -> Result<(), AppError> {
        if let Some(delay) = self.auto_exit {
            match Instant::now().checked_add(delay) {
                Some(deadline) => {
                    info!("auto exit scheduled in {:.1}s", delay.as_secs_f64());
                    self.timer = Some(AutoExit { deadline });
                }
                None => warn!("auto exit delay {:?} is out of range, not scheduling", delay),
            }
        }
        self.resync()?;
        self.running = true;
        Ok(())
    }

    /// 整棵重建，替换旧的根控件
    pub fn resync(&mut self) -> Result<(), AppError> {
        let output = self.bridge.sync_detailed(&self.payload)?;
        self.tree.set_root(output.root);
        self.last_strategy = Some(output.strategy);
        Ok(())
    }

    /// 检查定时器，返回是否仍在运行
    pub fn update(&mut self) -> bool {
        self.update_at(Instant::now())
    }

    pub fn update_at(&mut self, now: Instant) -> bool {
        let fired = self
            .timer
            .as_ref()
            .map(|timer| now >= timer.deadline)
            .unwrap_or(false);
        if fired {
            info!("auto exit timer fired");
            self.timer = None;
            self.stop();
        }
        self.running
    }

    /// 没有自动退出定时器时直接返回
    pub fn run(&mut self) {
        if self.timer.is_none() {
            return;
        }
        while self.update() {
            std::thread::sleep(FRAME_INTERVAL);
        }
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn tree(&self) -> &WidgetTree {
        &self.tree
    }

    pub fn snapshot(&self) -> Option<WidgetSnapshot> {
        self.tree.snapshot()
    }

    pub fn last_strategy(&self) -> Option<&BuildStrategy> {
        self.last_strategy.as_ref()
    }

    pub fn bridge(&self) -> &WidgetBridge<R> {
        &self.bridge
    }
}

/// 读取 bundle 文件，不存在时单独报错
pub fn read_bundle(path: &Path) -> Result<String, AppError> {
    if !path.exists() {
        return Err(AppError::BundleNotFound(path.to_path_buf()));
    }
    std::fs::read_to_string(path).map_err(|source| AppError::Io {
        path: path.to_path_buf(),
        source,
    })
}
