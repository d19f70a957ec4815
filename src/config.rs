//! 应用配置
//!
//! 可选的 JSON 配置文件（字段 camelCase，和 app.json 一样），
//! 再叠加环境变量 `APP_AUTO_EXIT_SECONDS`。

use crate::bridge::FallbackMount;
use crate::js::RuntimeOptions;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// 自动退出延迟（秒）
pub const AUTO_EXIT_ENV: &str = "APP_AUTO_EXIT_SECONDS";

/// 配置文件里的自动退出字段
pub const AUTO_EXIT_FIELD: &str = "autoExitSeconds";

/// 秒数转成延迟；负数、NaN、无穷大以及超出 `Duration` 范围的值都返回 None
pub fn auto_exit_delay(seconds: f64) -> Option<Duration> {
    Duration::try_from_secs_f64(seconds).ok()
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("{name} must be a non-negative number of seconds within range, got '{value}'")]
    InvalidAutoExit { name: &'static str, value: String },
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    #[serde(default = "default_bundle_path")]
    pub bundle_path: PathBuf,
    #[serde(default)]
    pub auto_exit_seconds: Option<f64>,
    #[serde(default)]
    pub fallback_mount: FallbackMount,
    #[serde(default)]
    pub js_memory_limit: Option<usize>,
    #[serde(default = "default_timer_rounds")]
    pub max_timer_rounds: u32,
}

fn default_bundle_path() -> PathBuf {
    PathBuf::from("ui/dist/app.bundle.js")
}

fn default_timer_rounds() -> u32 {
    64
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bundle_path: default_bundle_path(),
            auto_exit_seconds: None,
            fallback_mount: FallbackMount::default(),
            js_memory_limit: None,
            max_timer_rounds: default_timer_rounds(),
        }
    }
}

impl AppConfig {
    /// 从 JSON 文件读取并校验
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// 和环境变量、命令行用同一条规则
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(seconds) = self.auto_exit_seconds {
            check_auto_exit(AUTO_EXIT_FIELD, seconds, &seconds.to_string())?;
        }
        Ok(())
    }

    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// 叠加进程环境变量
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_auto_exit(std::env::var(AUTO_EXIT_ENV).ok().as_deref())
    }

    /// 空字符串视为未设置
    pub fn apply_auto_exit(&mut self, value: Option<&str>) -> Result<(), ConfigError> {
        let Some(raw) = value.map(str::trim).filter(|v| !v.is_empty()) else {
            return Ok(());
        };
        let seconds: f64 = raw.parse().map_err(|_| ConfigError::InvalidAutoExit {
            name: AUTO_EXIT_ENV,
            value: raw.to_string(),
        })?;
        check_auto_exit(AUTO_EXIT_ENV, seconds, raw)?;
        self.auto_exit_seconds = Some(seconds);
        Ok(())
    }

    /// 命令行覆盖，`source` 是报错时显示的参数名
    pub fn set_auto_exit(&mut self, source: &'static str, seconds: f64) -> Result<(), ConfigError> {
        check_auto_exit(source, seconds, &seconds.to_string())?;
        self.auto_exit_seconds = Some(seconds);
        Ok(())
    }

    pub fn runtime_options(&self) -> RuntimeOptions {
        RuntimeOptions {
            memory_limit: self.js_memory_limit,
            max_timer_rounds: self.max_timer_rounds,
        }
    }
}

fn check_auto_exit(name: &'static str, seconds: f64, raw: &str) -> Result<Duration, ConfigError> {
    auto_exit_delay(seconds).ok_or_else(|| ConfigError::InvalidAutoExit {
        name,
        value: raw.to_string(),
    })
}
