//! # Configuration / 配置
//!
//! Optional `ToolFinder.toml` settings. Every field has a default, so an empty
//! or missing default file is valid.
//!
//! 可选的 `ToolFinder.toml` 设置。每个字段都有默认值，因此空文件或缺失的默认文件都是有效的。

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::infra::loader::{DEFAULT_SOURCE, ToolSource};
use crate::infra::prefs::default_preferences_path;

/// File looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "ToolFinder.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct FinderConfig {
    /// Where the tool list comes from: a file path or an http(s) URL.
    /// 工具列表的来源：文件路径或 http(s) URL。
    pub source: String,
    /// Where the preferred language is stored. Defaults to the user config directory.
    /// 保存偏好语言的位置。默认为用户配置目录。
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferences_path: Option<PathBuf>,
    /// Stagger between result entries, in milliseconds.
    pub reveal_delay_ms: u64,
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            source: DEFAULT_SOURCE.to_string(),
            preferences_path: None,
            reveal_delay_ms: 50,
        }
    }
}

impl FinderConfig {
    pub fn reveal_unit(&self) -> Duration {
        Duration::from_millis(self.reveal_delay_ms)
    }

    /// The configured source, parsed.
    pub fn tool_source(&self) -> Result<ToolSource> {
        self.source
            .parse()
            .with_context(|| format!("Invalid tool source: {}", self.source))
    }

    /// The configured preferences file, or the platform default.
    pub fn preferences_path(&self) -> PathBuf {
        self.preferences_path
            .clone()
            .unwrap_or_else(default_preferences_path)
    }
}

/// Loads and parses a configuration file.
pub fn load_config(path: &Path) -> Result<FinderConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Loads the explicit config file, or the default one if present, or defaults.
/// An explicit path that does not exist is an error; a missing default file is not.
///
/// 加载显式指定的配置文件；否则若默认文件存在则加载它；否则使用默认值。
pub fn load_config_or_default(explicit: Option<&Path>) -> Result<FinderConfig> {
    match explicit {
        Some(path) => load_config(path),
        None => {
            let default_path = Path::new(DEFAULT_CONFIG_FILE);
            if default_path.is_file() {
                load_config(default_path)
            } else {
                Ok(FinderConfig::default())
            }
        }
    }
}
