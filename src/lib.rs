//! # Tool Finder Library / Tool Finder 库
//!
//! This library provides the core functionality of Tool Finder, a searchable
//! directory of tool pages. It loads a plain-text list of tool identifiers,
//! filters it by name and renders the matches in English, German or Spanish.
//!
//! 此库为 Tool Finder 提供核心功能，这是一个可搜索的工具页面目录。
//! 它加载纯文本的工具标识符列表，按名称过滤，并以英语、德语或西班牙语呈现匹配结果。
//!
//! ## Modules / 模块
//!
//! - `core` - Locales, the filter engine, view models and the widget controller
//! - `infra` - Tool list loading, preference storage, translations and logging
//! - `reporting` - Console and HTML renderers
//! - `cli` - Command-line interface and commands
//!
//! - `core` - 语言、过滤引擎、视图模型和组件控制器
//! - `infra` - 工具列表加载、偏好存储、翻译和日志
//! - `reporting` - 控制台和 HTML 渲染器
//! - `cli` - 命令行接口和命令

pub mod cli;
pub mod core;
pub mod infra;
pub mod reporting;

// Re-export commonly used items
pub use crate::core::locale::{Locale, resolve_locale};
pub use crate::core::tools::{display_name, filter};
pub use crate::core::widget::{Surface, Widget};

// Initialize i18n
rust_i18n::i18n!("locales", fallback = "en");
