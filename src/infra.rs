//! # Infrastructure Module / 基础设施模块
//!
//! This module provides infrastructure services for Tool Finder,
//! including tool list loading, preference storage, i18n support and logging.
//!
//! 此模块为 Tool Finder 提供基础设施服务，
//! 包括工具列表加载、偏好存储、国际化支持和日志。

pub mod i18n;
pub mod loader;
pub mod logging;
pub mod prefs;

// Re-export i18n functions for easier access
pub use rust_i18n::t;
