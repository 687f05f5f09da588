//! # Core Module / 核心模块
//!
//! Pure domain logic: supported locales and their resolution, the tool filter,
//! the render-ready view model, the application state and the controller that
//! wires them together.
//!
//! 纯领域逻辑：支持的语言及其解析、工具过滤、可渲染的视图模型、
//! 应用状态以及将它们连接起来的控制器。

pub mod config;
pub mod locale;
pub mod state;
pub mod tools;
pub mod view;
pub mod widget;

// Re-exports
pub use config::FinderConfig;
pub use state::AppState;
pub use view::{EmptyState, ResultEntry, ResultsView};
