//! # Reporting Module / 报告模块
//!
//! Renderers for the results view: a colored terminal surface and an HTML
//! page built with `maud` that keeps searching in the browser.
//!
//! 结果视图的渲染器：彩色终端界面和使用 `maud` 构建、可在浏览器中继续搜索的 HTML 页面。

pub mod console;
pub mod html;

pub use console::{ConsoleSurface, format_view};
pub use html::{HtmlSurface, escape_html, render_page, render_results};
