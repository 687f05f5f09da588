//! # Page Command Module / 页面命令模块
//!
//! Renders the tool finder as a static HTML page through the widget, so the
//! page opens showing exactly what the interactive widget would and keeps
//! filtering in the browser.
//!
//! 通过组件将工具查找器渲染为静态 HTML 页面，页面打开时与交互式组件显示的内容完全一致，
//! 并可在浏览器中继续过滤。

use anyhow::{Context, Result};
use colored::*;
use std::path::Path;

use crate::cli::Session;
use crate::core::widget::Widget;
use crate::infra::loader::ToolSource;
use crate::infra::t;
use crate::reporting::HtmlSurface;

/// Executes the page command. A load failure is not fatal: the page is still
/// written, with the localized load error in the results area.
pub async fn execute(
    session: Session,
    source: &ToolSource,
    out: &Path,
    term: Option<&str>,
) -> Result<()> {
    let Session {
        config,
        preferences,
        lang_override,
        environment,
    } = session;

    let reveal_unit = config.reveal_unit();
    let mut widget = Widget::new(HtmlSurface::new(reveal_unit), preferences, reveal_unit);
    let locale = widget.boot(environment.as_deref(), lang_override);
    if let Some(term) = term {
        widget.on_input(term);
    }
    widget.load(source).await;

    let page = widget
        .surface()
        .page(widget.state())
        .context("Failed to render HTML page")?;
    tokio::fs::write(out, page)
        .await
        .with_context(|| format!("Failed to write HTML page: {}", out.display()))?;

    println!(
        "{}",
        t!("page_written", locale = locale.code(), path = out.display()).green()
    );
    Ok(())
}
