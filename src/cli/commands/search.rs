//! # Search Command Module / 搜索命令模块
//!
//! Loads the tool list, filters it once and prints the result.
//!
//! 加载工具列表，过滤一次并打印结果。

use anyhow::{Context, Result};
use colored::*;
use tracing::error;

use crate::cli::Session;
use crate::core::state::AppState;
use crate::core::widget::Surface;
use crate::infra::i18n::{TranslationKey, translate};
use crate::infra::loader::{ToolSource, load_tools};
use crate::infra::t;
use crate::reporting::ConsoleSurface;

/// Executes the search command.
///
/// A load failure prints the localized error message and is returned as an
/// error, so scripts see a non-zero exit code.
pub async fn execute(session: &Session, source: &ToolSource, term: &str) -> Result<()> {
    let locale = session.locale();

    let tools = match load_tools(source).await {
        Ok(tools) => tools,
        Err(e) => {
            error!(error = %e, %source, "Error fetching or parsing the tool list");
            println!("{}", translate(locale, TranslationKey::ErrorLoading).red());
            return Err(e).with_context(|| format!("Failed to load tool list from {}", source));
        }
    };

    let state = AppState {
        locale,
        tools,
        search_term: term.to_string(),
    };
    let view = state.view(session.config.reveal_unit());
    ConsoleSurface::new(false).render(&view, locale);

    if !view.is_empty() && !state.normalized_term().is_empty() {
        println!(
            "\n{}",
            t!(
                "results_count",
                locale = locale.code(),
                count = view.entries().len(),
                total = state.tools.len()
            )
            .dimmed()
        );
    }

    Ok(())
}
