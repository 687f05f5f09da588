//! # Application State / 应用状态
//!
//! The loaded tools, the active locale and the current search input, held in
//! one record that is passed around explicitly.
//!
//! 已加载的工具、活动语言和当前搜索输入，保存在一个显式传递的记录中。

use std::time::Duration;

use crate::core::locale::Locale;
use crate::core::tools::{filter, normalize_term};
use crate::core::view::{ResultsView, build_view};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    pub locale: Locale,
    /// Tool identifiers in source order. Empty until a load succeeds.
    pub tools: Vec<String>,
    /// Raw contents of the search field.
    pub search_term: String,
}

impl AppState {
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            ..Self::default()
        }
    }

    /// The trimmed, case-folded search term.
    pub fn normalized_term(&self) -> String {
        normalize_term(&self.search_term)
    }

    /// `filter(tools, search_term)`.
    pub fn visible_tools(&self) -> Vec<&str> {
        filter(&self.tools, &self.search_term)
    }

    /// The view for the current tools and search term.
    /// 当前工具和搜索词对应的视图。
    pub fn view(&self, reveal_unit: Duration) -> ResultsView {
        build_view(
            &self.tools,
            &self.visible_tools(),
            &self.normalized_term(),
            reveal_unit,
        )
    }
}
