//! # View Model / 视图模型
//!
//! What a surface has to draw for the results area, independent of any UI
//! runtime: either a list of links or one of the localized empty states.
//!
//! 结果区域需要绘制的内容，与任何 UI 运行时无关：链接列表或本地化的空状态之一。

use std::time::Duration;

use crate::core::locale::Locale;
use crate::core::tools::display_name;
use crate::infra::i18n::{TranslationKey, no_results_message, translate};

/// Default stagger between two consecutive entries.
pub const DEFAULT_REVEAL_UNIT: Duration = Duration::from_millis(50);

/// One clickable entry in the results list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultEntry {
    /// The raw tool identifier, used verbatim as a relative link target.
    /// 原始工具标识符，作为相对链接目标原样使用。
    pub href: String,
    /// The derived display name.
    pub label: String,
    /// Cosmetic reveal delay, `index × unit`.
    pub reveal_delay: Duration,
}

/// Why the results area shows a message instead of entries.
/// 结果区域显示消息而不是条目的原因。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmptyState {
    /// A search term was given and nothing matched it.
    NoMatches { term: String },
    /// No term, and nothing is loaded at all.
    NoToolsAvailable,
    /// No term, tools are loaded, yet there is nothing to show.
    NothingToDisplay,
}

impl EmptyState {
    /// The localized message with the search term inserted as-is.
    pub fn message(&self, locale: Locale) -> String {
        self.message_with(locale, str::to_string)
    }

    /// The localized message with the search term passed through `encode`
    /// first, e.g. an HTML escaper.
    pub fn message_with(&self, locale: Locale, encode: impl FnOnce(&str) -> String) -> String {
        match self {
            EmptyState::NoMatches { term } => no_results_message(locale, &encode(term)),
            EmptyState::NoToolsAvailable => translate(locale, TranslationKey::NoToolsAvailable),
            EmptyState::NothingToDisplay => translate(locale, TranslationKey::NoToolsToDisplay),
        }
    }
}

/// Everything the results area can show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultsView {
    Entries(Vec<ResultEntry>),
    Empty(EmptyState),
    /// The tool list could not be loaded.
    LoadFailed,
}

impl ResultsView {
    pub fn entries(&self) -> &[ResultEntry] {
        match self {
            ResultsView::Entries(entries) => entries,
            _ => &[],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }
}

/// Projects filtered items into a view.
///
/// `term` is the normalized search term that produced `items`; `all_tools`
/// is the full loaded list and only decides which empty state applies.
///
/// 将过滤后的条目投影为视图。`term` 是产生 `items` 的规范化搜索词；
/// `all_tools` 是完整的已加载列表，仅用于决定适用哪种空状态。
pub fn build_view<S: AsRef<str>>(
    all_tools: &[S],
    items: &[&str],
    term: &str,
    reveal_unit: Duration,
) -> ResultsView {
    if items.is_empty() {
        let state = if !term.is_empty() {
            EmptyState::NoMatches {
                term: term.to_string(),
            }
        } else if all_tools.is_empty() {
            EmptyState::NoToolsAvailable
        } else {
            EmptyState::NothingToDisplay
        };
        return ResultsView::Empty(state);
    }

    let entries = items
        .iter()
        .zip(0u32..)
        .map(|(identifier, index)| ResultEntry {
            href: identifier.to_string(),
            label: display_name(identifier),
            reveal_delay: reveal_unit * index,
        })
        .collect();

    ResultsView::Entries(entries)
}
