//! # Console Surface / 控制台界面
//!
//! Renders the widget to the terminal with `colored`: a localized header when
//! translations are applied, then one numbered line per result.
//!
//! 使用 `colored` 将组件渲染到终端：应用翻译时显示本地化标题，然后每个结果一行编号输出。

use colored::*;

use crate::core::locale::Locale;
use crate::core::view::{ResultEntry, ResultsView};
use crate::core::widget::Surface;
use crate::infra::i18n::{TranslationKey, translate};

/// Formats a single result entry as `  N. Label -> href`.
fn entry_line(index: usize, entry: &ResultEntry) -> String {
    format!("{:>4}. {} -> {}", index + 1, entry.label, entry.href)
}

/// Formats a view as plain text lines, without colors.
/// 将视图格式化为不带颜色的纯文本行。
///
/// # Output Format / 输出格式
/// ```text
///    1. Calculator -> calculator.html
///    2. Image Converter -> image-converter.html
/// ```
pub fn format_view(view: &ResultsView, locale: Locale) -> Vec<String> {
    match view {
        ResultsView::Entries(entries) => entries
            .iter()
            .enumerate()
            .map(|(i, entry)| entry_line(i, entry))
            .collect(),
        ResultsView::Empty(state) => vec![state.message(locale)],
        ResultsView::LoadFailed => vec![translate(locale, TranslationKey::ErrorLoading)],
    }
}

/// Prints the widget to stdout.
#[derive(Debug, Clone, Default)]
pub struct ConsoleSurface {
    show_header: bool,
}

impl ConsoleSurface {
    /// `show_header` controls whether the localized title is printed each time
    /// translations are applied.
    pub fn new(show_header: bool) -> Self {
        Self { show_header }
    }
}

impl Surface for ConsoleSurface {
    fn apply_translations(&mut self, locale: Locale) {
        if !self.show_header {
            return;
        }
        println!("\n{}", translate(locale, TranslationKey::HeaderH1).bold());
        println!("{}", translate(locale, TranslationKey::HeaderP).dimmed());
    }

    fn render(&mut self, view: &ResultsView, locale: Locale) {
        match view {
            ResultsView::Entries(entries) => {
                for (i, entry) in entries.iter().enumerate() {
                    println!(
                        "{:>4}. {} {} {}",
                        i + 1,
                        entry.label.cyan().bold(),
                        "->".dimmed(),
                        entry.href
                    );
                }
            }
            ResultsView::Empty(state) => println!("{}", state.message(locale).yellow()),
            ResultsView::LoadFailed => {
                println!("{}", translate(locale, TranslationKey::ErrorLoading).red())
            }
        }
    }
}
