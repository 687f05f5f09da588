//! # HTML Rendering Module / HTML 渲染模块
//!
//! Builds the tool finder page with `maud`. Every translatable element carries
//! a `data-translate-key` (or `data-translate-placeholder-key`) attribute naming
//! its dictionary entry, and all user-controlled text is escaped. The page
//! embeds the tool list and the page dictionaries as JSON, and `assets/page.js`
//! wires the search field and the language switcher to them.
//!
//! 使用 `maud` 构建工具查找页面。每个可翻译元素都带有
//! `data-translate-key`（或 `data-translate-placeholder-key`）属性，指明其字典条目；
//! 所有用户可控的文本都会被转义。页面以 JSON 形式嵌入工具列表和页面字典，
//! 由 `assets/page.js` 将搜索框和语言切换器与之连接。

use maud::{DOCTYPE, Markup, PreEscaped, html};
use serde::Serialize;
use std::collections::BTreeMap;
use std::time::Duration;

use crate::core::locale::Locale;
use crate::core::state::AppState;
use crate::core::view::ResultsView;
use crate::core::widget::Surface;
use crate::infra::i18n::{TranslationKey, translate};
use crate::infra::prefs::PREFERENCE_KEY;

/// Embedded CSS styles for the page / 页面的嵌入式 CSS 样式
const PAGE_STYLE: &str = include_str!("assets/page.css");

/// Embedded JavaScript for search and language switching / 用于搜索和语言切换的嵌入式 JavaScript
const PAGE_SCRIPT: &str = include_str!("assets/page.js");

/// Link target of the "main page" button.
const MAIN_PAGE_HREF: &str = "../";

/// Dictionary entries the page script needs.
const PAGE_KEYS: &[TranslationKey] = &[
    TranslationKey::PageTitle,
    TranslationKey::HeaderH1,
    TranslationKey::HeaderP,
    TranslationKey::SearchInputPlaceholder,
    TranslationKey::MainPageButton,
    TranslationKey::FooterText,
    TranslationKey::LanguageLabel,
    TranslationKey::NoResultsFound,
    TranslationKey::ErrorLoading,
    TranslationKey::NoToolsAvailable,
    TranslationKey::NoToolsToDisplay,
];

/// Escapes text for insertion into HTML, through maud's own escaper.
/// 通过 maud 自带的转义器转义要插入 HTML 的文本。
pub fn escape_html(input: &str) -> String {
    html! { (input) }.into_string()
}

/// State handed to `page.js`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PageData<'a> {
    locale: &'static str,
    default_locale: &'static str,
    storage_key: &'static str,
    reveal_delay_ms: u64,
    tools: &'a [String],
    translations: BTreeMap<&'static str, BTreeMap<&'static str, String>>,
}

impl<'a> PageData<'a> {
    fn new(state: &'a AppState, reveal_unit: Duration) -> Self {
        let translations = Locale::ALL
            .iter()
            .map(|&locale| {
                let dictionary: BTreeMap<_, _> = PAGE_KEYS
                    .iter()
                    .map(|&key| (key.as_str(), translate(locale, key)))
                    .collect();
                (locale.code(), dictionary)
            })
            .collect();

        Self {
            locale: state.locale.code(),
            default_locale: Locale::default().code(),
            storage_key: PREFERENCE_KEY,
            reveal_delay_ms: u64::try_from(reveal_unit.as_millis()).unwrap_or(u64::MAX),
            tools: &state.tools,
            translations,
        }
    }

    /// JSON that is safe inside a `<script>` element.
    fn to_script_json(&self) -> serde_json::Result<String> {
        Ok(serde_json::to_string(self)?.replace("</", "<\\/"))
    }
}

/// Renders the contents of the results container.
///
/// Entries become `<a href="{identifier}">{display name}</a>` links with a
/// staggered `animation-delay`. Empty states are built from the dictionary
/// template with the search term HTML-escaped before insertion.
///
/// 渲染结果容器的内容。条目成为带有错开 `animation-delay` 的链接。
/// 空状态由字典模板构建，搜索词在插入前经过 HTML 转义。
pub fn render_results(view: &ResultsView, locale: Locale) -> Markup {
    match view {
        ResultsView::Entries(entries) => html! {
            @for entry in entries {
                div.result-item-wrapper style=(format!("animation-delay: {}ms", entry.reveal_delay.as_millis())) {
                    a.result-item href=(entry.href) { (entry.label) }
                }
            }
        },
        ResultsView::Empty(state) => {
            let message = state.message_with(locale, escape_html);
            html! {
                div.no-results { (PreEscaped(message)) }
            }
        }
        ResultsView::LoadFailed => html! {
            p.no-results { (translate(locale, TranslationKey::ErrorLoading)) }
        },
    }
}

/// Renders the full page around an already rendered results fragment.
/// Fails only if the embedded page data cannot be serialized.
///
/// 围绕已渲染的结果片段渲染完整页面。仅当嵌入的页面数据无法序列化时失败。
pub fn render_page(
    state: &AppState,
    results: Markup,
    reveal_unit: Duration,
) -> serde_json::Result<Markup> {
    let locale = state.locale;
    let data = PageData::new(state, reveal_unit).to_script_json()?;

    Ok(html! {
        (DOCTYPE)
        html lang=(locale.code()) {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (translate(locale, TranslationKey::PageTitle)) }
                style { (PreEscaped(PAGE_STYLE)) }
            }
            body {
                header {
                    h1 data-translate-key=(TranslationKey::HeaderH1.as_str()) {
                        (translate(locale, TranslationKey::HeaderH1))
                    }
                    p data-translate-key=(TranslationKey::HeaderP.as_str()) {
                        (translate(locale, TranslationKey::HeaderP))
                    }
                    label for="lang-switcher" data-translate-key=(TranslationKey::LanguageLabel.as_str()) {
                        (translate(locale, TranslationKey::LanguageLabel))
                    }
                    select #lang-switcher {
                        @for lang in Locale::ALL {
                            option value=(lang.code()) selected[lang == locale] { (lang.label()) }
                        }
                    }
                }
                main {
                    input #searchInput type="search" autocomplete="off"
                        data-translate-placeholder-key=(TranslationKey::SearchInputPlaceholder.as_str())
                        placeholder=(translate(locale, TranslationKey::SearchInputPlaceholder))
                        value=(state.search_term);
                    div #results { (results) }
                    a.main-page-button href=(MAIN_PAGE_HREF) data-translate-key=(TranslationKey::MainPageButton.as_str()) {
                        (translate(locale, TranslationKey::MainPageButton))
                    }
                }
                footer {
                    p data-translate-key=(TranslationKey::FooterText.as_str()) {
                        (translate(locale, TranslationKey::FooterText))
                    }
                }
                script #tool-finder-data type="application/json" { (PreEscaped(data)) }
                script { (PreEscaped(PAGE_SCRIPT)) }
            }
        }
    })
}

/// A surface that keeps the last rendered results fragment, so a complete page
/// can be produced at any point.
///
/// 保存最近一次渲染结果片段的界面，以便随时生成完整页面。
#[derive(Debug, Clone, Default)]
pub struct HtmlSurface {
    reveal_unit: Duration,
    results: String,
}

impl HtmlSurface {
    /// `reveal_unit` is the stagger the page script uses when it re-renders.
    pub fn new(reveal_unit: Duration) -> Self {
        Self {
            reveal_unit,
            results: String::new(),
        }
    }

    /// The complete page for `state` with the last rendered results.
    pub fn page(&self, state: &AppState) -> serde_json::Result<String> {
        let page = render_page(state, PreEscaped(self.results.clone()), self.reveal_unit)?;
        Ok(page.into_string())
    }
}

impl Surface for HtmlSurface {
    // Static text is translated when the page is assembled.
    fn apply_translations(&mut self, _locale: Locale) {}

    fn render(&mut self, view: &ResultsView, locale: Locale) {
        self.results = render_results(view, locale).into_string();
    }
}
