//! # Widget Controller / 组件控制器
//!
//! Wires startup, search input and language selection to the filter engine and
//! a rendering [`Surface`]. All state lives in one [`AppState`] owned by the
//! widget, and every change re-renders `filter(tools, search_term)`.
//!
//! 将启动、搜索输入和语言选择连接到过滤引擎和渲染 [`Surface`]。
//! 所有状态都保存在组件拥有的一个 [`AppState`] 中，每次变化都会重新渲染
//! `filter(tools, search_term)`。

use anyhow::Result;
use std::time::Duration;
use tracing::{error, warn};

use crate::core::locale::{Locale, resolve_locale};
use crate::core::state::AppState;
use crate::core::view::ResultsView;
use crate::infra::loader::{LoadError, ToolSource, load_tools};
use crate::infra::prefs::PreferenceStore;

/// Something that can display the widget: a terminal, an HTML document, a test recorder.
/// 可以显示组件的东西：终端、HTML 文档或测试记录器。
pub trait Surface {
    /// Replaces all static UI text with the strings of `locale`.
    fn apply_translations(&mut self, locale: Locale);

    /// Replaces the results area with `view`.
    fn render(&mut self, view: &ResultsView, locale: Locale);
}

pub struct Widget<S, P> {
    state: AppState,
    surface: S,
    preferences: P,
    reveal_unit: Duration,
}

impl<S: Surface, P: PreferenceStore> Widget<S, P> {
    pub fn new(surface: S, preferences: P, reveal_unit: Duration) -> Self {
        Self {
            state: AppState::default(),
            surface,
            preferences,
            reveal_unit,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn preferences(&self) -> &P {
        &self.preferences
    }

    /// Resolves the initial locale from the saved preference and `environment`
    /// and applies it. `override_locale` wins over both without being saved.
    ///
    /// 根据保存的偏好和 `environment` 解析初始语言并应用。
    /// `override_locale` 优先于两者，但不会被保存。
    pub fn boot(&mut self, environment: Option<&str>, override_locale: Option<Locale>) -> Locale {
        let locale = override_locale.unwrap_or_else(|| {
            resolve_locale(self.preferences.load_locale().as_deref(), environment)
        });
        self.apply_locale(locale);
        locale
    }

    /// Full startup: boot, then load the tool list and render it.
    pub async fn start(
        &mut self,
        source: &ToolSource,
        environment: Option<&str>,
        override_locale: Option<Locale>,
    ) -> Locale {
        let locale = self.boot(environment, override_locale);
        self.load(source).await;
        locale
    }

    /// Loads the tool list once and renders the outcome.
    pub async fn load(&mut self, source: &ToolSource) {
        let outcome = load_tools(source).await;
        self.on_load_complete(outcome);
    }

    /// Stores the loaded tools and renders them with the current term. On
    /// failure the list stays empty and the load error message is shown.
    pub fn on_load_complete(&mut self, outcome: Result<Vec<String>, LoadError>) {
        match outcome {
            Ok(tools) => {
                self.state.tools = tools;
                self.rerender();
            }
            Err(e) => {
                error!(error = %e, "Error fetching or parsing the tool list");
                self.state.tools.clear();
                self.surface.render(&ResultsView::LoadFailed, self.state.locale);
            }
        }
    }

    /// Search field changed.
    pub fn on_input(&mut self, raw_term: &str) {
        self.state.search_term = raw_term.to_string();
        self.rerender();
    }

    /// Sets the active locale, re-applies translations and re-renders.
    pub fn apply_locale(&mut self, locale: Locale) {
        self.state.locale = locale;
        self.surface.apply_translations(locale);
        self.rerender();
    }

    /// Like [`apply_locale`](Self::apply_locale) for an untrusted code;
    /// unsupported codes fall back to the default locale.
    pub fn apply_locale_code(&mut self, code: &str) -> Locale {
        let locale = Locale::parse_or_default(code);
        self.apply_locale(locale);
        locale
    }

    /// The user picked a language: persist it, then apply it. The locale is
    /// applied even if saving fails; the save error is returned afterwards.
    ///
    /// 用户选择了语言：先持久化，再应用。即使保存失败也会应用语言，之后返回保存错误。
    pub fn on_locale_selected(&mut self, locale: Locale) -> Result<()> {
        let saved = self.preferences.save_locale(locale);
        if let Err(e) = &saved {
            warn!(error = %e, "could not save language preference");
        }
        self.apply_locale(locale);
        saved
    }

    /// The view matching the current state.
    pub fn current_view(&self) -> ResultsView {
        self.state.view(self.reveal_unit)
    }

    fn rerender(&mut self) {
        let view = self.current_view();
        self.surface.render(&view, self.state.locale);
    }
}
