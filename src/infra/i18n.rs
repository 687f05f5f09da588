//! # Translation Table / 翻译表
//!
//! The dictionaries are the `locales/*.toml` files, embedded at compile time by
//! `rust-i18n`. Lookups go through [`TranslationKey`], which `build.rs`
//! generates from `locales/en.toml`.
//!
//! 字典即 `locales/*.toml` 文件，由 `rust-i18n` 在编译时嵌入。
//! 查找通过 `build.rs` 从 `locales/en.toml` 生成的 [`TranslationKey`] 进行。

use crate::core::locale::Locale;
use crate::infra::t;

include!(concat!(env!("OUT_DIR"), "/translation_keys.rs"));

/// Looks up a static UI string.
/// 查找静态界面字符串。
pub fn translate(locale: Locale, key: TranslationKey) -> String {
    t!(key.as_str(), locale = locale.code()).into_owned()
}

/// The "no results for {term}" message. `term` is inserted unchanged, so
/// callers rendering markup must escape it first.
pub fn no_results_message(locale: Locale, term: &str) -> String {
    t!("no_results_found", locale = locale.code(), search_term = term).into_owned()
}

/// The language of the user's environment, e.g. `"de-AT"`.
/// 用户环境的语言，例如 `"de-AT"`。
pub fn environment_locale() -> Option<String> {
    sys_locale::get_locale()
}
