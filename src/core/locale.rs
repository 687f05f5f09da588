//! # Locale Module / 语言模块
//!
//! The closed set of UI languages and the policy that picks the active one
//! at startup: saved preference first, then the environment language, then English.
//!
//! 封闭的界面语言集合，以及启动时选择活动语言的策略：
//! 首先是保存的偏好，其次是环境语言，最后是英语。

use std::fmt;
use std::str::FromStr;

use tracing::debug;

/// A supported UI language.
/// 受支持的界面语言。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    #[default]
    En,
    De,
    Es,
}

impl Locale {
    /// All supported locales, in the order they are offered to the user.
    pub const ALL: [Locale; 3] = [Locale::En, Locale::De, Locale::Es];

    /// The language code stored in preferences and used for lookups.
    /// 保存在偏好中并用于查找的语言代码。
    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::De => "de",
            Locale::Es => "es",
        }
    }

    /// The fixed label shown in the language switcher, written in the language itself.
    /// 语言切换器中显示的固定标签，以该语言本身书写。
    pub fn label(self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::De => "Deutsch",
            Locale::Es => "Español",
        }
    }

    /// Exact match against a supported code. `"de"` is accepted, `"DE"` and `"de-AT"` are not.
    pub fn from_code(code: &str) -> Option<Locale> {
        Locale::ALL.into_iter().find(|locale| locale.code() == code)
    }

    /// Maps any input onto a supported locale, falling back to the default.
    /// 将任意输入映射到受支持的语言，不支持时回退到默认语言。
    pub fn parse_or_default(code: &str) -> Locale {
        code.parse().unwrap_or_else(|_| {
            debug!(code, "unsupported locale, using default");
            Locale::default()
        })
    }

    /// Comma-separated list of supported codes, for messages.
    pub fn supported_codes() -> String {
        Locale::ALL
            .iter()
            .map(|locale| locale.code())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Error returned when a string names no supported locale.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported locale '{0}'")]
pub struct UnsupportedLocale(pub String);

impl FromStr for Locale {
    type Err = UnsupportedLocale;

    /// Lenient parsing for user input: surrounding whitespace and case are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locale::from_code(&s.trim().to_ascii_lowercase())
            .ok_or_else(|| UnsupportedLocale(s.to_string()))
    }
}

/// Extracts the primary language subtag: `"de"` from `"de-AT"` or `"de_AT.UTF-8"`.
/// 提取主语言子标签：从 `"de-AT"` 或 `"de_AT.UTF-8"` 中得到 `"de"`。
pub fn primary_subtag(tag: &str) -> String {
    tag.trim()
        .split(['-', '_', '.', '@'])
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase()
}

/// Determines the active locale at startup.
///
/// 1. A saved preference naming a supported locale wins.
/// 2. Otherwise the primary subtag of the environment language, if supported.
/// 3. Otherwise the default locale (`en`).
///
/// 启动时确定活动语言：先看保存的偏好，再看环境语言的主子标签，最后使用默认语言。
pub fn resolve_locale(persisted: Option<&str>, environment: Option<&str>) -> Locale {
    if let Some(locale) = persisted.and_then(Locale::from_code) {
        debug!(%locale, "using saved language preference");
        return locale;
    }
    if let Some(saved) = persisted {
        debug!(saved, "ignoring unsupported saved language preference");
    }

    if let Some(locale) = environment.and_then(|tag| Locale::from_code(&primary_subtag(tag))) {
        debug!(%locale, "using environment language");
        return locale;
    }

    Locale::default()
}
