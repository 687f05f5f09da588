//! # Preference Storage / 偏好存储
//!
//! Durable storage for the single persisted setting, the preferred language,
//! kept under the key `preferredLanguage`.
//!
//! 唯一持久化设置（偏好语言）的持久存储，键名为 `preferredLanguage`。

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::core::locale::Locale;

/// Storage key of the preferred language.
pub const PREFERENCE_KEY: &str = "preferredLanguage";

const PREFERENCES_FILE: &str = "preferences.json";

/// Read/write access to the saved language preference.
/// 对已保存语言偏好的读写访问。
pub trait PreferenceStore {
    /// The stored value, unvalidated. `None` if nothing is stored or the store is unreadable.
    fn load_locale(&self) -> Option<String>;

    /// Persists `locale` as the preferred language.
    fn save_locale(&mut self, locale: Locale) -> Result<()>;
}

/// `<config dir>/tool-finder/preferences.json`, or `.tool-finder/preferences.json`
/// in the working directory when the platform has no config directory.
pub fn default_preferences_path() -> PathBuf {
    dirs::config_dir()
        .map(|dir| dir.join("tool-finder"))
        .unwrap_or_else(|| PathBuf::from(".tool-finder"))
        .join(PREFERENCES_FILE)
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct Preferences {
    #[serde(
        rename = "preferredLanguage",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    preferred_language: Option<String>,
}

/// Preferences kept in a small JSON file.
#[derive(Debug, Clone)]
pub struct JsonPreferenceStore {
    path: PathBuf,
}

impl JsonPreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Option<Preferences> {
        let content = fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str(&content) {
            Ok(preferences) => Some(preferences),
            Err(e) => {
                debug!(path = %self.path.display(), error = %e, "ignoring unreadable preferences file");
                None
            }
        }
    }
}

impl PreferenceStore for JsonPreferenceStore {
    fn load_locale(&self) -> Option<String> {
        self.read()?.preferred_language
    }

    fn save_locale(&mut self, locale: Locale) -> Result<()> {
        let mut preferences = self.read().unwrap_or_default();
        preferences.preferred_language = Some(locale.code().to_string());

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create preferences directory: {}", parent.display())
            })?;
        }
        let content = serde_json::to_string_pretty(&preferences)?;
        fs::write(&self.path, content)
            .with_context(|| format!("Failed to write preferences: {}", self.path.display()))?;

        info!(%locale, path = %self.path.display(), "saved language preference");
        Ok(())
    }
}

/// In-memory store, for tests and one-off runs that must not touch disk.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferenceStore {
    value: Option<String>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `value`, valid or not.
    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
        }
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn load_locale(&self) -> Option<String> {
        self.value.clone()
    }

    fn save_locale(&mut self, locale: Locale) -> Result<()> {
        self.value = Some(locale.code().to_string());
        Ok(())
    }
}
