//! # Lang Command Module / 语言命令模块
//!
//! Shows the active language or saves a new preferred one.
//!
//! 显示活动语言或保存新的偏好语言。

use anyhow::{Result, anyhow};
use colored::*;

use crate::cli::Session;
use crate::core::locale::Locale;
use crate::infra::prefs::PreferenceStore;
use crate::infra::t;

pub fn execute(mut session: Session, code: Option<&str>) -> Result<()> {
    let Some(code) = code else {
        let locale = session.locale();
        println!(
            "{}",
            t!(
                "active_language",
                locale = locale.code(),
                label = locale.label(),
                code = locale.code()
            )
        );
        return Ok(());
    };

    let locale: Locale = code.parse().map_err(|_| {
        anyhow!(t!(
            "unknown_language",
            locale = session.locale().code(),
            code = code,
            supported = Locale::supported_codes()
        )
        .to_string())
    })?;

    session.preferences.save_locale(locale)?;
    println!(
        "{}",
        t!(
            "language_saved",
            locale = locale.code(),
            label = locale.label(),
            code = locale.code()
        )
        .green()
    );
    Ok(())
}
