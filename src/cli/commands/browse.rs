//! # Browse Command Module / 浏览命令模块
//!
//! The interactive widget in the terminal. Every line typed at the prompt is a
//! new search term; `:lang` opens the language switcher and `:quit` leaves.
//!
//! 终端中的交互式组件。在提示符处输入的每一行都是新的搜索词；
//! `:lang` 打开语言切换器，`:quit` 退出。

use anyhow::Result;
use colored::*;
use dialoguer::{Input, Select, theme::ColorfulTheme};

use crate::cli::Session;
use crate::core::locale::Locale;
use crate::core::widget::Widget;
use crate::infra::i18n::{TranslationKey, translate};
use crate::infra::loader::ToolSource;
use crate::infra::t;
use crate::reporting::ConsoleSurface;

const LANG_COMMAND: &str = ":lang";
const QUIT_COMMANDS: [&str; 2] = [":quit", ":q"];

/// A line typed at the browse prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseInput {
    Search(String),
    SwitchLanguage,
    Quit,
}

impl BrowseInput {
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        if trimmed == LANG_COMMAND {
            BrowseInput::SwitchLanguage
        } else if QUIT_COMMANDS.contains(&trimmed) {
            BrowseInput::Quit
        } else {
            BrowseInput::Search(line.to_string())
        }
    }
}

pub async fn execute(session: Session, source: &ToolSource) -> Result<()> {
    let Session {
        config,
        preferences,
        lang_override,
        environment,
    } = session;
    let theme = ColorfulTheme::default();

    let mut widget = Widget::new(ConsoleSurface::new(true), preferences, config.reveal_unit());
    widget
        .start(source, environment.as_deref(), lang_override)
        .await;

    loop {
        let locale = widget.state().locale;
        println!("\n{}", translate(locale, TranslationKey::BrowseHint).dimmed());

        let line: String = Input::with_theme(&theme)
            .with_prompt(translate(locale, TranslationKey::BrowsePrompt))
            .with_initial_text(widget.state().search_term.clone())
            .allow_empty(true)
            .interact_text()?;

        match BrowseInput::parse(&line) {
            BrowseInput::Quit => break,
            BrowseInput::SwitchLanguage => {
                let labels: Vec<&str> = Locale::ALL.iter().map(|l| l.label()).collect();
                let current = Locale::ALL.iter().position(|l| *l == locale).unwrap_or(0);
                let selection = Select::with_theme(&theme)
                    .with_prompt(translate(locale, TranslationKey::LangSelectPrompt))
                    .items(&labels)
                    .default(current)
                    .interact()?;

                let selected = Locale::ALL[selection];
                if let Err(e) = widget.on_locale_selected(selected) {
                    println!(
                        "{}",
                        t!(
                            "language_save_failed",
                            locale = selected.code(),
                            error = format!("{:#}", e)
                        )
                        .yellow()
                    );
                }
            }
            BrowseInput::Search(term) => widget.on_input(&term),
        }
    }

    Ok(())
}
