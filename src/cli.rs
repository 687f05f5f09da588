// src/cli.rs
use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::{env, path::PathBuf};
use tracing::warn;

use crate::core::config::{self, FinderConfig};
use crate::core::locale::{Locale, resolve_locale};
use crate::infra::i18n::environment_locale;
use crate::infra::loader::ToolSource;
use crate::infra::prefs::{JsonPreferenceStore, PreferenceStore};
use crate::infra::t;

pub mod commands;

/// Settings shared by every subcommand, gathered before the CLI is built.
/// 在构建 CLI 之前收集的、所有子命令共享的设置。
#[derive(Debug)]
pub struct Session {
    pub config: FinderConfig,
    pub preferences: JsonPreferenceStore,
    /// `--lang`, which applies to this run only.
    pub lang_override: Option<Locale>,
    /// The environment language, e.g. `"de-AT"`.
    pub environment: Option<String>,
}

impl Session {
    /// `--lang` if given, otherwise the saved preference, the environment, then English.
    pub fn locale(&self) -> Locale {
        self.lang_override.unwrap_or_else(|| {
            resolve_locale(
                self.preferences.load_locale().as_deref(),
                self.environment.as_deref(),
            )
        })
    }

    /// `--source` if given on the subcommand, otherwise the configured source.
    fn tool_source(&self, matches: &ArgMatches) -> Result<ToolSource> {
        match matches.get_one::<String>("source") {
            Some(source) => source
                .parse()
                .with_context(|| format!("Invalid tool source: {}", source)),
            None => self.config.tool_source(),
        }
    }
}

/// Global flags read before the localized CLI is built.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct GlobalFlags {
    pub config: Option<PathBuf>,
    pub lang: Option<String>,
}

/// Pre-parses `--config` and `--lang` with the same argument definitions as
/// the full CLI, so i18n and config are ready before it is built. Parse errors
/// are left for the full parse to report.
///
/// 使用与完整 CLI 相同的参数定义预解析 `--config` 和 `--lang`，
/// 以便在构建完整 CLI 之前准备好 i18n 和配置。解析错误留给完整解析报告。
pub fn pre_parse_globals(args: &[String]) -> GlobalFlags {
    let matches = build_cli(Locale::default())
        .ignore_errors(true)
        .disable_help_flag(true)
        .disable_version_flag(true)
        .disable_help_subcommand(true)
        .try_get_matches_from(args);

    match matches {
        Ok(matches) => GlobalFlags {
            config: matches.try_get_one::<PathBuf>("config").ok().flatten().cloned(),
            lang: matches.try_get_one::<String>("lang").ok().flatten().cloned(),
        },
        Err(_) => GlobalFlags::default(),
    }
}

fn source_arg(locale: &str) -> Arg {
    Arg::new("source")
        .short('s')
        .long("source")
        .help(t!("arg_source", locale = locale).to_string())
        .value_name("SOURCE")
        .action(ArgAction::Set)
}

fn build_cli(locale: Locale) -> Command {
    let locale = locale.code();

    Command::new("tool-finder")
        .version(env!("CARGO_PKG_VERSION"))
        .about(t!("cli_about", locale = locale).to_string())
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("lang")
                .long("lang")
                .help(t!("cli_lang", locale = locale).to_string())
                .value_name("LANGUAGE")
                .global(true)
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help(t!("cli_config", locale = locale).to_string())
                .value_name("CONFIG")
                .global(true)
                .value_parser(clap::value_parser!(PathBuf))
                .action(ArgAction::Set),
        )
        .subcommand(
            Command::new("search")
                .about(t!("cmd_search_about", locale = locale).to_string())
                .arg(source_arg(locale))
                .arg(
                    Arg::new("terms")
                        .help(t!("arg_terms", locale = locale).to_string())
                        .value_name("TERM")
                        .num_args(0..)
                        .action(ArgAction::Append),
                ),
        )
        .subcommand(
            Command::new("browse")
                .about(t!("cmd_browse_about", locale = locale).to_string())
                .arg(source_arg(locale)),
        )
        .subcommand(
            Command::new("page")
                .about(t!("cmd_page_about", locale = locale).to_string())
                .arg(source_arg(locale))
                .arg(
                    Arg::new("out")
                        .short('o')
                        .long("out")
                        .help(t!("arg_out", locale = locale).to_string())
                        .value_name("FILE")
                        .default_value("index.html")
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("term")
                        .short('t')
                        .long("term")
                        .help(t!("arg_page_term", locale = locale).to_string())
                        .value_name("TERM")
                        .action(ArgAction::Set),
                ),
        )
        .subcommand(
            Command::new("lang")
                .about(t!("cmd_lang_about", locale = locale).to_string())
                .arg(
                    Arg::new("code")
                        .help(t!("arg_code", locale = locale).to_string())
                        .value_name("CODE")
                        .action(ArgAction::Set),
                ),
        )
}

pub async fn run() -> Result<()> {
    run_with_args(env::args().collect()).await
}

pub async fn run_with_args(args: Vec<String>) -> Result<()> {
    // Config and language first, so help text is already localized.
    let globals = pre_parse_globals(&args);
    let config = config::load_config_or_default(globals.config.as_deref())?;

    let lang_override = globals.lang.map(|code| {
        code.parse().unwrap_or_else(|_| {
            warn!(code = %code, "unsupported --lang value, using {}", Locale::default());
            Locale::default()
        })
    });

    let session = Session {
        preferences: JsonPreferenceStore::new(config.preferences_path()),
        config,
        lang_override,
        environment: environment_locale(),
    };

    let matches = build_cli(session.locale()).get_matches_from(args);

    match matches.subcommand() {
        Some(("search", search_matches)) => {
            let source = session.tool_source(search_matches)?;
            let term = search_matches
                .get_many::<String>("terms")
                .map(|terms| terms.cloned().collect::<Vec<_>>().join(" "))
                .unwrap_or_default();
            commands::search::execute(&session, &source, &term).await?;
        }
        Some(("browse", browse_matches)) => {
            let source = session.tool_source(browse_matches)?;
            commands::browse::execute(session, &source).await?;
        }
        Some(("page", page_matches)) => {
            let source = session.tool_source(page_matches)?;
            let out = page_matches
                .get_one::<PathBuf>("out")
                .cloned()
                .unwrap_or_else(|| PathBuf::from("index.html"));
            let term = page_matches.get_one::<String>("term").cloned();
            commands::page::execute(session, &source, &out, term.as_deref()).await?;
        }
        Some(("lang", lang_matches)) => {
            let code = lang_matches.get_one::<String>("code").cloned();
            commands::lang::execute(session, code.as_deref())?;
        }
        _ => {
            // Clap has already printed help info.
        }
    }
    Ok(())
}
