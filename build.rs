//! # Build Script for Translation Keys / 翻译键构建脚本
//!
//! Translations themselves are embedded by `rust-i18n`. This script only reads the
//! `locales/*.toml` files and generates a `TranslationKey` enum, so every lookup in
//! the crate names a key that is known to exist.
//!
//! 翻译内容本身由 `rust-i18n` 嵌入。此脚本只读取 `locales/*.toml` 文件并生成
//! `TranslationKey` 枚举，使 crate 中的每次查找都引用一个确定存在的键。
//!
//! ## Generated Code / 生成的代码
//!
//! - `TranslationKey` enum with one variant per key in `en.toml`
//! - `TranslationKey::ALL` and `TranslationKey::as_str()`
//! - Build failure if any locale is missing a key of the base locale
//!
//! - 包含 `en.toml` 中每个键的 `TranslationKey` 枚举
//! - `TranslationKey::ALL` 与 `TranslationKey::as_str()`
//! - 若任何语言文件缺少基础语言中的键，则构建失败

use serde::Deserialize;
use std::collections::BTreeMap;
use std::env;
use std::fmt::Write;
use std::fs;
use std::path::{Path, PathBuf};

/// Flat key → template map, as stored in a locale file.
/// 语言文件中存储的扁平 键 → 模板 映射。
#[derive(Debug, Deserialize)]
struct Translations(BTreeMap<String, String>);

/// Converts a snake_case string to PascalCase.
/// 将 snake_case 字符串转换为 PascalCase。
///
/// # Examples / 示例
/// ```
/// assert_eq!(to_pascal_case("page_title"), "PageTitle");
/// assert_eq!(to_pascal_case("header_h1"), "HeaderH1");
/// ```
fn to_pascal_case(s: &str) -> String {
    let mut pascal = String::with_capacity(s.len());
    let mut capitalize = true;

    for c in s.chars() {
        if c == '_' {
            capitalize = true;
        } else if capitalize {
            pascal.push(c.to_ascii_uppercase());
            capitalize = false;
        } else {
            pascal.push(c);
        }
    }

    pascal
}

fn read_translations(path: &Path) -> Translations {
    let content = fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Failed to read {:?}: {}", path, e));
    toml::from_str(&content).unwrap_or_else(|e| panic!("Failed to parse {:?}: {}", path, e))
}

fn main() -> std::io::Result<()> {
    let out_dir = env::var("OUT_DIR").expect("OUT_DIR not set");
    let dest_path = Path::new(&out_dir).join("translation_keys.rs");
    let locales_dir = Path::new("locales");

    // 1. 收集所有 .toml 语言文件
    let lang_files: Vec<PathBuf> = fs::read_dir(locales_dir)?
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("toml"))
        .collect();

    // 2. 基础语言 (en.toml) 决定键集合
    let base = read_translations(&locales_dir.join("en.toml"));

    // 3. 校验每个语言文件都包含全部键
    for path in &lang_files {
        let translations = read_translations(path);
        let missing: Vec<&str> = base
            .0
            .keys()
            .filter(|key| !translations.0.contains_key(*key))
            .map(String::as_str)
            .collect();
        if !missing.is_empty() {
            panic!("{:?} is missing translation keys: {}", path, missing.join(", "));
        }
    }

    let pascal_case_keys: BTreeMap<_, _> = base
        .0
        .keys()
        .map(|key| (key.clone(), to_pascal_case(key)))
        .collect();

    // 4. 生成枚举与查找表
    let mut code = String::new();
    writeln!(
        &mut code,
        "/// Every key defined in `locales/en.toml`.\n#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]\npub enum TranslationKey {{"
    )
    .unwrap();
    for pascal_name in pascal_case_keys.values() {
        writeln!(&mut code, "    {},", pascal_name).unwrap();
    }
    writeln!(&mut code, "}}\n").unwrap();

    writeln!(&mut code, "impl TranslationKey {{").unwrap();
    writeln!(&mut code, "    pub const ALL: &'static [TranslationKey] = &[").unwrap();
    for pascal_name in pascal_case_keys.values() {
        writeln!(&mut code, "        TranslationKey::{},", pascal_name).unwrap();
    }
    writeln!(&mut code, "    ];\n").unwrap();

    writeln!(&mut code, "    /// The key as written in the locale files.").unwrap();
    writeln!(&mut code, "    pub fn as_str(self) -> &'static str {{").unwrap();
    writeln!(&mut code, "        match self {{").unwrap();
    for (key, pascal_name) in &pascal_case_keys {
        writeln!(
            &mut code,
            "            TranslationKey::{} => \"{}\",",
            pascal_name, key
        )
        .unwrap();
    }
    writeln!(&mut code, "        }}\n    }}\n}}").unwrap();

    fs::write(&dest_path, code)?;
    println!("cargo:rerun-if-changed=locales/");

    Ok(())
}
