//! # Filter Engine / 过滤引擎
//!
//! Display names are derived from tool identifiers on demand, and the filter
//! keeps every identifier whose raw form or display name contains the search term.
//!
//! 显示名称按需从工具标识符派生；过滤器保留原始形式或显示名称包含搜索词的每个标识符。
//!
//! Case folding uses Unicode lowercase mapping, so non-Latin scripts fold the
//! same way they do in `str::to_lowercase`.

/// Builds the human-readable name of a tool.
///
/// Takes the part before the first `.`, turns `-` and `_` into spaces and
/// uppercases the first character of every space-separated word.
///
/// # Examples / 示例
/// ```
/// use tool_finder::display_name;
/// assert_eq!(display_name("image-converter.html"), "Image Converter");
/// assert_eq!(display_name("pdf_merge_tool.html"), "Pdf Merge Tool");
/// ```
pub fn display_name(identifier: &str) -> String {
    let stem = identifier.split('.').next().unwrap_or_default();
    let spaced = stem.replace(['-', '_'], " ");

    spaced
        .split(' ')
        .map(capitalize_first)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Trims and case-folds raw search input.
pub fn normalize_term(raw_term: &str) -> String {
    raw_term.trim().to_lowercase()
}

/// Returns `true` when the tool matches an already normalized term.
pub fn matches(identifier: &str, term: &str) -> bool {
    identifier.to_lowercase().contains(term) || display_name(identifier).to_lowercase().contains(term)
}

/// Filters tools by search term, preserving input order.
///
/// An empty (or whitespace-only) term returns every tool. Duplicates are kept.
///
/// 按搜索词过滤工具，保持输入顺序。空搜索词返回全部工具，重复项保留。
pub fn filter<'a, S: AsRef<str>>(tools: &'a [S], raw_term: &str) -> Vec<&'a str> {
    let term = normalize_term(raw_term);
    let all = tools.iter().map(AsRef::as_ref);

    if term.is_empty() {
        return all.collect();
    }
    all.filter(|identifier| matches(identifier, &term)).collect()
}
