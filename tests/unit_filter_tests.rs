//! # Filter Engine Unit Tests / 过滤引擎单元测试
//!
//! Tests for display name derivation and substring filtering.
//!
//! 显示名称派生和子串过滤的测试。

use tool_finder::core::tools::{matches, normalize_term};
use tool_finder::{display_name, filter};

#[cfg(test)]
mod display_name_tests {
    use super::*;

    #[test]
    fn test_hyphenated_name() {
        assert_eq!(display_name("image-converter.html"), "Image Converter");
    }

    #[test]
    fn test_underscored_name() {
        assert_eq!(display_name("pdf_merge_tool.html"), "Pdf Merge Tool");
    }

    #[test]
    fn test_only_first_segment_before_dot_is_used() {
        assert_eq!(display_name("archive.tar.gz"), "Archive");
        assert_eq!(display_name("no-extension"), "No Extension");
    }

    #[test]
    fn test_rest_of_word_is_left_unchanged() {
        assert_eq!(display_name("jsonToCsv.html"), "JsonToCsv");
        assert_eq!(display_name("QR-code.html"), "QR Code");
    }

    #[test]
    fn test_repeated_separators_keep_their_spacing() {
        assert_eq!(display_name("a--b.html"), "A  B");
    }

    #[test]
    fn test_non_latin_first_letter_is_uppercased() {
        assert_eq!(display_name("über-rechner.html"), "Über Rechner");
    }

    #[test]
    fn test_leading_dot_gives_empty_name() {
        assert_eq!(display_name(".hidden"), "");
    }
}

#[cfg(test)]
mod filter_tests {
    use super::*;

    const TOOLS: [&str; 4] = [
        "calculator.html",
        "image-converter.html",
        "pdf_merge_tool.html",
        "unit-converter.html",
    ];

    #[test]
    fn test_empty_term_returns_everything_in_order() {
        assert_eq!(filter(&TOOLS, ""), TOOLS.to_vec());
    }

    #[test]
    fn test_whitespace_term_is_treated_as_empty() {
        assert_eq!(filter(&TOOLS, "   "), TOOLS.to_vec());
    }

    #[test]
    fn test_matches_raw_identifier() {
        assert_eq!(filter(&TOOLS, "conv"), vec!["image-converter.html", "unit-converter.html"]);
        assert_eq!(filter(&TOOLS, ".html"), TOOLS.to_vec());
    }

    #[test]
    fn test_matches_display_name() {
        // "merge tool" only exists in the display name, never in the identifier.
        assert_eq!(filter(&TOOLS, "merge tool"), vec!["pdf_merge_tool.html"]);
        assert_eq!(filter(&TOOLS, "Image Converter"), vec!["image-converter.html"]);
    }

    #[test]
    fn test_term_is_trimmed_and_case_folded() {
        assert_eq!(filter(&TOOLS, "  CALC  "), vec!["calculator.html"]);
    }

    #[test]
    fn test_no_match_returns_empty() {
        assert!(filter(&TOOLS, "zzz").is_empty());
    }

    #[test]
    fn test_empty_list_always_yields_empty() {
        let empty: [&str; 0] = [];
        assert!(filter(&empty, "").is_empty());
        assert!(filter(&empty, "calc").is_empty());
    }

    #[test]
    fn test_duplicates_are_kept() {
        let tools = ["a-tool.html", "b.html", "a-tool.html"];
        assert_eq!(filter(&tools, "a tool"), vec!["a-tool.html", "a-tool.html"]);
    }

    #[test]
    fn test_works_with_owned_strings() {
        let tools: Vec<String> = TOOLS.iter().map(|s| s.to_string()).collect();
        assert_eq!(filter(&tools, "pdf"), vec!["pdf_merge_tool.html"]);
    }

    #[test]
    fn test_every_substring_of_identifier_or_name_matches() {
        for tool in TOOLS {
            for source in [tool.to_string(), display_name(tool)] {
                let chars: Vec<char> = source.chars().collect();
                for start in 0..chars.len() {
                    for end in start + 1..=chars.len() {
                        let needle: String = chars[start..end].iter().collect();
                        if needle.trim().is_empty() {
                            continue;
                        }
                        let result = filter(&TOOLS, &needle.to_uppercase());
                        assert!(
                            result.contains(&tool),
                            "{:?} should match {:?}",
                            needle,
                            tool
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_survivors_keep_relative_order() {
        for term in ["e", "o", "conv", "html", "t"] {
            let result = filter(&TOOLS, term);
            let positions: Vec<usize> = result
                .iter()
                .map(|r| TOOLS.iter().position(|t| t == r).unwrap())
                .collect();
            assert!(positions.windows(2).all(|w| w[0] < w[1]), "order broken for {:?}", term);
        }
    }

    #[test]
    fn test_normalize_and_matches_helpers() {
        assert_eq!(normalize_term("  Image CONV "), "image conv");
        assert!(matches("image-converter.html", "image conv"));
        assert!(!matches("calculator.html", "image"));
    }
}
