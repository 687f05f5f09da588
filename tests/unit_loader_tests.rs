//! # Loader Module Unit Tests / 加载器模块单元测试
//!
//! Tests for tool list parsing, source selection and loading from files and HTTP.
//!
//! 工具列表解析、来源选择以及从文件和 HTTP 加载的测试。

mod common;

use std::path::PathBuf;
use tool_finder::infra::loader::{LoadError, ToolSource, load_tools, parse_tool_list};

#[cfg(test)]
mod parse_tests {
    use super::*;

    #[test]
    fn test_trims_and_drops_empty_lines() {
        assert_eq!(
            parse_tool_list("calculator.html\r\n  image-converter.html  \n\n\t\npdf_merge_tool.html\n"),
            vec!["calculator.html", "image-converter.html", "pdf_merge_tool.html"]
        );
    }

    #[test]
    fn test_keeps_order_and_duplicates() {
        assert_eq!(parse_tool_list("b\na\nb\n"), vec!["b", "a", "b"]);
    }

    #[test]
    fn test_empty_body() {
        assert!(parse_tool_list("").is_empty());
        assert!(parse_tool_list("\n \n\r\n").is_empty());
    }
}

#[cfg(test)]
mod source_tests {
    use super::*;

    #[test]
    fn test_urls_and_paths() {
        assert!(matches!(
            "https://example.com/tools.txt".parse::<ToolSource>().unwrap(),
            ToolSource::Http(_)
        ));
        assert!(matches!(
            "HTTP://example.com/tools.txt".parse::<ToolSource>().unwrap(),
            ToolSource::Http(_)
        ));
        assert_eq!(
            "tools.txt".parse::<ToolSource>().unwrap(),
            ToolSource::File(PathBuf::from("tools.txt"))
        );
        assert_eq!(ToolSource::default(), ToolSource::File(PathBuf::from("tools.txt")));
    }

    #[test]
    fn test_invalid_url() {
        assert!("http://".parse::<ToolSource>().is_err());
    }

    #[test]
    fn test_display() {
        let source: ToolSource = "https://example.com/tools.txt".parse().unwrap();
        assert_eq!(source.to_string(), "https://example.com/tools.txt");
    }
}

#[cfg(test)]
mod load_tests {
    use super::common::{SAMPLE_TOOLS, serve_once, setup_test_environment, write_tools_file};
    use super::*;

    #[tokio::test]
    async fn test_load_from_file() {
        let temp_dir = setup_test_environment();
        let path = write_tools_file(&temp_dir, SAMPLE_TOOLS);

        let tools = load_tools(&ToolSource::File(path)).await.unwrap();
        assert_eq!(
            tools,
            vec!["calculator.html", "image-converter.html", "pdf_merge_tool.html"]
        );
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let temp_dir = setup_test_environment();
        let path = temp_dir.path().join("missing.txt");

        let error = load_tools(&ToolSource::File(path.clone())).await.unwrap_err();
        match error {
            LoadError::Io { path: failed, .. } => assert_eq!(failed, path),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_io_error_cause_is_reported_once() {
        let temp_dir = setup_test_environment();
        let path = temp_dir.path().join("missing.txt");

        let error = load_tools(&ToolSource::File(path)).await.unwrap_err();
        let cause = std::error::Error::source(&error).unwrap().to_string();
        let chain = format!("{:#}", anyhow::Error::new(error));

        assert!(chain.starts_with("failed to read "));
        assert_eq!(chain.matches(&cause).count(), 1);
    }

    #[tokio::test]
    async fn test_load_over_http() {
        let url = serve_once("200 OK", "calculator.html\nimage-converter.html\n").await;

        let tools = load_tools(&url.parse().unwrap()).await.unwrap();
        assert_eq!(tools, vec!["calculator.html", "image-converter.html"]);
    }

    #[tokio::test]
    async fn test_http_500_is_status_error() {
        let url = serve_once("500 Internal Server Error", "boom").await;

        let error = load_tools(&url.parse().unwrap()).await.unwrap_err();
        assert!(matches!(error, LoadError::Status(500)));
        assert_eq!(error.status(), Some(500));
        assert_eq!(error.to_string(), "HTTP error! status: 500");
    }

    #[tokio::test]
    async fn test_http_404_is_status_error() {
        let url = serve_once("404 Not Found", "").await;

        let error = load_tools(&url.parse().unwrap()).await.unwrap_err();
        assert_eq!(error.status(), Some(404));
    }

    #[tokio::test]
    async fn test_connection_refused_is_network_error() {
        // Bind and drop to get a port nobody listens on.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let source: ToolSource = format!("http://{}/tools.txt", addr).parse().unwrap();
        let error = load_tools(&source).await.unwrap_err();
        assert!(matches!(error, LoadError::Network(_)));
        assert_eq!(error.status(), None);
    }
}
