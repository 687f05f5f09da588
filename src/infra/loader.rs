//! # Data Loader / 数据加载器
//!
//! Fetches the newline-delimited tool list once, from a local file or over HTTP.
//! There is no retry; a failure leaves the caller with an empty list.
//!
//! 一次性获取以换行分隔的工具列表，来源可以是本地文件或 HTTP。
//! 不会重试；失败时调用方得到空列表。

use url::Url;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

/// Resource loaded when nothing else is configured.
pub const DEFAULT_SOURCE: &str = "tools.txt";

/// Where the tool list is read from.
/// 工具列表的读取位置。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolSource {
    Http(Url),
    File(PathBuf),
}

impl FromStr for ToolSource {
    type Err = url::ParseError;

    /// `http://` and `https://` values are URLs; anything else is a path.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let lower = trimmed.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Ok(ToolSource::Http(Url::parse(trimmed)?))
        } else {
            Ok(ToolSource::File(PathBuf::from(trimmed)))
        }
    }
}

impl Default for ToolSource {
    fn default() -> Self {
        ToolSource::File(PathBuf::from(DEFAULT_SOURCE))
    }
}

impl fmt::Display for ToolSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToolSource::Http(url) => write!(f, "{}", url),
            ToolSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Why the tool list could not be loaded.
/// 工具列表无法加载的原因。
#[derive(Debug, Error)]
pub enum LoadError {
    /// The server answered with a non-success status.
    #[error("HTTP error! status: {0}")]
    Status(u16),
    /// The request itself failed (connection refused, DNS, body decoding...).
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),
    #[error("failed to read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LoadError {
    /// The HTTP status code, when the failure was a non-success response.
    pub fn status(&self) -> Option<u16> {
        match self {
            LoadError::Status(code) => Some(*code),
            _ => None,
        }
    }
}

/// Splits a tool list body into identifiers: one per line, trimmed, empty
/// lines dropped, order and duplicates preserved.
///
/// 将工具列表正文拆分为标识符：每行一个，去除首尾空白，丢弃空行，保留顺序和重复项。
pub fn parse_tool_list(body: &str) -> Vec<String> {
    body.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

/// Loads the tool list from `source`.
///
/// # Errors / 错误
/// - `LoadError::Status` for a non-2xx HTTP response
/// - `LoadError::Network` if the request or body read fails
/// - `LoadError::Io` if the file cannot be read
pub async fn load_tools(source: &ToolSource) -> Result<Vec<String>, LoadError> {
    let body = match source {
        ToolSource::Http(url) => {
            let response = reqwest::get(url.clone()).await?;
            let status = response.status();
            if !status.is_success() {
                return Err(LoadError::Status(status.as_u16()));
            }
            response.text().await?
        }
        ToolSource::File(path) => {
            tokio::fs::read_to_string(path)
                .await
                .map_err(|source| LoadError::Io {
                    path: path.clone(),
                    source,
                })?
        }
    };

    let tools = parse_tool_list(&body);
    debug!(%source, count = tools.len(), "tool list loaded");
    Ok(tools)
}
