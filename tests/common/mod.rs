// Shared test helpers for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use tempfile::{TempDir, tempdir};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use tool_finder::core::config::FinderConfig;
use tool_finder::core::view::ResultsView;
use tool_finder::{Locale, Surface};

/// A tool list with a blank line, surrounding whitespace and CRLF endings.
pub const SAMPLE_TOOLS: &str = "calculator.html\r\n  image-converter.html  \n\npdf_merge_tool.html\n";

pub fn setup_test_environment() -> TempDir {
    tempdir().expect("Failed to create temporary directory")
}

pub fn write_tools_file(temp_dir: &TempDir, content: &str) -> PathBuf {
    let path = temp_dir.path().join("tools.txt");
    fs::write(&path, content).expect("Failed to write tools.txt");
    path
}

/// Writes a `ToolFinder.toml` pointing at `source`, with preferences kept inside `temp_dir`.
pub fn write_config(temp_dir: &TempDir, source: &str) -> PathBuf {
    let config = FinderConfig {
        source: source.to_string(),
        preferences_path: Some(preferences_path(temp_dir)),
        reveal_delay_ms: 50,
    };
    let path = temp_dir.path().join("ToolFinder.toml");
    fs::write(&path, toml::to_string(&config).unwrap()).expect("Failed to write config");
    path
}

pub fn preferences_path(temp_dir: &TempDir) -> PathBuf {
    temp_dir.path().join("prefs").join("preferences.json")
}

/// Serves exactly one HTTP response on a local port and returns the URL of `tools.txt`.
pub async fn serve_once(status_line: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        loop {
            let n = socket.read(&mut buf).await.unwrap();
            request.extend_from_slice(&buf[..n]);
            if n == 0 || request.windows(4).any(|w| w == b"\r\n\r\n") {
                break;
            }
        }
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: text/plain; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();
    });

    format!("http://{}/tools.txt", addr)
}

/// Records everything the widget asks it to draw.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub translations: Vec<Locale>,
    pub renders: Vec<(ResultsView, Locale)>,
}

impl RecordingSurface {
    pub fn last_view(&self) -> &ResultsView {
        &self.renders.last().expect("nothing rendered").0
    }

    pub fn last_locale(&self) -> Locale {
        self.renders.last().expect("nothing rendered").1
    }
}

impl Surface for RecordingSurface {
    fn apply_translations(&mut self, locale: Locale) {
        self.translations.push(locale);
    }

    fn render(&mut self, view: &ResultsView, locale: Locale) {
        self.renders.push((view.clone(), locale));
    }
}
