//! Shared test helpers: a canned YouTube API (in-process and over HTTP) and
//! a CLI runner.

use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::process::Command;
use std::sync::{Arc, Mutex};
use std::thread;

use tempfile::TempDir;

/// Playlist used across the tests: two available videos and one private.
pub const PLAYLIST_URL: &str = "https://www.youtube.com/playlist?list=PLtest";

pub const PLAYLIST_JSON: &str = r#"{
  "items": [{ "snippet": { "title": "Rust Talks", "channelTitle": "RustConf" } }]
}"#;

pub const ITEMS_JSON: &str = r#"{
  "items": [
    { "snippet": { "title": "Intro", "resourceId": { "videoId": "v1" } }, "status": { "privacyStatus": "public" } },
    { "snippet": { "title": "Private video", "resourceId": { "videoId": "v2" } }, "status": { "privacyStatus": "private" } },
    { "snippet": { "title": "Deep Dive", "resourceId": { "videoId": "v3" } }, "status": { "privacyStatus": "public" } }
  ]
}"#;

pub const VIDEOS_JSON: &str = r#"{
  "items": [
    { "id": "v1", "contentDetails": { "duration": "PT10M" } },
    { "id": "v3", "contentDetails": { "duration": "PT15M" } }
  ]
}"#;

/// Route a request path to a canned `(status, body)` response.
pub fn canned_route(path: &str) -> (u16, String) {
    if path.starts_with("/v3/playlists?") {
        if path.contains("id=PLmissing") {
            return (200, r#"{ "items": [] }"#.to_string());
        }
        (200, PLAYLIST_JSON.to_string())
    } else if path.starts_with("/v3/playlistItems?") {
        (200, ITEMS_JSON.to_string())
    } else if path.starts_with("/v3/videos?") {
        (200, VIDEOS_JSON.to_string())
    } else {
        (404, r#"{ "error": "not found" }"#.to_string())
    }
}

/// Minimal HTTP/1.1 server answering GET requests from a routing function.
pub struct MockServer {
    base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl MockServer {
    pub fn start(route: fn(&str) -> (u16, String)) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind mock server");
        let base_url = format!("http://{}/v3", listener.local_addr().unwrap());
        let requests = Arc::new(Mutex::new(Vec::new()));
        let log = requests.clone();

        thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(mut stream) = stream else { continue };
                let mut reader = BufReader::new(stream.try_clone().unwrap());

                let mut request_line = String::new();
                if reader.read_line(&mut request_line).is_err() {
                    continue;
                }
                loop {
                    let mut header = String::new();
                    match reader.read_line(&mut header) {
                        Ok(0) | Err(_) => break,
                        Ok(_) if header == "\r\n" => break,
                        Ok(_) => {}
                    }
                }

                let path = request_line
                    .split_whitespace()
                    .nth(1)
                    .unwrap_or("/")
                    .to_string();
                log.lock().unwrap().push(path.clone());

                let (status, body) = route(&path);
                let response = format!(
                    "HTTP/1.1 {} X\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    body.len(),
                    body
                );
                let _ = stream.write_all(response.as_bytes());
            }
        });

        Self { base_url, requests }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Request paths received so far, in order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

/// A config directory whose config.toml points at `base_url`.
pub fn config_dir_for(base_url: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.toml"),
        format!("[api]\nbase_url = \"{}\"\n", base_url),
    )
    .unwrap();
    dir
}

/// Run the playtime binary with an isolated config dir and no API key in
/// the environment.
pub fn run_playtime(config_dir: &TempDir, args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_playtime"))
        .args(args)
        .env("PLAYTIME_CONFIG_DIR", config_dir.path())
        .env_remove("YOUTUBE_API_KEY")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1")
        .output()
        .expect("Failed to execute playtime");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}
