//! CLI behavior of the playtime binary.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use crate::helpers::{canned_route, config_dir_for, run_playtime, MockServer, PLAYLIST_URL};

fn playtime(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("playtime").unwrap();
    cmd.env("PLAYTIME_CONFIG_DIR", config_dir.path())
        .env_remove("YOUTUBE_API_KEY")
        .env("NO_COLOR", "1");
    cmd
}

// ============================================================================
// Help and usage
// ============================================================================

#[test]
fn help_lists_subcommands() {
    let dir = TempDir::new().unwrap();
    playtime(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("analyze"))
        .stdout(predicate::str::contains("config"))
        .stdout(predicate::str::contains("completions"))
        .stdout(predicate::str::contains("--api-key"));
}

#[test]
fn analyze_without_url_is_a_usage_error() {
    let dir = TempDir::new().unwrap();
    playtime(&dir).arg("analyze").assert().code(2);
}

// ============================================================================
// Analyze
// ============================================================================

#[test]
fn invalid_url_fails_without_api_key() {
    let dir = TempDir::new().unwrap();
    playtime(&dir)
        .args(["analyze", "https://www.youtube.com/watch?v=abc"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "Invalid YouTube playlist URL. Please enter a valid playlist URL.",
        ))
        .stderr(predicate::str::contains("API key").not());
}

#[test]
fn missing_api_key_is_a_config_error() {
    let dir = TempDir::new().unwrap();
    playtime(&dir)
        .args(["analyze", PLAYLIST_URL])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No YouTube API key configured"));
}

#[test]
fn analyze_prints_report() {
    let server = MockServer::start(canned_route);
    let dir = config_dir_for(server.base_url());

    let (stdout, stderr, exit_code) =
        run_playtime(&dir, &["analyze", PLAYLIST_URL, "--api-key", "k"]);

    assert_eq!(exit_code, 0, "stderr: {}", stderr);
    insta::assert_snapshot!(stdout.trim_end(), @r"
    Playlist Analysis Results:
    ------------------------
    Title: Rust Talks
    Creator: RustConf
    Total Videos: 3 (1 unavailable)
    Average Video Length: 0h 12m 30s
    Total Duration: 0h 25m 0s

    Estimated Watching Time:
    - At 1.25x speed: 0h 20m 0s
    - At 1.50x speed: 0h 16m 40s
    - At 1.75x speed: 0h 14m 17s
    - At 2.00x speed: 0h 12m 30s
    ");
}

#[test]
fn analyze_json_output() {
    let server = MockServer::start(canned_route);
    let dir = config_dir_for(server.base_url());

    let output = playtime(&dir)
        .env("YOUTUBE_API_KEY", "from-env")
        .args(["analyze", PLAYLIST_URL, "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["title"], "Rust Talks");
    assert_eq!(json["video_count"], 3);
    assert_eq!(json["total_seconds"], 1500);
    assert_eq!(json["speed_times"][3]["seconds"], 750);

    assert!(server
        .requests()
        .iter()
        .all(|r| r.contains("key=from-env")));
}

#[test]
fn api_key_flag_overrides_config_file() {
    let server = MockServer::start(canned_route);
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.toml"),
        format!(
            "[api]\nkey = \"from-file\"\nbase_url = \"{}\"\n",
            server.base_url()
        ),
    )
    .unwrap();

    playtime(&dir)
        .args(["analyze", PLAYLIST_URL, "--api-key", "from-flag"])
        .assert()
        .success();

    assert!(server.requests().iter().all(|r| r.contains("key=from-flag")));
}

#[test]
fn fetch_failure_shows_generic_message() {
    let server = MockServer::start(|_| (500, "{}".to_string()));
    let dir = config_dir_for(server.base_url());

    playtime(&dir)
        .args(["analyze", PLAYLIST_URL, "--api-key", "k"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "Failed to analyze playlist. Please check the URL and try again.",
        ));
}

#[test]
fn not_found_and_server_error_print_the_same_stderr() {
    let canned = MockServer::start(canned_route);
    let canned_dir = config_dir_for(canned.base_url());
    let broken = MockServer::start(|_| (500, "{}".to_string()));
    let broken_dir = config_dir_for(broken.base_url());

    let (_, not_found, not_found_code) = run_playtime(
        &canned_dir,
        &["analyze", "?list=PLmissing", "--api-key", "k"],
    );
    let (_, server_error, server_error_code) =
        run_playtime(&broken_dir, &["analyze", PLAYLIST_URL, "--api-key", "k"]);

    assert_eq!(not_found_code, 1);
    assert_eq!(server_error_code, 1);
    assert_eq!(not_found, server_error);
    assert_eq!(
        not_found,
        "Error: Failed to analyze playlist. Please check the URL and try again.\n"
    );
}

#[test]
fn invalid_url_prints_only_the_message() {
    let dir = TempDir::new().unwrap();
    let (_, stderr, exit_code) = run_playtime(&dir, &["analyze", "https://example.com/"]);

    assert_eq!(exit_code, 1);
    assert_eq!(
        stderr,
        "Error: Invalid YouTube playlist URL. Please enter a valid playlist URL.\n"
    );
}

#[test]
fn verbose_run_logs_the_cause() {
    let server = MockServer::start(canned_route);
    let dir = config_dir_for(server.base_url());

    let (_, stderr, _) = run_playtime(
        &dir,
        &["analyze", "?list=PLmissing", "--api-key", "k", "-v"],
    );
    assert!(stderr.contains("NotFound"));
}

// ============================================================================
// Config and completions
// ============================================================================

#[test]
fn config_path_honors_env_override() {
    let dir = TempDir::new().unwrap();
    let expected = dir.path().join("config.toml");
    playtime(&dir)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(expected.display().to_string()));
}

#[test]
fn config_show_masks_api_key() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.toml"),
        "[api]\nkey = \"AIzaSecret9876\"\n",
    )
    .unwrap();

    playtime(&dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("****9876"))
        .stdout(predicate::str::contains("AIzaSecret").not())
        .stdout(predicate::str::contains("max_pages = 200"));
}

#[test]
fn config_migrate_yes_creates_file() {
    let dir = TempDir::new().unwrap();
    playtime(&dir)
        .args(["config", "migrate", "--yes"])
        .assert()
        .success();

    let written = std::fs::read_to_string(dir.path().join("config.toml")).unwrap();
    assert!(written.contains("[analysis]"));
    assert!(written.contains("batch_size = 50"));

    playtime(&dir)
        .args(["config", "migrate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already up to date"));
}

#[test]
fn broken_config_is_reported() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.toml"), "[api\n").unwrap();

    playtime(&dir)
        .args(["analyze", PLAYLIST_URL])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to parse config file"));
}

#[test]
fn completions_for_bash() {
    let dir = TempDir::new().unwrap();
    playtime(&dir)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("playtime"));
}
