//! The reqwest client against a local HTTP server.

use std::sync::Arc;

use playtime::analysis::{AnalysisError, Analyzer};
use playtime::youtube::{ApiError, HttpClient, YouTubeApi};
use playtime::PlaylistId;

use crate::helpers::{canned_route, MockServer, PLAYLIST_URL};

fn client_for(server: &MockServer) -> HttpClient {
    HttpClient::builder("test-key")
        .base_url(server.base_url())
        .build()
        .unwrap()
}

#[test]
fn analyzes_playlist_over_http() {
    let server = MockServer::start(canned_route);
    let analyzer = Analyzer::new(Arc::new(client_for(&server)));

    let result = analyzer.analyze(PLAYLIST_URL).unwrap();

    assert_eq!(result.title, "Rust Talks");
    assert_eq!(result.creator, "RustConf");
    assert_eq!(result.video_count, 3);
    assert_eq!(result.unavailable_count, 1);
    assert_eq!(result.total_seconds, 1500);
    assert_eq!(result.average_seconds, 750);

    let requests = server.requests();
    assert_eq!(requests.len(), 3);
    assert!(requests[0].starts_with("/v3/playlists?"));
    assert!(requests[1].starts_with("/v3/playlistItems?"));
    assert!(requests[2].starts_with("/v3/videos?"));
    assert!(requests.iter().all(|r| r.contains("key=test-key")));
}

#[test]
fn sends_expected_query_parameters() {
    let server = MockServer::start(canned_route);
    let client = client_for(&server);
    let id = PlaylistId::new("PLtest").unwrap();

    client.playlist_items(&id, Some("NEXT")).unwrap();
    client
        .video_durations(&["a".to_string(), "b".to_string()])
        .unwrap();

    let requests = server.requests();
    assert!(requests[0].contains("part=snippet%2Cstatus"));
    assert!(requests[0].contains("maxResults=50"));
    assert!(requests[0].contains("playlistId=PLtest"));
    assert!(requests[0].contains("pageToken=NEXT"));
    assert!(requests[1].contains("part=contentDetails"));
    assert!(requests[1].contains("id=a%2Cb"));
}

#[test]
fn empty_playlist_lookup_is_not_found() {
    let server = MockServer::start(canned_route);
    let analyzer = Analyzer::new(Arc::new(client_for(&server)));

    let err = analyzer
        .analyze("https://www.youtube.com/playlist?list=PLmissing")
        .unwrap_err();
    assert!(matches!(err, AnalysisError::NotFound { .. }));
    assert_eq!(server.requests().len(), 1);
}

#[test]
fn http_error_status_is_reported() {
    let server = MockServer::start(|_| (403, r#"{ "error": "quota" }"#.to_string()));
    let client = client_for(&server);

    let err = client
        .playlist(&PlaylistId::new("PLtest").unwrap())
        .unwrap_err();
    assert!(matches!(err, ApiError::Status { status: 403, .. }));
}

#[test]
fn malformed_body_is_a_decode_error() {
    let server = MockServer::start(|_| (200, "not json".to_string()));
    let client = client_for(&server);

    let err = client
        .playlist(&PlaylistId::new("PLtest").unwrap())
        .unwrap_err();
    assert!(matches!(err, ApiError::Decode { .. }));
}

#[test]
fn unreachable_server_fails_the_analysis() {
    // Bind then drop to get a port nothing listens on.
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    let client = HttpClient::builder("k")
        .base_url(format!("http://127.0.0.1:{}/v3", port))
        .build()
        .unwrap();

    let err = Analyzer::new(Arc::new(client))
        .analyze(PLAYLIST_URL)
        .unwrap_err();
    assert!(matches!(err, AnalysisError::FetchFailed(ApiError::Http { .. })));
    assert_eq!(
        err.user_message(),
        "Failed to analyze playlist. Please check the URL and try again."
    );
}
