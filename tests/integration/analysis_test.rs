//! Library-level analysis through a scripted in-process API.

use std::collections::HashMap;
use std::sync::Arc;

use playtime::analysis::{AnalysisState, AnalysisWorker, Analyzer, AnalyzerOptions, SubmitOutcome};
use playtime::playlist::PlaylistEntry;
use playtime::youtube::{ApiError, ItemsPage, PlaylistSnippet, VideoDuration, YouTubeApi};
use playtime::{report, PlaylistId};

/// Serves a fixed set of pages keyed by continuation token.
struct ScriptedApi {
    pages: HashMap<Option<String>, ItemsPage>,
    durations: HashMap<String, String>,
}

impl ScriptedApi {
    /// `per_page` videos per page, `pages` pages, every video 2 minutes long,
    /// and one private video on the first page.
    fn long_playlist(pages: usize, per_page: usize) -> Self {
        let mut scripted = HashMap::new();
        let mut durations = HashMap::new();

        for page in 0..pages {
            let token = (page > 0).then(|| format!("page-{}", page));
            let next = (page + 1 < pages).then(|| format!("page-{}", page + 1));
            let mut entries: Vec<PlaylistEntry> = (0..per_page)
                .map(|i| {
                    let id = format!("v{}-{}", page, i);
                    durations.insert(id.clone(), "PT2M".to_string());
                    PlaylistEntry::from_parts(format!("Video {}", id), Some(id), Some("public"))
                })
                .collect();
            if page == 0 {
                entries.push(PlaylistEntry::from_parts(
                    "Private video".to_string(),
                    Some("hidden".to_string()),
                    Some("private"),
                ));
            }
            scripted.insert(
                token,
                ItemsPage {
                    entries,
                    next_page_token: next,
                },
            );
        }

        Self {
            pages: scripted,
            durations,
        }
    }
}

impl YouTubeApi for ScriptedApi {
    fn playlist(&self, _id: &PlaylistId) -> Result<Option<PlaylistSnippet>, ApiError> {
        Ok(Some(PlaylistSnippet {
            title: "Course".to_string(),
            channel_title: "Ferris".to_string(),
        }))
    }

    fn playlist_items(
        &self,
        _id: &PlaylistId,
        page_token: Option<&str>,
    ) -> Result<ItemsPage, ApiError> {
        self.pages
            .get(&page_token.map(str::to_string))
            .cloned()
            .ok_or(ApiError::Status {
                endpoint: "playlistItems",
                status: 400,
            })
    }

    fn video_durations(&self, ids: &[String]) -> Result<Vec<VideoDuration>, ApiError> {
        assert!(ids.len() <= 50, "batch of {} ids", ids.len());
        Ok(ids
            .iter()
            .filter_map(|id| {
                self.durations.get(id).map(|d| VideoDuration {
                    video_id: id.clone(),
                    duration: d.clone(),
                })
            })
            .collect())
    }
}

#[test]
fn multi_page_playlist_is_fully_counted() {
    let analyzer = Analyzer::new(Arc::new(ScriptedApi::long_playlist(3, 50)));

    let result = analyzer
        .analyze("https://www.youtube.com/playlist?list=PLcourse")
        .unwrap();

    assert_eq!(result.video_count, 151);
    assert_eq!(result.unavailable_count, 1);
    assert_eq!(result.total_seconds, 150 * 120);
    assert_eq!(result.average_seconds, 120);
    assert_eq!(result.at_speed(2.0), Some(150 * 60));
}

#[test]
fn page_limit_turns_into_fetch_failure() {
    let analyzer = Analyzer::with_options(
        Arc::new(ScriptedApi::long_playlist(3, 10)),
        AnalyzerOptions {
            max_pages: 2,
            ..AnalyzerOptions::default()
        },
    );

    let err = analyzer.analyze("?list=PLcourse").unwrap_err();
    assert!(!err.is_invalid_input());
    assert_eq!(
        err.user_message(),
        "Failed to analyze playlist. Please check the URL and try again."
    );
}

#[test]
fn report_matches_result() {
    let analyzer = Analyzer::new(Arc::new(ScriptedApi::long_playlist(1, 3)));
    let result = analyzer.analyze("&list=PLcourse").unwrap();

    let text = report::render(&result);
    assert!(text.contains("Title: Course"));
    assert!(text.contains("Creator: Ferris"));
    assert!(text.contains("Total Videos: 4 (1 unavailable)"));
    assert!(text.contains("Total Duration: 0h 6m 0s"));
    assert!(text.ends_with("- At 2.00x speed: 0h 3m 0s"));
}

#[test]
fn worker_and_state_machine_together() {
    let worker = AnalysisWorker::new(Analyzer::new(Arc::new(ScriptedApi::long_playlist(2, 5))));
    let mut state = AnalysisState::default();

    let SubmitOutcome::Started(id) = state.submit("https://youtube.com/playlist?list=PLcourse")
    else {
        panic!("expected the analysis to start");
    };
    worker.spawn(id);
    assert!(state.is_running());

    let outcome = worker.wait().unwrap();
    assert!(state.complete(outcome.result));
    assert_eq!(state.result().unwrap().video_count, 11);
}
