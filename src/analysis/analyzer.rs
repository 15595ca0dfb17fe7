//! Playlist analysis: fetch, classify, sum.

use std::sync::Arc;

use tracing::{debug, info};

use super::aggregate::AggregateResult;
use super::error::AnalysisError;
use crate::duration::parse_duration;
use crate::playlist::{extract_playlist_id, PlaylistId};
use crate::youtube::{Pages, YouTubeApi, MAX_RESULTS_PER_REQUEST};

/// Tunables for one analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalyzerOptions {
    /// Upper bound on membership pages before giving up.
    pub max_pages: usize,
    /// Video ids per duration request, clamped to `1..=50`.
    pub batch_size: usize,
}

impl Default for AnalyzerOptions {
    fn default() -> Self {
        Self {
            max_pages: 200,
            batch_size: MAX_RESULTS_PER_REQUEST,
        }
    }
}

/// Runs playlist analyses against a [`YouTubeApi`].
///
/// All remote calls are made in sequence: playlist metadata, then membership
/// pages, then duration batches. Nothing is cached between analyses.
#[derive(Clone)]
pub struct Analyzer {
    api: Arc<dyn YouTubeApi>,
    options: AnalyzerOptions,
}

impl Analyzer {
    pub fn new(api: Arc<dyn YouTubeApi>) -> Self {
        Self::with_options(api, AnalyzerOptions::default())
    }

    pub fn with_options(api: Arc<dyn YouTubeApi>, options: AnalyzerOptions) -> Self {
        Self { api, options }
    }

    /// Analyze the playlist referenced by `url`.
    ///
    /// A URL without a playlist identifier fails with
    /// [`AnalysisError::InvalidInput`] before any request is made.
    pub fn analyze(&self, url: &str) -> Result<AggregateResult, AnalysisError> {
        let id = extract_playlist_id(url).ok_or_else(|| AnalysisError::InvalidInput {
            url: url.to_string(),
        })?;
        self.analyze_id(&id)
    }

    /// Analyze a playlist by identifier.
    pub fn analyze_id(&self, id: &PlaylistId) -> Result<AggregateResult, AnalysisError> {
        let api = self.api.as_ref();

        let snippet = api.playlist(id)?.ok_or_else(|| AnalysisError::NotFound {
            playlist_id: id.clone(),
        })?;
        debug!(playlist = %id, title = %snippet.title, "Found playlist");

        let mut video_ids = Vec::new();
        let mut unavailable_count = 0;
        for page in Pages::new(api, id, self.options.max_pages) {
            for entry in page?.entries {
                match entry.video_id {
                    Some(video_id) if entry.availability.is_available() => video_ids.push(video_id),
                    _ => unavailable_count += 1,
                }
            }
        }

        let batch_size = self.options.batch_size.clamp(1, MAX_RESULTS_PER_REQUEST);
        let mut durations = Vec::with_capacity(video_ids.len());
        for batch in video_ids.chunks(batch_size) {
            let fetched = api.video_durations(batch)?;
            debug!(requested = batch.len(), returned = fetched.len(), "Fetched durations");
            durations.extend(fetched.iter().map(|v| parse_duration(&v.duration)));
        }

        let result = AggregateResult::compute(
            snippet.title,
            snippet.channel_title,
            video_ids.len(),
            unavailable_count,
            &durations,
        );
        info!(
            playlist = %id,
            videos = result.video_count,
            unavailable = result.unavailable_count,
            total_seconds = result.total_seconds,
            "Playlist analyzed"
        );
        Ok(result)
    }
}
