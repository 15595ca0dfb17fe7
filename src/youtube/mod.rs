//! YouTube Data API access.
//!
//! The analysis only needs three read-only lookups. They sit behind the
//! [`YouTubeApi`] trait so the aggregation can be exercised without network
//! access; [`HttpClient`] is the real implementation.
//!
//! # Module Structure
//!
//! - [`client`] - reqwest-backed implementation
//! - [`pages`] - lazy, bounded sequence of membership pages
//! - [`wire`] - JSON response shapes

pub mod client;
pub mod pages;
pub mod wire;

pub use client::HttpClient;
pub use pages::Pages;

use crate::playlist::{PlaylistEntry, PlaylistId};

/// Most ids the videos endpoint accepts per request, and the page size of
/// the playlist items endpoint.
pub const MAX_RESULTS_PER_REQUEST: usize = 50;

/// Default API root.
pub const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

/// Playlist-level metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistSnippet {
    pub title: String,
    /// Display name of the owning channel.
    pub channel_title: String,
}

/// One page of playlist membership.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ItemsPage {
    pub entries: Vec<PlaylistEntry>,
    pub next_page_token: Option<String>,
}

/// Duration metadata for one video.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoDuration {
    pub video_id: String,
    /// Compact encoding as sent by the API, e.g. `PT4M13S`.
    pub duration: String,
}

/// Errors from talking to the API.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Request to {endpoint} failed: {source}")]
    Http {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("Request to {endpoint} returned HTTP {status}")]
    Status {
        endpoint: &'static str,
        status: u16,
    },

    #[error("Unexpected response from {endpoint}: {source}")]
    Decode {
        endpoint: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Playlist has more than {limit} pages")]
    PageLimitExceeded { limit: usize },

    #[error("Upstream repeated continuation token {token:?}")]
    ContinuationLoop { token: String },

    #[error("Invalid API configuration: {0}")]
    Config(String),
}

/// The three lookups the analysis performs.
pub trait YouTubeApi: Send + Sync {
    /// Fetch playlist metadata. `Ok(None)` means no playlist has this id.
    fn playlist(&self, id: &PlaylistId) -> Result<Option<PlaylistSnippet>, ApiError>;

    /// Fetch one page (up to 50 entries) of playlist membership.
    fn playlist_items(
        &self,
        id: &PlaylistId,
        page_token: Option<&str>,
    ) -> Result<ItemsPage, ApiError>;

    /// Fetch durations for up to 50 videos.
    ///
    /// Videos the API no longer knows about are simply missing from the result.
    fn video_durations(&self, video_ids: &[String]) -> Result<Vec<VideoDuration>, ApiError>;
}
