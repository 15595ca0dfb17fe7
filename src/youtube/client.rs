//! Blocking HTTP client for the YouTube Data API.

use std::time::Duration;

use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::wire::{PlaylistItemListResponse, PlaylistListResponse, VideoListResponse};
use super::{
    ApiError, ItemsPage, PlaylistSnippet, VideoDuration, YouTubeApi, DEFAULT_BASE_URL,
    MAX_RESULTS_PER_REQUEST,
};
use crate::playlist::PlaylistId;

const PLAYLISTS: &str = "playlists";
const PLAYLIST_ITEMS: &str = "playlistItems";
const VIDEOS: &str = "videos";

/// YouTube Data API client authenticated with a static API key.
pub struct HttpClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl HttpClient {
    /// Create a client against the public API with no request timeout.
    pub fn new(api_key: impl Into<String>) -> Result<Self, ApiError> {
        Self::builder(api_key).build()
    }

    pub fn builder(api_key: impl Into<String>) -> HttpClientBuilder {
        HttpClientBuilder {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issue a GET against `endpoint` and decode the JSON body.
    fn get<T: DeserializeOwned>(
        &self,
        endpoint: &'static str,
        query: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        debug!(endpoint, ?query, "YouTube API request");

        let response = self
            .http
            .get(&url)
            .query(query)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .map_err(|source| ApiError::Http { endpoint, source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                endpoint,
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .map_err(|source| ApiError::Http { endpoint, source })?;
        serde_json::from_str(&body).map_err(|source| ApiError::Decode { endpoint, source })
    }
}

impl YouTubeApi for HttpClient {
    fn playlist(&self, id: &PlaylistId) -> Result<Option<PlaylistSnippet>, ApiError> {
        let response: PlaylistListResponse =
            self.get(PLAYLISTS, &[("part", "snippet"), ("id", id.as_str())])?;
        Ok(response.into_snippet())
    }

    fn playlist_items(
        &self,
        id: &PlaylistId,
        page_token: Option<&str>,
    ) -> Result<ItemsPage, ApiError> {
        let max_results = MAX_RESULTS_PER_REQUEST.to_string();
        let mut query = vec![
            ("part", "snippet,status"),
            ("maxResults", max_results.as_str()),
            ("playlistId", id.as_str()),
        ];
        if let Some(token) = page_token {
            query.push(("pageToken", token));
        }

        let response: PlaylistItemListResponse = self.get(PLAYLIST_ITEMS, &query)?;
        Ok(response.into_page())
    }

    fn video_durations(&self, video_ids: &[String]) -> Result<Vec<VideoDuration>, ApiError> {
        if video_ids.is_empty() {
            return Ok(Vec::new());
        }
        let ids = video_ids.join(",");
        let response: VideoListResponse =
            self.get(VIDEOS, &[("part", "contentDetails"), ("id", ids.as_str())])?;
        Ok(response.into_durations())
    }
}

/// Builder for [`HttpClient`].
pub struct HttpClientBuilder {
    api_key: String,
    base_url: String,
    timeout: Option<Duration>,
}

impl HttpClientBuilder {
    /// Override the API root (trailing slashes are ignored).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Apply a per-request timeout. `None` waits indefinitely.
    pub fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> Result<HttpClient, ApiError> {
        if self.api_key.trim().is_empty() {
            return Err(ApiError::Config("API key is empty".to_string()));
        }
        let base_url = self.base_url.trim_end_matches('/').to_string();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ApiError::Config(format!(
                "base URL must start with http:// or https://, got {:?}",
                self.base_url
            )));
        }

        let http = Client::builder()
            .user_agent(concat!("playtime/", env!("CARGO_PKG_VERSION")))
            .timeout(self.timeout)
            .build()
            .map_err(|source| ApiError::Http {
                endpoint: "client",
                source,
            })?;

        Ok(HttpClient {
            http,
            base_url,
            api_key: self.api_key,
        })
    }
}
