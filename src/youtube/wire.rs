//! JSON response shapes for the three endpoints.
//!
//! Only the fields the analysis reads are modelled; everything else in the
//! API response is ignored. Missing lists default to empty so an odd but
//! well-formed response never fails to decode.

use serde::Deserialize;

use super::{ItemsPage, PlaylistSnippet, VideoDuration};
use crate::playlist::PlaylistEntry;

/// `GET /playlists?part=snippet`
#[derive(Debug, Deserialize)]
pub struct PlaylistListResponse {
    #[serde(default)]
    pub items: Vec<PlaylistResource>,
}

#[derive(Debug, Deserialize)]
pub struct PlaylistResource {
    pub snippet: PlaylistResourceSnippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistResourceSnippet {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub channel_title: String,
}

impl PlaylistListResponse {
    /// The first matching playlist, if any.
    pub fn into_snippet(self) -> Option<PlaylistSnippet> {
        self.items.into_iter().next().map(|item| PlaylistSnippet {
            title: item.snippet.title,
            channel_title: item.snippet.channel_title,
        })
    }
}

/// `GET /playlistItems?part=snippet,status`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistItemListResponse {
    #[serde(default)]
    pub items: Vec<PlaylistItemResource>,
    pub next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PlaylistItemResource {
    pub snippet: PlaylistItemSnippet,
    pub status: Option<PlaylistItemStatus>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistItemSnippet {
    #[serde(default)]
    pub title: String,
    pub resource_id: Option<ResourceId>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceId {
    pub video_id: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistItemStatus {
    pub privacy_status: Option<String>,
}

impl PlaylistItemListResponse {
    pub fn into_page(self) -> ItemsPage {
        let entries = self
            .items
            .into_iter()
            .map(|item| {
                let privacy_status = item.status.and_then(|s| s.privacy_status);
                let video_id = item.snippet.resource_id.and_then(|r| r.video_id);
                PlaylistEntry::from_parts(item.snippet.title, video_id, privacy_status.as_deref())
            })
            .collect();

        ItemsPage {
            entries,
            // An empty token is as good as none.
            next_page_token: self.next_page_token.filter(|t| !t.is_empty()),
        }
    }
}

/// `GET /videos?part=contentDetails`
#[derive(Debug, Deserialize)]
pub struct VideoListResponse {
    #[serde(default)]
    pub items: Vec<VideoResource>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoResource {
    #[serde(default)]
    pub id: String,
    pub content_details: Option<VideoContentDetails>,
}

#[derive(Debug, Deserialize)]
pub struct VideoContentDetails {
    #[serde(default)]
    pub duration: String,
}

impl VideoListResponse {
    pub fn into_durations(self) -> Vec<VideoDuration> {
        self.items
            .into_iter()
            .map(|item| VideoDuration {
                video_id: item.id,
                duration: item.content_details.map(|c| c.duration).unwrap_or_default(),
            })
            .collect()
    }
}
