//! Playlist identifiers and entries.

use serde::Serialize;

/// Title the API substitutes for videos that were made private.
pub const PRIVATE_VIDEO_TITLE: &str = "Private video";
/// Title the API substitutes for videos that were deleted.
pub const DELETED_VIDEO_TITLE: &str = "Deleted video";

/// Opaque playlist identifier taken from a URL's `list` parameter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PlaylistId(String);

impl PlaylistId {
    /// Wrap a raw identifier. Returns `None` for an empty string.
    pub fn new(id: impl Into<String>) -> Option<Self> {
        let id = id.into();
        if id.is_empty() {
            None
        } else {
            Some(Self(id))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PlaylistId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Extract the playlist identifier from a URL.
///
/// Looks for a `list=` parameter introduced by `?` or `&` and returns its
/// value up to the next `&` or the end of the string. Nothing else about the
/// URL is assumed, so scheme, host and path may be anything (or absent).
///
/// ```
/// use playtime::playlist::extract_playlist_id;
///
/// let id = extract_playlist_id("https://www.youtube.com/watch?v=x&list=ABC123&index=2");
/// assert_eq!(id.unwrap().as_str(), "ABC123");
/// assert!(extract_playlist_id("https://www.youtube.com/watch?v=x").is_none());
/// ```
pub fn extract_playlist_id(url: &str) -> Option<PlaylistId> {
    const KEY: &str = "list=";

    let mut search_from = 0;
    while let Some(offset) = url[search_from..].find(KEY) {
        let key_start = search_from + offset;
        let value_start = key_start + KEY.len();

        let introduced = key_start > 0 && matches!(url.as_bytes()[key_start - 1], b'?' | b'&');
        if introduced {
            let value = &url[value_start..];
            let end = value.find('&').unwrap_or(value.len());
            if let Some(id) = PlaylistId::new(&value[..end]) {
                return Some(id);
            }
        }

        search_from = value_start;
    }

    None
}

/// Whether a playlist entry can still be watched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Availability {
    Available,
    Private,
    Deleted,
}

impl Availability {
    /// Classify an entry from its title and optional privacy status.
    pub fn classify(title: &str, privacy_status: Option<&str>) -> Self {
        if title == DELETED_VIDEO_TITLE {
            Self::Deleted
        } else if title == PRIVATE_VIDEO_TITLE || privacy_status == Some("private") {
            Self::Private
        } else {
            Self::Available
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available)
    }
}

/// One item of a playlist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistEntry {
    pub title: String,
    pub availability: Availability,
    /// Present only for available entries.
    pub video_id: Option<String>,
}

impl PlaylistEntry {
    /// Build an entry from raw API fields.
    ///
    /// An entry that looks available but carries no video identifier cannot
    /// be looked up and is treated as deleted.
    pub fn from_parts(title: String, video_id: Option<String>, privacy_status: Option<&str>) -> Self {
        let availability = match (Availability::classify(&title, privacy_status), &video_id) {
            (Availability::Available, None) => Availability::Deleted,
            (availability, _) => availability,
        };
        let video_id = video_id.filter(|_| availability.is_available());

        Self {
            title,
            availability,
            video_id,
        }
    }

    pub fn is_available(&self) -> bool {
        self.availability.is_available()
    }
}
