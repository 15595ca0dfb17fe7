//! Analysis errors.

use crate::playlist::PlaylistId;
use crate::youtube::ApiError;

/// Shown for URLs without a playlist identifier.
pub const INVALID_INPUT_MESSAGE: &str =
    "Invalid YouTube playlist URL. Please enter a valid playlist URL.";

/// Shown for every other failure.
pub const FAILED_MESSAGE: &str = "Failed to analyze playlist. Please check the URL and try again.";

/// Why an analysis did not produce a result.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("No playlist identifier found in {url:?}")]
    InvalidInput { url: String },

    #[error("Playlist {playlist_id} not found")]
    NotFound { playlist_id: PlaylistId },

    #[error("Failed to fetch playlist data")]
    FetchFailed(#[from] ApiError),
}

impl AnalysisError {
    /// The message to show an end user.
    ///
    /// Only input validation gets its own wording; not-found and transport
    /// failures share one generic message.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::InvalidInput { .. } => INVALID_INPUT_MESSAGE,
            Self::NotFound { .. } | Self::FetchFailed(_) => FAILED_MESSAGE,
        }
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }
}
