//! Analysis lifecycle state machine.
//!
//! Independent of any rendering: the TUI drives it with `submit` and
//! `complete` and draws whatever state it is in.

use std::time::{Duration, Instant};

use super::aggregate::AggregateResult;
use super::error::AnalysisError;
use crate::playlist::{extract_playlist_id, PlaylistId};

/// How long the "copied" confirmation stays visible.
pub const COPY_FEEDBACK_DURATION: Duration = Duration::from_secs(2);

/// Where the current analysis stands.
#[derive(Debug, Default)]
pub enum AnalysisState {
    /// Nothing submitted yet.
    #[default]
    Idle,
    /// A request is in flight for this playlist.
    Running { playlist_id: PlaylistId },
    Succeeded(Box<AggregateResult>),
    Failed(AnalysisError),
}

/// Outcome of a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Now Running; the caller should start fetching this playlist.
    Started(PlaylistId),
    /// The URL had no playlist identifier; now Failed.
    Invalid,
    /// An analysis is already running; nothing changed.
    Busy,
}

impl AnalysisState {
    /// Begin a new analysis for `url`.
    ///
    /// Any previous result or error is discarded. Invalid input moves
    /// straight to `Failed` without ever entering `Running`.
    pub fn submit(&mut self, url: &str) -> SubmitOutcome {
        if self.is_running() {
            return SubmitOutcome::Busy;
        }

        match extract_playlist_id(url.trim()) {
            Some(playlist_id) => {
                *self = Self::Running {
                    playlist_id: playlist_id.clone(),
                };
                SubmitOutcome::Started(playlist_id)
            }
            None => {
                *self = Self::Failed(AnalysisError::InvalidInput {
                    url: url.to_string(),
                });
                SubmitOutcome::Invalid
            }
        }
    }

    /// Record the outcome of the running analysis.
    ///
    /// Returns false (and changes nothing) when no analysis is running.
    pub fn complete(&mut self, outcome: Result<AggregateResult, AnalysisError>) -> bool {
        if !self.is_running() {
            return false;
        }
        *self = match outcome {
            Ok(result) => Self::Succeeded(Box::new(result)),
            Err(error) => Self::Failed(error),
        };
        true
    }

    pub fn is_running(&self) -> bool {
        matches!(self, Self::Running { .. })
    }

    pub fn result(&self) -> Option<&AggregateResult> {
        match self {
            Self::Succeeded(result) => Some(result),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&AnalysisError> {
        match self {
            Self::Failed(error) => Some(error),
            _ => None,
        }
    }
}

/// Transient "copied" confirmation.
#[derive(Debug, Default, Clone, Copy)]
pub struct CopyFeedback {
    shown_until: Option<Instant>,
}

impl CopyFeedback {
    /// Show the confirmation from `now` for [`COPY_FEEDBACK_DURATION`].
    pub fn show(&mut self, now: Instant) {
        self.shown_until = Some(now + COPY_FEEDBACK_DURATION);
    }

    pub fn clear(&mut self) {
        self.shown_until = None;
    }

    pub fn is_visible(&self, now: Instant) -> bool {
        self.shown_until.is_some_and(|until| now < until)
    }
}
