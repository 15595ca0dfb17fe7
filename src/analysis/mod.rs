//! Playlist analysis.
//!
//! Fetches a playlist through a [`crate::youtube::YouTubeApi`], classifies its
//! entries, and totals their durations into an [`AggregateResult`].
//!
//! # Module Structure
//!
//! - [`aggregate`] - the result type and its arithmetic
//! - [`analyzer`] - fetch-classify-sum orchestration
//! - [`error`] - error taxonomy and user-facing messages
//! - [`state`] - Idle/Running/Succeeded/Failed state machine
//! - [`worker`] - background thread runner for interactive use

pub mod aggregate;
pub mod analyzer;
pub mod error;
pub mod state;
pub mod worker;

pub use aggregate::{AggregateResult, SpeedTime, SPEED_MULTIPLIERS};
pub use analyzer::{Analyzer, AnalyzerOptions};
pub use error::AnalysisError;
pub use state::{AnalysisState, CopyFeedback, SubmitOutcome};
pub use worker::{AnalysisOutcome, AnalysisWorker};
