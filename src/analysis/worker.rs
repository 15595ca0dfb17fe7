//! Background worker for running analyses off the UI thread.
//!
//! Each submitted playlist is analyzed on its own thread; the outcome comes
//! back over a channel that the UI polls once per tick. There is no
//! cancellation: dropping the worker simply stops listening for results.

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread;

use tracing::error;

use super::aggregate::AggregateResult;
use super::analyzer::Analyzer;
use super::error::AnalysisError;
use crate::playlist::PlaylistId;

/// Outcome of a background analysis.
pub struct AnalysisOutcome {
    /// The playlist that was requested
    pub playlist_id: PlaylistId,
    pub result: Result<AggregateResult, AnalysisError>,
}

/// Spawns analyses and collects their outcomes.
pub struct AnalysisWorker {
    analyzer: Analyzer,
    result_tx: Sender<AnalysisOutcome>,
    result_rx: Receiver<AnalysisOutcome>,
}

impl AnalysisWorker {
    pub fn new(analyzer: Analyzer) -> Self {
        let (result_tx, result_rx) = mpsc::channel();
        Self {
            analyzer,
            result_tx,
            result_rx,
        }
    }

    /// Start analyzing `playlist_id` in the background.
    pub fn spawn(&self, playlist_id: PlaylistId) {
        let analyzer = self.analyzer.clone();
        let result_tx = self.result_tx.clone();

        thread::spawn(move || {
            let result = analyzer.analyze_id(&playlist_id);
            if let Err(ref e) = result {
                error!(playlist = %playlist_id, error = ?e, "Error analyzing playlist");
            }
            // Ignore send errors (UI may have exited)
            let _ = result_tx.send(AnalysisOutcome {
                playlist_id,
                result,
            });
        });
    }

    /// Return a finished outcome, if any, without blocking.
    pub fn poll(&self) -> Option<AnalysisOutcome> {
        match self.result_rx.try_recv() {
            Ok(outcome) => Some(outcome),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }

    /// Block until the next outcome arrives.
    pub fn wait(&self) -> Option<AnalysisOutcome> {
        self.result_rx.recv().ok()
    }
}
