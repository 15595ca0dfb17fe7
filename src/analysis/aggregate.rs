//! Aggregate statistics for an analyzed playlist.

use serde::Serialize;

use crate::duration::Hms;

/// Playback speeds the watch-time estimate is computed for.
pub const SPEED_MULTIPLIERS: [f64; 4] = [1.25, 1.5, 1.75, 2.0];

/// Watch time at one playback speed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SpeedTime {
    pub multiplier: f64,
    pub seconds: u64,
}

impl SpeedTime {
    /// Label with two decimals, e.g. `1.50x`.
    pub fn label(&self) -> String {
        format!("{:.2}x", self.multiplier)
    }

    pub fn hms(&self) -> Hms {
        Hms::from_seconds(self.seconds)
    }
}

/// Result of one successful analysis. Built once and never updated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateResult {
    pub title: String,
    pub creator: String,
    /// All entries, available or not.
    pub video_count: usize,
    pub unavailable_count: usize,
    pub total_seconds: u64,
    /// Average over available entries only.
    pub average_seconds: u64,
    /// One entry per [`SPEED_MULTIPLIERS`] value, in that order.
    pub speed_times: Vec<SpeedTime>,
}

impl AggregateResult {
    /// Assemble a result from the raw counts and per-video durations.
    pub fn compute(
        title: String,
        creator: String,
        available_count: usize,
        unavailable_count: usize,
        durations: &[u64],
    ) -> Self {
        let total_seconds = durations.iter().fold(0u64, |acc, d| acc.saturating_add(*d));

        Self {
            title,
            creator,
            video_count: available_count + unavailable_count,
            unavailable_count,
            total_seconds,
            average_seconds: average(total_seconds, available_count),
            speed_times: speed_times(total_seconds),
        }
    }

    pub fn available_count(&self) -> usize {
        self.video_count - self.unavailable_count
    }

    pub fn total(&self) -> Hms {
        Hms::from_seconds(self.total_seconds)
    }

    pub fn average(&self) -> Hms {
        Hms::from_seconds(self.average_seconds)
    }

    /// Watch time at `multiplier`, if it is one of [`SPEED_MULTIPLIERS`].
    pub fn at_speed(&self, multiplier: f64) -> Option<u64> {
        self.speed_times
            .iter()
            .find(|s| (s.multiplier - multiplier).abs() < f64::EPSILON)
            .map(|s| s.seconds)
    }
}

/// `round(total / count)`, or 0 when nothing is available.
pub fn average(total_seconds: u64, available_count: usize) -> u64 {
    if available_count == 0 {
        0
    } else {
        (total_seconds as f64 / available_count as f64).round() as u64
    }
}

/// `round(total / multiplier)`.
pub fn at_speed(total_seconds: u64, multiplier: f64) -> u64 {
    (total_seconds as f64 / multiplier).round() as u64
}

fn speed_times(total_seconds: u64) -> Vec<SpeedTime> {
    SPEED_MULTIPLIERS
        .iter()
        .map(|&multiplier| SpeedTime {
            multiplier,
            seconds: at_speed(total_seconds, multiplier),
        })
        .collect()
}
