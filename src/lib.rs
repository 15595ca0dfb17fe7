//! playtime: total up the runtime of a YouTube playlist.
//!
//! The library fetches a playlist through the YouTube Data API, skips
//! private and deleted entries, and reports the total and average video
//! length along with the watch time at 1.25x, 1.5x, 1.75x and 2x speed.
//!
//! ```no_run
//! use std::sync::Arc;
//! use playtime::analysis::Analyzer;
//! use playtime::youtube::HttpClient;
//!
//! # fn main() -> anyhow::Result<()> {
//! let client = HttpClient::new("my-api-key")?;
//! let analyzer = Analyzer::new(Arc::new(client));
//! let result = analyzer.analyze("https://www.youtube.com/playlist?list=PL123")?;
//! println!("{}", playtime::report::render(&result));
//! # Ok(())
//! # }
//! ```

pub mod analysis;
pub mod cli;
pub mod clipboard;
pub mod config;
pub mod duration;
pub mod logging;
pub mod playlist;
pub mod report;
pub mod theme;
pub mod tui;
pub mod youtube;

pub use analysis::{AggregateResult, AnalysisError, Analyzer};
pub use config::Config;
pub use playlist::{extract_playlist_id, PlaylistId};
