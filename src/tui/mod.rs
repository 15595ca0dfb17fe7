//! Terminal user interface.
//!
//! Built on ratatui/crossterm. [`app::App`] owns the terminal and
//! [`AnalyzerApp`] drives the playlist analyzer screen on top of it.

pub mod analyzer_app;
pub mod app;

pub use analyzer_app::{Action, AnalyzerApp, AnalyzerScreen};
pub use app::App;
