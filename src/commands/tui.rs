//! Interactive analyzer command.

use anyhow::Result;

use playtime::tui::AnalyzerApp;
use playtime::Config;

use super::build_analyzer;

/// Open the analyzer, optionally starting on `url`.
pub fn handle(config: &Config, api_key: Option<&str>, url: Option<&str>) -> Result<()> {
    let analyzer = build_analyzer(config, api_key)?;
    let mut app = AnalyzerApp::new(analyzer)?;
    if let Some(url) = url {
        app.start_with(url);
    }
    app.run()
}
