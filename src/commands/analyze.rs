//! One-shot `analyze` command.

use anyhow::Result;
use tracing::{debug, warn};

use playtime::analysis::AnalysisError;
use playtime::clipboard::Copy;
use playtime::theme::current_theme;
use playtime::{extract_playlist_id, report, Config};

use super::build_analyzer;

/// Analyze `url` and print the summary (or JSON).
///
/// An invalid URL is rejected before the API key is looked up.
pub fn handle(config: &Config, api_key: Option<&str>, url: &str, json: bool, copy: bool) -> Result<()> {
    let url = url.trim();
    let Some(playlist_id) = extract_playlist_id(url) else {
        return Err(fail(AnalysisError::InvalidInput {
            url: url.to_string(),
        }));
    };

    let analyzer = build_analyzer(config, api_key)?;
    let result = analyzer.analyze_id(&playlist_id).map_err(fail)?;
    let text = report::render(&result);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", text);
    }

    if copy {
        match Copy::new().text(&text) {
            Ok(copied) => eprintln!("{}", current_theme().success_text(&copied.message())),
            Err(e) => warn!(error = %e, "Failed to copy results"),
        }
    }

    Ok(())
}

/// Turn the error into its user-facing message.
///
/// The detailed cause only shows up with `-v`, `RUST_LOG` or `--log-file`.
fn fail(err: AnalysisError) -> anyhow::Error {
    debug!(error = ?err, "Analysis failed");
    anyhow::anyhow!(err.user_message())
}
