//! Subcommand handlers for the binary.

pub mod analyze;
pub mod completions;
pub mod config;
pub mod tui;

use std::sync::Arc;

use anyhow::Result;
use playtime::{Analyzer, Config};

/// Build an analyzer from the config and the resolved API key.
pub fn build_analyzer(config: &Config, api_key_flag: Option<&str>) -> Result<Analyzer> {
    let api_key = config.resolve_api_key(api_key_flag)?;
    let client = config.http_client(api_key)?;
    Ok(Analyzer::with_options(
        Arc::new(client),
        config.analyzer_options(),
    ))
}
