//! Configuration file handling.
//!
//! The config lives at `<config_dir>/playtime/config.toml` unless
//! `PLAYTIME_CONFIG_DIR` points somewhere else. Every field has a default,
//! so a missing or partial file is always valid.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use toml_edit::{DocumentMut, Item};

use crate::analysis::AnalyzerOptions;
use crate::youtube::{HttpClient, DEFAULT_BASE_URL, MAX_RESULTS_PER_REQUEST};

/// Environment variable that overrides the config directory.
pub const CONFIG_DIR_ENV: &str = "PLAYTIME_CONFIG_DIR";

/// Environment variable holding the YouTube Data API key.
pub const API_KEY_ENV: &str = "YOUTUBE_API_KEY";

const CONFIG_FILE_NAME: &str = "config.toml";

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub analysis: AnalysisConfig,
    pub ui: UiConfig,
}

/// `[api]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// API key; the CLI flag and environment variable take precedence
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    pub base_url: String,
    /// Per-request timeout in seconds, 0 waits indefinitely
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 0,
        }
    }
}

/// `[analysis]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub max_pages: usize,
    pub batch_size: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        let defaults = AnalyzerOptions::default();
        Self {
            max_pages: defaults.max_pages,
            batch_size: defaults.batch_size,
        }
    }
}

/// `[ui]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// One of `default`, `classic`, `ocean`
    pub theme: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: "default".to_string(),
        }
    }
}

impl Config {
    /// Directory holding the config file.
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|d| !d.is_empty()) {
            return Ok(PathBuf::from(dir));
        }
        let base = dirs::config_dir().context("Could not determine config directory")?;
        Ok(base.join("playtime"))
    }

    /// Full path of the config file.
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Load from the default location, falling back to defaults if absent.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file {}", path.display()))
    }

    /// Pick the API key: `cli`, then `YOUTUBE_API_KEY`, then `api.key`.
    pub fn resolve_api_key(&self, cli: Option<&str>) -> Result<String> {
        let env = std::env::var(API_KEY_ENV).ok();
        pick_api_key(cli, env.as_deref(), self.api.key.as_deref()).with_context(|| {
            format!(
                "No YouTube API key configured. Pass --api-key, set {}, or add `key` under [api] in the config file",
                API_KEY_ENV
            )
        })
    }

    pub fn analyzer_options(&self) -> AnalyzerOptions {
        AnalyzerOptions {
            max_pages: self.analysis.max_pages,
            batch_size: self.analysis.batch_size,
        }
    }

    /// Request timeout, `None` when `timeout_secs` is 0.
    pub fn timeout(&self) -> Option<Duration> {
        (self.api.timeout_secs > 0).then(|| Duration::from_secs(self.api.timeout_secs))
    }

    /// Build an HTTP client from the `[api]` settings.
    pub fn http_client(&self, api_key: String) -> Result<HttpClient> {
        let client = HttpClient::builder(api_key)
            .base_url(self.api.base_url.clone())
            .timeout(self.timeout())
            .build()?;
        Ok(client)
    }
}

fn pick_api_key(cli: Option<&str>, env: Option<&str>, file: Option<&str>) -> Option<String> {
    [cli, env, file]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|key| !key.is_empty())
        .map(str::to_string)
}

/// Outcome of [`migrate_config`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationResult {
    /// Migrated file content
    pub content: String,
    /// Fields added, as `section.key`
    pub added_fields: Vec<String>,
    /// Sections that did not exist at all
    pub sections_added: Vec<String>,
}

impl MigrationResult {
    pub fn has_changes(&self) -> bool {
        !self.added_fields.is_empty() || !self.sections_added.is_empty()
    }
}

/// Add every field missing from `content` with its default value.
///
/// Existing values, comments and formatting are left untouched.
pub fn migrate_config(content: &str) -> Result<MigrationResult> {
    let mut doc: DocumentMut = content.parse().context("Failed to parse config file")?;
    let defaults: DocumentMut = toml::to_string_pretty(&Config::default())?.parse()?;

    let mut added_fields = Vec::new();
    let mut sections_added = Vec::new();

    for (section, default_item) in defaults.iter() {
        let Some(default_table) = default_item.as_table() else {
            continue;
        };

        match doc.get_mut(section) {
            None => {
                doc.insert(section, Item::Table(default_table.clone()));
                sections_added.push(section.to_string());
                added_fields.extend(
                    default_table
                        .iter()
                        .map(|(key, _)| format!("{}.{}", section, key)),
                );
            }
            Some(existing) => {
                let Some(table) = existing.as_table_like_mut() else {
                    bail!("Config entry `{}` must be a table", section);
                };
                for (key, value) in default_table.iter() {
                    if !table.contains_key(key) {
                        table.insert(key, value.clone());
                        added_fields.push(format!("{}.{}", section, key));
                    }
                }
            }
        }
    }

    Ok(MigrationResult {
        content: doc.to_string(),
        added_fields,
        sections_added,
    })
}
