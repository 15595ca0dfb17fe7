//! Config subcommands handler

use anyhow::{Context, Result};
use std::fs;
use std::io::{self, BufRead, Write};

use playtime::config::migrate_config;
use playtime::theme::{ansi, current_theme};
use playtime::Config;

/// Show current configuration as TOML, with the API key masked.
pub fn handle_show(config: &Config) -> Result<()> {
    let toml_str = toml::to_string_pretty(&masked(config))?;
    let theme = current_theme();
    println!("{}", theme.primary_text(toml_str.trim_end()));
    Ok(())
}

/// Replace all but the last four characters of the API key.
fn masked(config: &Config) -> Config {
    let mut shown = config.clone();
    if let Some(key) = shown.api.key.as_mut() {
        let visible: String = key
            .chars()
            .rev()
            .take(4)
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
            .collect();
        *key = format!("****{}", visible);
    }
    shown
}

/// Print the config file path.
pub fn handle_path() -> Result<()> {
    println!("{}", Config::config_path()?.display());
    Ok(())
}

/// Open configuration file in the default editor.
///
/// Uses $EDITOR environment variable (defaults to 'vi').
pub fn handle_edit() -> Result<()> {
    let config_path = Config::config_path()?;
    let theme = current_theme();

    if !config_path.exists() {
        Config::default().save_to(&config_path)?;
    }

    let editor = std::env::var("EDITOR").unwrap_or_else(|_| "vi".to_string());

    println!(
        "{}",
        theme.primary_text(&format!(
            "Opening {} with {}",
            config_path.display(),
            editor
        ))
    );

    let status = std::process::Command::new(&editor)
        .arg(&config_path)
        .status()
        .with_context(|| format!("Failed to open editor {}", editor))?;
    if !status.success() {
        anyhow::bail!("Editor {} exited with {}", editor, status);
    }

    Config::load_from(&config_path).context("Config file is invalid after editing")?;
    Ok(())
}

/// Add missing fields to the config file.
///
/// Shows the lines that would be added and asks before writing, unless
/// `assume_yes` is set.
pub fn handle_migrate(assume_yes: bool) -> Result<()> {
    let theme = current_theme();
    let config_path = Config::config_path()?;
    let file_exists = config_path.exists();

    let content = if file_exists {
        fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?
    } else {
        String::new()
    };

    let result = migrate_config(&content)?;
    if !result.has_changes() {
        println!("{}", theme.primary_text("Config is already up to date."));
        return Ok(());
    }

    let question = if file_exists {
        println!(
            "{}",
            theme.primary_text(&format!(
                "Found {} missing field(s) in {} new section(s):",
                result.added_fields.len(),
                result.sections_added.len()
            ))
        );
        format!("Apply these changes to {}?", config_path.display())
    } else {
        println!(
            "{}",
            theme.primary_text("Config file does not exist. Will create it with default settings.")
        );
        format!("Create {}?", config_path.display())
    };

    println!();
    for line in preview_lines(
        &result.content,
        &result.added_fields,
        &result.sections_added,
        !file_exists,
    ) {
        match line {
            PreviewLine::Added(text) => println!("{}+ {}{}", ansi::GREEN, text, ansi::RESET),
            PreviewLine::Context(text) => println!("  {}", text),
        }
    }
    println!();

    if !assume_yes && !prompt_confirmation(&question)? {
        println!("{}", theme.primary_text("No changes made."));
        return Ok(());
    }

    if let Some(parent) = config_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&config_path, &result.content)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    println!("{}", theme.success_text("Config updated successfully."));

    Ok(())
}

/// One line of the migration preview.
#[derive(Debug, PartialEq, Eq)]
enum PreviewLine<'a> {
    Added(&'a str),
    /// Header of an existing section that gained fields
    Context(&'a str),
}

/// Pick the lines of `content` worth showing for a migration.
///
/// A section header is shown once, right before its first added field. For
/// a brand new file every non-blank line counts as added.
fn preview_lines<'a>(
    content: &'a str,
    added_fields: &[String],
    sections_added: &[String],
    is_new_file: bool,
) -> Vec<PreviewLine<'a>> {
    let mut lines = Vec::new();
    let mut section = "";
    let mut header: Option<&'a str> = None;

    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if is_new_file {
            lines.push(PreviewLine::Added(line));
            continue;
        }

        if let Some(name) = trimmed.strip_prefix('[').and_then(|t| t.strip_suffix(']')) {
            section = name.trim();
            header = Some(line);
            continue;
        }

        let Some((key, _)) = trimmed.split_once('=') else {
            continue;
        };
        let field = format!("{}.{}", section, key.trim());
        if !added_fields.contains(&field) {
            continue;
        }

        if let Some(header) = header.take() {
            if sections_added.iter().any(|s| s == section) {
                lines.push(PreviewLine::Added(header));
            } else {
                lines.push(PreviewLine::Context(header));
            }
        }
        lines.push(PreviewLine::Added(line));
    }

    lines
}

/// Ask a yes/no question on stdin.
///
/// Answers no without asking when stdin is not a terminal.
fn prompt_confirmation(message: &str) -> Result<bool> {
    let theme = current_theme();

    if !atty::is(atty::Stream::Stdin) {
        println!(
            "{}",
            theme.secondary_text("Non-interactive mode: use --yes to apply changes automatically")
        );
        return Ok(false);
    }

    print!("{} [y/N] ", theme.primary_text(message));
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input)?;

    let response = input.trim().to_lowercase();
    Ok(response == "y" || response == "yes")
}
