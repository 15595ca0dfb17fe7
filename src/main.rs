//! playtime CLI entry point.

mod commands;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use playtime::cli::{Cli, Commands, ConfigCommands};
use playtime::theme::{current_theme, set_theme, theme_for};
use playtime::{logging, Config};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let target = logging::target_for(cli.log_file.as_deref(), cli.is_interactive());
    let _guard = match logging::init(cli.verbose, target) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            return ExitCode::FAILURE;
        }
    };

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "Command failed");
            eprintln!("{}", current_theme().error_text(&format!("Error: {:#}", e)));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    // Completions and `config path` must work even with a broken config file.
    match &cli.command {
        Some(Commands::Completions { shell }) => return commands::completions::handle(*shell),
        Some(Commands::Config(ConfigCommands::Path)) => return commands::config::handle_path(),
        Some(Commands::Config(ConfigCommands::Edit)) => return commands::config::handle_edit(),
        Some(Commands::Config(ConfigCommands::Migrate { yes })) => {
            return commands::config::handle_migrate(*yes)
        }
        _ => {}
    }

    let config = Config::load()?;
    let mut theme = theme_for(&config.ui.theme);
    if !cli.is_interactive() && !atty::is(atty::Stream::Stdout) {
        theme = theme.without_ansi();
    }
    set_theme(theme);

    let api_key = cli.api_key.as_deref();
    match cli.command {
        None => commands::tui::handle(&config, api_key, None),
        Some(Commands::Tui { url }) => commands::tui::handle(&config, api_key, url.as_deref()),
        Some(Commands::Analyze { url, json, copy }) => {
            commands::analyze::handle(&config, api_key, &url, json, copy)
        }
        Some(Commands::Config(ConfigCommands::Show)) => commands::config::handle_show(&config),
        Some(Commands::Config(_)) | Some(Commands::Completions { .. }) => Ok(()),
    }
}
