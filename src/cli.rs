//! Command-line interface definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Total up the runtime of a YouTube playlist.
#[derive(Parser, Debug)]
#[command(name = "playtime", version)]
#[command(about = "Total up the runtime of a YouTube playlist and estimate watch time at faster speeds", long_about = None)]
pub struct Cli {
    /// YouTube Data API key (overrides YOUTUBE_API_KEY and the config file)
    #[arg(long, global = true, value_name = "KEY")]
    pub api_key: Option<String>,

    /// Log debug output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open the interactive analyzer (default)
    Tui {
        /// Playlist URL to analyze on startup
        url: Option<String>,
    },

    /// Analyze a playlist and print the summary
    Analyze {
        /// Playlist URL containing a `list=` parameter
        url: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,

        /// Also copy the text summary to the clipboard
        #[arg(long)]
        copy: bool,
    },

    /// Manage the configuration file
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Print a shell completion script
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Show the effective configuration
    Show,
    /// Open the config file in $EDITOR
    Edit,
    /// Add missing fields to the config file
    Migrate {
        /// Apply without asking
        #[arg(short, long)]
        yes: bool,
    },
    /// Print the config file path
    Path,
}

impl Cli {
    /// Whether this invocation takes over the terminal.
    pub fn is_interactive(&self) -> bool {
        matches!(self.command, None | Some(Commands::Tui { .. }))
    }
}
