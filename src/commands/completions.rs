//! Shell completion generation.

use std::io::Write;

use clap::CommandFactory;
use clap_complete::{generate, Shell};

use playtime::cli::Cli;

/// Write the completion script for `shell` to `out`.
pub fn write(shell: Shell, out: &mut dyn Write) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, out);
}

/// Print the completion script for `shell` to stdout.
pub fn handle(shell: Shell) -> anyhow::Result<()> {
    write(shell, &mut std::io::stdout());
    Ok(())
}
