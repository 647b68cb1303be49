//! Subcommand handlers for the autopager binary.

pub mod config;
pub mod demo;

use std::io;

use anyhow::Result;
use clap::CommandFactory;
use clap_complete::Shell;

use autopager::cli::Cli;

/// Print shell completions to stdout.
pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    clap_complete::generate(shell, &mut command, "autopager", &mut io::stdout());
    Ok(())
}
