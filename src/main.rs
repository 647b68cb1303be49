//! autopager binary entry point

mod commands;

use anyhow::Result;
use clap::Parser;

use autopager::cli::{Cli, Commands, ConfigCommands};
use autopager::logging::{self, LogTarget};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let target = match (&cli.log_file, &cli.command) {
        (Some(path), _) => LogTarget::File(path),
        (None, Commands::Demo(_)) => LogTarget::Off,
        (None, _) => LogTarget::Stderr,
    };
    logging::init(target)?;

    match cli.command {
        Commands::Demo(args) => commands::demo::handle_demo(&args),
        Commands::Config(ConfigCommands::Show) => commands::config::handle_show(),
        Commands::Config(ConfigCommands::Path) => commands::config::handle_path(),
        Commands::Config(ConfigCommands::Init { force }) => commands::config::handle_init(force),
        Commands::Completions { shell } => commands::handle_completions(shell),
    }
}
