//! CLI definitions for autopager
//!
//! Lives in the library so `xtask` can generate the man page from the
//! same definitions the binary parses.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use crate::scroller::IntermissionDuration;

/// Version string with build metadata.
#[cfg(not(feature = "release"))]
pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_SHA"),
    ", built ",
    env!("AUTOPAGER_BUILD_DATE"),
    ")"
);

/// Version string with build metadata.
#[cfg(feature = "release")]
pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (built ",
    env!("AUTOPAGER_BUILD_DATE"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "autopager")]
#[command(version, long_version = LONG_VERSION)]
#[command(about = "Paged container with a timer-driven auto scroller")]
#[command(
    long_about = "Autopager shows a set of pages and advances them on a repeating timer.\n\n\
    Manual scrolling cancels auto scrolling; depending on the configuration\n\
    it resumes when the scroll ends.\n\n\
    Configuration is read from <config_dir>/autopager/config.toml\n\
    (override the directory with AUTOPAGER_CONFIG_DIR)."
)]
pub struct Cli {
    /// Write logs to this file (filter with AUTOPAGER_LOG, default "warn")
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open the interactive pager demo in the terminal
    #[command(long_about = "Open the interactive pager demo.\n\n\
    Arrow keys scroll manually, space toggles auto scrolling, ? shows all keys.\n\
    Flags override the values from the config file.\n\n\
    EXAMPLES:\n    \
    autopager demo\n    \
    autopager demo --pages 8 --duration long\n    \
    autopager demo --duration 2.5 --restart-on-scroll-end")]
    Demo(DemoArgs),

    /// Manage the configuration file
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct DemoArgs {
    /// Number of pages to show
    #[arg(long, value_name = "N")]
    pub pages: Option<usize>,

    /// Time on each page: short (5s), long (10s) or seconds
    #[arg(long, value_name = "DURATION")]
    pub duration: Option<IntermissionDuration>,

    /// Start with auto scrolling disabled
    #[arg(long)]
    pub paused: bool,

    /// Keep auto scrolling while the user scrolls manually
    #[arg(long)]
    pub no_cancel_on_scroll: bool,

    /// Resume auto scrolling when a manual scroll ends
    #[arg(long)]
    pub restart_on_scroll_end: bool,

    /// Wrap around at the first and last page
    #[arg(long)]
    pub infinite: bool,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML
    Show,
    /// Print the config file path
    Path,
    /// Write a config file with default values
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
