//! Tracing subscriber setup for the binary.
//!
//! The filter comes from `AUTOPAGER_LOG` (same syntax as `RUST_LOG`),
//! defaulting to `warn`. The demo owns the terminal, so it only logs when a
//! log file is given; other commands log to stderr.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "AUTOPAGER_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Where log output should go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget<'a> {
    /// Append to a file
    File(&'a Path),
    Stderr,
    /// Drop all output
    Off,
}

/// Install the global subscriber. Call once, early in `main`.
pub fn init(target: LogTarget<'_>) -> Result<()> {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let (file_layer, stderr_layer) = match target {
        LogTarget::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            let layer = fmt::layer().with_ansi(false).with_writer(Mutex::new(file));
            (Some(layer), None)
        }
        LogTarget::Stderr => (None, Some(fmt::layer().with_writer(std::io::stderr))),
        LogTarget::Off => return Ok(()),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(stderr_layer)
        .try_init()
        .context("Failed to install log subscriber")?;
    Ok(())
}
