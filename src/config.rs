//! Configuration file handling.
//!
//! The config lives at `<config_dir>/autopager/config.toml`. Every field has
//! a default, so partial files (or no file at all) load fine. Set
//! `AUTOPAGER_CONFIG_DIR` to use a different directory.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::scroller::{AutoScroller, IntermissionDuration, PendingRestartPolicy};
use crate::theme::ThemeName;

/// Environment variable overriding the config directory.
pub const CONFIG_DIR_ENV: &str = "AUTOPAGER_CONFIG_DIR";

const CONFIG_FILE: &str = "config.toml";

/// Errors that can occur while loading or saving the config.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine the user config directory")]
    NoConfigDir,

    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Failed to write config {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub autoscroll: AutoScrollConfig,
    pub pager: PagerConfig,
}

/// `[autoscroll]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutoScrollConfig {
    /// Time on each page: "short", "long" or seconds
    pub duration: IntermissionDuration,
    /// Start scrolling as soon as the pager opens
    pub enabled_on_start: bool,
    /// Stop auto scrolling when the user scrolls manually
    pub cancels_on_scroll: bool,
    /// Resume auto scrolling when a manual scroll ends
    pub restarts_on_scroll_end: bool,
    /// What an explicit enable does to a pending resume
    pub pending_restart_policy: PendingRestartPolicy,
}

impl Default for AutoScrollConfig {
    fn default() -> Self {
        Self {
            duration: IntermissionDuration::Short,
            enabled_on_start: true,
            cancels_on_scroll: true,
            restarts_on_scroll_end: false,
            pending_restart_policy: PendingRestartPolicy::ClearOnEnable,
        }
    }
}

impl AutoScrollConfig {
    /// Copy the policy flags onto `scroller` and enable it if configured.
    pub fn apply(&self, scroller: &AutoScroller) {
        scroller.set_cancels_on_scroll(self.cancels_on_scroll);
        scroller.set_restarts_on_scroll_end(self.restarts_on_scroll_end);
        scroller.set_pending_restart_policy(self.pending_restart_policy);
        if self.enabled_on_start {
            scroller.enable(Some(self.duration));
        }
    }
}

/// `[pager]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PagerConfig {
    /// Number of demo pages
    pub pages: usize,
    /// Wrap around at the first and last page on manual scrolls
    pub infinite_scroll: bool,
    /// Maximum time between redraws, in milliseconds
    pub tick_rate_ms: u64,
    /// Color preset for the demo
    pub theme: ThemeName,
}

impl Default for PagerConfig {
    fn default() -> Self {
        Self {
            pages: 5,
            infinite_scroll: false,
            tick_rate_ms: 250,
            theme: ThemeName::default(),
        }
    }
}

impl Config {
    /// Directory holding the config file.
    pub fn config_dir() -> Result<PathBuf, ConfigError> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }
        dirs::config_dir()
            .map(|dir| dir.join("autopager"))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Full path of the config file.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    /// Load the config file, falling back to defaults if it does not exist.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load from an explicit path, falling back to defaults if missing.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse config TOML.
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Render as pretty TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Save to the default location, creating the directory if needed.
    pub fn save(&self) -> Result<PathBuf, ConfigError> {
        let path = Self::config_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    /// Save to an explicit path, creating parent directories if needed.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let content = self.to_toml()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| ConfigError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(path, content).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "config saved");
        Ok(())
    }
}
