//! Config subcommands handler

use anyhow::{bail, Result};

use autopager::theme::Theme;
use autopager::Config;

/// Show the effective configuration as TOML.
pub fn handle_show() -> Result<()> {
    let config = Config::load()?;
    let theme = Theme::named(config.pager.theme);
    println!("{}", theme.primary_text(config.to_toml()?.trim_end()));
    Ok(())
}

/// Print the config file path, whether or not it exists.
pub fn handle_path() -> Result<()> {
    let theme = Theme::default();
    let path = Config::config_path()?;
    println!("{}", theme.accent_text(&path.display().to_string()));
    Ok(())
}

/// Write a config file with default values.
///
/// Refuses to overwrite an existing file unless `force` is set.
pub fn handle_init(force: bool) -> Result<()> {
    let path = Config::config_path()?;
    let theme = Theme::default();

    if path.exists() && !force {
        eprintln!("{}", theme.error_text("Refusing to overwrite existing config"));
        bail!(
            "Config file already exists: {} (use --force to overwrite)",
            path.display()
        );
    }

    let path = Config::default().save()?;
    println!(
        "{}",
        theme.success_text(&format!("Wrote default config to {}", path.display()))
    );
    Ok(())
}
