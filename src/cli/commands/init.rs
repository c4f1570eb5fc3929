//! Init and Config commands.

use std::path::Path;

use crate::config::Settings;
use crate::error::AdderResult;

/// Run init command - create configuration file under `root`.
pub fn run_init(root: &Path, force: bool) -> AdderResult<()> {
    let path = Settings::init_config_file(root, force)?;
    println!("Created configuration file at: {}", path.display());
    println!("Edit this file to customize your settings.");
    Ok(())
}

/// Run config command - display current configuration.
pub fn run_config(config: &Settings) -> AdderResult<()> {
    println!("Current Configuration:");
    println!("{}", "=".repeat(50));
    println!("{}", toml::to_string_pretty(config)?);
    Ok(())
}
