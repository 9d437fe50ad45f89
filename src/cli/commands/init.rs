use std::fs;

use anyhow::{Context, Result, bail};
use colored::Colorize;

use super::super::{args::InitArgs, exit_status::ExitStatus, report::SUCCESS_MARK};
use crate::{
    config::{CONFIG_FILE_NAME, default_config_json},
    core::context::resolve_path,
};

/// Write the default `.catgenrc.json` into the project root.
///
/// An existing file is never overwritten; that case exits with `Failure`.
pub fn init(args: InitArgs) -> Result<ExitStatus> {
    let root_dir = args.root.unwrap_or_else(|| ".".into());
    if !root_dir.is_dir() {
        bail!("Project root is not a directory: {}", root_dir.display());
    }

    let config_path = resolve_path(&root_dir, CONFIG_FILE_NAME);
    if config_path.exists() {
        eprintln!("Error: {} already exists", config_path.display());
        return Ok(ExitStatus::Failure);
    }

    fs::write(&config_path, default_config_json()?)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    println!(
        "{} {}",
        SUCCESS_MARK.green(),
        format!("Created {}", config_path.display()).green()
    );

    Ok(ExitStatus::Success)
}
