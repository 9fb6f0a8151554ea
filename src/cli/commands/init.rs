use std::{fs, path::Path};

use anyhow::{Context, Result};

use super::{CommandResult, CommandSummary, InitSummary, helper::finish};
use crate::config::{CONFIG_FILE_NAME, default_config_json};

/// Write the default config file into the current directory.
pub fn init() -> Result<CommandResult> {
    init_in(Path::new("."))
}

/// Write the default config file into `dir`.
///
/// An existing config file is left untouched and reported as an error.
pub fn init_in(dir: &Path) -> Result<CommandResult> {
    let config_path = dir.join(CONFIG_FILE_NAME);
    let path = config_path.to_string_lossy().to_string();

    let error = if config_path.exists() {
        Some(format!("{} already exists", CONFIG_FILE_NAME))
    } else {
        fs::write(&config_path, default_config_json()?)
            .with_context(|| format!("Failed to write {}", path))?;
        None
    };

    Ok(finish(
        CommandSummary::Init(InitSummary { path, error }),
        Vec::new(),
        0,
    ))
}
