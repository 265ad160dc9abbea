use std::path::PathBuf;

use anyhow::{Context, Result};

use super::{CommandResult, CommandSummary, InitSummary};
use crate::config::{CONFIG_FILE_NAME, default_config_json};
use crate::utils::write_file;

/// Write a default config file into the working directory, unless one is
/// already there.
pub fn init() -> Result<CommandResult> {
    let path = PathBuf::from(CONFIG_FILE_NAME);
    let created = !path.exists();
    if created {
        let json = default_config_json()?;
        write_file(&path, &format!("{}\n", json))
            .with_context(|| format!("Failed to create {}", CONFIG_FILE_NAME))?;
    }

    Ok(CommandResult::new(
        CommandSummary::Init(InitSummary { path, created }),
        0,
        Vec::new(),
    ))
}
