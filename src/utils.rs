//! Common utility functions shared across the codebase.

use std::{fs, path::Path};

use anyhow::{Context, Result};

/// Write `content` to `path`, creating missing parent directories first.
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {:?}", parent))?;
    }
    fs::write(path, content).with_context(|| format!("Failed to write file: {:?}", path))
}
