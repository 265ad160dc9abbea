use std::env;

use anyhow::{Context, Result};

use super::super::args::CommonArgs;
use crate::config::{CONFIG_FILE_NAME, Config, load_config};
use crate::core::project::Project;

/// Configuration plus the loaded declaration project, shared by the
/// project commands.
pub struct CommandContext {
    pub config: Config,
    pub project: Project,
    pub verbose: bool,
}

impl CommandContext {
    /// Load the config found from the working directory, then the entry
    /// file and everything it references.
    pub fn new(common_args: &CommonArgs) -> Result<Self> {
        let verbose = common_args.verbose;
        let current_dir = env::current_dir().context("Failed to read current directory")?;

        let config_result = load_config(&current_dir)?;
        if verbose {
            match &config_result.path {
                Some(path) => eprintln!("Note: Using config {}", path.display()),
                None => eprintln!(
                    "Note: No {} found, using default configuration",
                    CONFIG_FILE_NAME
                ),
            }
        }
        let config = config_result.config;

        let project = Project::load(&common_args.entry, &config.ignores)
            .with_context(|| format!("Failed to load {}", common_args.entry.display()))?;

        if verbose {
            for file in &project.files {
                eprintln!("Note: Loaded {}", file.display());
            }
            for file in &project.ignored {
                eprintln!("Note: Ignored {}", file.display());
            }
        }

        Ok(Self {
            config,
            project,
            verbose,
        })
    }

    pub fn file_count(&self) -> usize {
        self.project.files.len()
    }
}
