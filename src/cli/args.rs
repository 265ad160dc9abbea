//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `keys`: Build the translation key map of a declaration project
//! - `render`: Re-emit the declarations with translated comments
//! - `ast`: Dump the declaration tree as debug JSON
//! - `init`: Initialize a configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the common args of the command, if it has any.
    pub fn common(&self) -> Option<&CommonArgs> {
        match &self.command {
            Some(Command::Keys(cmd)) => Some(&cmd.common),
            Some(Command::Render(cmd)) => Some(&cmd.common),
            Some(Command::Ast(cmd)) => Some(&cmd.common),
            Some(Command::Init) | None => None,
        }
    }

    pub fn verbose(&self) -> bool {
        self.common().is_some_and(|common| common.verbose)
    }

    pub fn deny_warnings(&self) -> bool {
        self.common().is_some_and(|common| common.deny_warnings)
    }
}

/// Common arguments shared by all project commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Entry declaration file; referenced files are loaded too
    pub entry: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Exit with status 1 when warnings were reported
    #[arg(long)]
    pub deny_warnings: bool,
}

#[derive(Debug, Args)]
pub struct KeysCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Key map file to write (overrides config file)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Keep non-empty translations already present in the output file
    #[arg(long)]
    pub merge: bool,
}

#[derive(Debug, Args)]
pub struct RenderCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Key map file to translate from (overrides config file)
    #[arg(short, long)]
    pub keys: Option<PathBuf>,

    /// Language of the rendered comments (overrides config file)
    #[arg(short, long)]
    pub language: Option<String>,

    /// Write the declarations to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct AstCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Write the JSON to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Build the translation key map of a declaration file
    Keys(KeysCommand),
    /// Render a declaration file with translated documentation comments
    Render(RenderCommand),
    /// Print the parsed declaration tree as JSON
    Ast(AstCommand),
    /// Initialize a new .dtsi18nrc.json configuration file
    Init,
}
