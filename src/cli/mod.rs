//! Command-line interface layer.
//!
//! - `args`: clap argument definitions
//! - `commands`: one module per subcommand
//! - `report`: cargo-style output of command results and issues

use anyhow::Result;

mod args;
mod commands;
mod exit_status;
mod report;

pub use args::{Arguments, AstCommand, Command, CommonArgs, KeysCommand, RenderCommand};
pub use exit_status::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let deny_warnings = args.deny_warnings();

    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    let result = match args.command {
        Some(Command::Init) => commands::init::init()?,
        Some(Command::Keys(cmd)) => commands::keys::keys(cmd)?,
        Some(Command::Render(cmd)) => commands::render::render(cmd)?,
        Some(Command::Ast(cmd)) => commands::ast::ast(cmd)?,
        None => return Ok(ExitStatus::Success),
    };

    report::print(&result);
    Ok(result.exit_status(deny_warnings))
}
