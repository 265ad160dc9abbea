use anyhow::Result;

use super::super::args::AstCommand;
use super::{AstSummary, CommandContext, CommandResult, CommandSummary};
use crate::core::model::debug::tree_to_string;
use crate::utils::write_file;

/// Indentation of the JSON dump.
const JSON_INDENT: usize = 4;

pub fn ast(cmd: AstCommand) -> Result<CommandResult> {
    let ctx = CommandContext::new(&cmd.common)?;
    let mut json = tree_to_string(&ctx.project.tree, JSON_INDENT)?;
    json.push('\n');

    match &cmd.output {
        Some(path) => write_file(path, &json)?,
        None => print!("{}", json),
    }

    let file_count = ctx.file_count();
    let node_count = ctx.project.tree.len();
    Ok(CommandResult::new(
        CommandSummary::Ast(AstSummary {
            output: cmd.output,
            node_count,
        }),
        file_count,
        ctx.project.issues,
    ))
}
