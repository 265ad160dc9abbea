use std::path::PathBuf;

use anyhow::Result;

use super::super::args::KeysCommand;
use super::{CommandContext, CommandResult, CommandSummary, KeysSummary};
use crate::core::i18n::{KeyMap, build_key_map};
use crate::issues::Issue;

pub fn keys(cmd: KeysCommand) -> Result<CommandResult> {
    let ctx = CommandContext::new(&cmd.common)?;
    let outcome = build_key_map(&ctx.project.tree, &ctx.config.supported_languages);
    let mut keys = outcome.keys;

    let path = cmd
        .output
        .unwrap_or_else(|| PathBuf::from(&ctx.config.keys_file));

    let kept_count = if cmd.merge && path.exists() {
        let previous = KeyMap::load(&path)?;
        keys.merge_from(&previous)
    } else {
        0
    };
    if ctx.verbose && cmd.merge && !path.exists() {
        eprintln!("Note: {} does not exist yet, nothing to merge", path.display());
    }
    keys.save(&path)?;

    let file_count = ctx.file_count();
    let mut issues = ctx.project.issues;
    issues.extend(outcome.misplaced.into_iter().map(Issue::from));

    Ok(CommandResult::new(
        CommandSummary::Keys(KeysSummary {
            path,
            key_count: keys.len(),
            kept_count,
        }),
        file_count,
        issues,
    ))
}
