use std::path::PathBuf;

use anyhow::Result;

use super::super::args::RenderCommand;
use super::{CommandContext, CommandResult, CommandSummary, RenderSummary};
use crate::core::i18n::{KeyMap, Translator};
use crate::core::render::DtsGenerator;
use crate::issues::Issue;
use crate::utils::write_file;

pub fn render(cmd: RenderCommand) -> Result<CommandResult> {
    let ctx = CommandContext::new(&cmd.common)?;

    // An explicit key map must exist; the configured one may not yet.
    let keys = match &cmd.keys {
        Some(path) => KeyMap::load(path)?,
        None => {
            let path = PathBuf::from(&ctx.config.keys_file);
            if path.exists() {
                KeyMap::load(&path)?
            } else {
                if ctx.verbose {
                    eprintln!(
                        "Note: {} not found, rendering untranslated keys",
                        path.display()
                    );
                }
                KeyMap::new()
            }
        }
    };

    let language = cmd
        .language
        .clone()
        .unwrap_or_else(|| ctx.config.language.clone());
    let translator = Translator::new(&keys, &language, ctx.config.comment_max_width);
    let mut generator = DtsGenerator::new(
        &ctx.project.tree,
        &translator,
        &ctx.config.supported_languages,
    );
    let text = generator.render_text(&ctx.config.code_style())?;
    let misplaced = generator.into_misplaced();

    match &cmd.output {
        Some(path) => write_file(path, &text)?,
        None => print!("{}", text),
    }

    let file_count = ctx.file_count();
    let mut issues = ctx.project.issues;
    issues.extend(misplaced.into_iter().map(Issue::from));

    Ok(CommandResult::new(
        CommandSummary::Render(RenderSummary {
            output: cmd.output,
            language,
        }),
        file_count,
        issues,
    ))
}
