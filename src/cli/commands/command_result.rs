use std::path::PathBuf;

use crate::issues::{Issue, Severity};

use super::super::exit_status::ExitStatus;

#[derive(Debug)]
pub enum CommandSummary {
    Keys(KeysSummary),
    Render(RenderSummary),
    Ast(AstSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct KeysSummary {
    pub path: PathBuf,
    pub key_count: usize,
    /// Translations carried over from the previous key map.
    pub kept_count: usize,
}

#[derive(Debug)]
pub struct RenderSummary {
    /// `None` when the declarations went to stdout.
    pub output: Option<PathBuf>,
    pub language: String,
}

#[derive(Debug)]
pub struct AstSummary {
    pub output: Option<PathBuf>,
    pub node_count: usize,
}

#[derive(Debug)]
pub struct InitSummary {
    pub path: PathBuf,
    /// `false` when a config file was already present.
    pub created: bool,
}

/// Result of running a command
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    /// Number of declaration files loaded.
    pub file_count: usize,
    /// Non-fatal issues, sorted for display.
    pub issues: Vec<Issue>,
}

impl CommandResult {
    pub fn new(summary: CommandSummary, file_count: usize, mut issues: Vec<Issue>) -> Self {
        issues.sort_by_key(Issue::sort_key);
        Self {
            summary,
            file_count,
            issues,
        }
    }

    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    fn count(&self, severity: Severity) -> usize {
        self.issues
            .iter()
            .filter(|issue| issue.severity() == severity)
            .count()
    }

    /// Errors always fail the run; warnings only with `--deny-warnings`.
    pub fn exit_status(&self, deny_warnings: bool) -> ExitStatus {
        let refused = matches!(
            &self.summary,
            CommandSummary::Init(InitSummary { created: false, .. })
        );
        if refused || self.error_count() > 0 || (deny_warnings && self.warning_count() > 0) {
            ExitStatus::Failure
        } else {
            ExitStatus::Success
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::cli::commands::command_result::*;

    fn init_result(created: bool) -> CommandResult {
        CommandResult::new(
            CommandSummary::Init(InitSummary {
                path: PathBuf::from(".dtsi18nrc.json"),
                created,
            }),
            0,
            Vec::new(),
        )
    }

    #[test]
    fn test_init_exit_status() {
        assert_eq!(init_result(true).exit_status(false), ExitStatus::Success);
        assert_eq!(init_result(false).exit_status(false), ExitStatus::Failure);
    }
}
