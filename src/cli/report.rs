//! Report formatting and printing utilities.
//!
//! Issues are shown in cargo style on stderr, so that rendered
//! declarations and AST dumps on stdout stay clean.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::commands::{
    AstSummary, CommandResult, CommandSummary, InitSummary, KeysSummary, RenderSummary,
};
use crate::issues::{Issue, Report, ReportLocation, Severity};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print issues in cargo-style format to stderr.
pub fn report(issues: &[Issue]) {
    report_to(issues, &mut io::stderr().lock());
}

/// Print issues to a custom writer, in the order given.
pub fn report_to<W: Write>(issues: &[Issue], writer: &mut W) {
    if issues.is_empty() {
        return;
    }

    let max_line_width = calculate_max_line_width(issues);

    for issue in issues {
        print_issue(issue, writer, max_line_width);
    }

    print_summary(issues, writer);
}

/// Print the outcome of a command, then its issues.
pub fn print(result: &CommandResult) {
    print_command_output(result, &mut io::stdout().lock(), &mut io::stderr().lock());
    report(&result.issues);
}

/// Summaries go to `writer`; a refused command explains itself on `errors`.
fn print_command_output<W: Write, E: Write>(result: &CommandResult, writer: &mut W, errors: &mut E) {
    match &result.summary {
        CommandSummary::Keys(summary) => print_keys(summary, result.file_count, writer),
        CommandSummary::Render(summary) => print_render(summary, result.file_count, writer),
        CommandSummary::Ast(summary) => print_ast(summary, writer),
        CommandSummary::Init(summary) => print_init(summary, writer, errors),
    }
}

fn print_keys<W: Write>(summary: &KeysSummary, file_count: usize, writer: &mut W) {
    let mut msg = format!(
        "Wrote {} {} from {} {} to {}",
        summary.key_count,
        plural(summary.key_count, "key", "keys"),
        file_count,
        plural(file_count, "file", "files"),
        summary.path.display()
    );
    if summary.kept_count > 0 {
        msg.push_str(&format!(
            " ({} {} kept)",
            summary.kept_count,
            plural(summary.kept_count, "translation", "translations")
        ));
    }
    let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), msg.green());
}

// Rendered text on stdout gets no trailer.
fn print_render<W: Write>(summary: &RenderSummary, file_count: usize, writer: &mut W) {
    if let Some(output) = &summary.output {
        let msg = format!(
            "Rendered {} {} in '{}' to {}",
            file_count,
            plural(file_count, "file", "files"),
            summary.language,
            output.display()
        );
        let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), msg.green());
    }
}

fn print_ast<W: Write>(summary: &AstSummary, writer: &mut W) {
    if let Some(output) = &summary.output {
        let msg = format!(
            "Wrote {} {} to {}",
            summary.node_count,
            plural(summary.node_count, "node", "nodes"),
            output.display()
        );
        let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), msg.green());
    }
}

fn print_init<W: Write, E: Write>(summary: &InitSummary, writer: &mut W, errors: &mut E) {
    if summary.created {
        let msg = format!("Created {}", summary.path.display());
        let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), msg.green());
    } else {
        let _ = writeln!(
            errors,
            "{} {} already exists, leaving it unchanged",
            FAILURE_MARK.red(),
            summary.path.display()
        );
    }
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}

// ============================================================
// Internal Functions
// ============================================================

fn print_issue<W: Write>(issue: &Issue, writer: &mut W, max_line_width: usize) {
    let severity = issue.report_severity();
    let severity_str = match severity {
        Severity::Error => "error".bold().red(),
        Severity::Warning => "warning".bold().yellow(),
    };

    let _ = writeln!(
        writer,
        "{}: {}  {}",
        severity_str,
        issue.message(),
        issue.report_rule().to_string().dimmed().cyan()
    );

    match issue.location() {
        ReportLocation::Source(ctx) => {
            let _ = writeln!(
                writer,
                "  {} {}:{}:{}",
                "-->".blue(),
                ctx.file_path(),
                ctx.line(),
                ctx.col()
            );

            let caret_char = match severity {
                Severity::Error => "^".red(),
                Severity::Warning => "^".yellow(),
            };
            let source_line = ctx.source_line.as_str();

            let _ = writeln!(
                writer,
                "{:>width$} {}",
                "",
                "|".blue(),
                width = max_line_width
            );
            let _ = writeln!(
                writer,
                "{:>width$} {} {}",
                ctx.line().to_string().blue(),
                "|".blue(),
                source_line,
                width = max_line_width
            );

            // col is 1-based
            let prefix: String = source_line.chars().take(ctx.col().saturating_sub(1)).collect();
            let caret_padding = UnicodeWidthStr::width(prefix.as_str());
            let _ = writeln!(
                writer,
                "{:>width$} {} {:>padding$}{}",
                "",
                "|".blue(),
                "",
                caret_char,
                width = max_line_width,
                padding = caret_padding
            );
        }
        ReportLocation::Key { key } => {
            let _ = writeln!(writer, "  {} {}", "-->".blue(), key);
        }
    }

    if let Some(details) = issue.details() {
        let _ = writeln!(
            writer,
            "{:>width$} {} {} {}",
            "",
            "=".blue(),
            "note:".bold(),
            details,
            width = max_line_width
        );
    }

    if let Some(hint) = issue.hint() {
        let _ = writeln!(
            writer,
            "{:>width$} {} {} {}",
            "",
            "=".blue(),
            "hint:".bold().cyan(),
            hint,
            width = max_line_width
        );
    }

    let _ = writeln!(writer);
}

fn print_summary<W: Write>(issues: &[Issue], writer: &mut W) {
    let total_errors = issues
        .iter()
        .filter(|i| i.report_severity() == Severity::Error)
        .count();
    let total_warnings = issues.len() - total_errors;

    let _ = writeln!(
        writer,
        "{} {} {} ({} {}, {} {})",
        FAILURE_MARK.red(),
        issues.len(),
        plural(issues.len(), "problem", "problems"),
        total_errors,
        plural(total_errors, "error", "errors").red(),
        total_warnings,
        plural(total_warnings, "warning", "warnings").yellow()
    );
}

fn calculate_max_line_width(issues: &[Issue]) -> usize {
    issues
        .iter()
        .filter_map(|i| match i.location() {
            ReportLocation::Source(ctx) => Some(ctx.line()),
            ReportLocation::Key { .. } => None,
        })
        .max()
        .map(|n| n.to_string().len())
        .unwrap_or(1)
}
