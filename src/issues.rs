//! Issue types produced while processing declaration files.
//!
//! Issues are non-fatal: the pipeline keeps going and hands them back to the
//! caller. Each issue is self-contained with everything the reporter needs
//! to display it.

use enum_dispatch::enum_dispatch;

use crate::core::doc::TagError;
use crate::core::model::NodeKind;

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    UnknownTag,
    MisplacedTag,
    UnsupportedSyntax,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::UnknownTag => write!(f, "unknown-tag"),
            Rule::MisplacedTag => write!(f, "misplaced-tag"),
            Rule::UnsupportedSyntax => write!(f, "unsupported-syntax"),
        }
    }
}

// ============================================================
// Locations
// ============================================================

/// 1-based line/column position in a declaration file.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct SourceLocation {
    pub file_path: String,
    pub line: usize,
    pub col: usize,
}

impl SourceLocation {
    pub fn new(file_path: impl Into<String>, line: usize, col: usize) -> Self {
        Self {
            file_path: file_path.into(),
            line,
            col,
        }
    }
}

/// A location plus the source line it points into, for context display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceContext {
    pub location: SourceLocation,
    pub source_line: String,
}

impl SourceContext {
    pub fn new(location: SourceLocation, source_line: impl Into<String>) -> Self {
        Self {
            location,
            source_line: source_line.into(),
        }
    }

    pub fn file_path(&self) -> &str {
        &self.location.file_path
    }

    pub fn line(&self) -> usize {
        self.location.line
    }

    pub fn col(&self) -> usize {
        self.location.col
    }
}

// ============================================================
// Issue Types
// ============================================================

/// A doc tag outside the known set. It is kept and expanded with the plain
/// `<key>.<tag>` strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTagIssue {
    pub context: SourceContext,
    pub tag: String,
}

impl UnknownTagIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::UnknownTag
    }
}

/// A known tag on a declaration it does not apply to, e.g. `@params` on a
/// property. Only that tag's records are skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MisplacedTagIssue {
    /// Key of the declaration carrying the tag.
    pub key: String,
    pub tag: String,
    pub node: String,
    pub kind: NodeKind,
}

impl MisplacedTagIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::MisplacedTag
    }
}

/// A statement the declaration model does not cover. It is left out of the
/// tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsupportedSyntaxIssue {
    pub context: SourceContext,
    /// Short description of the skipped construct.
    pub syntax: String,
}

impl UnsupportedSyntaxIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::UnsupportedSyntax
    }
}

// ============================================================
// Issue Enum
// ============================================================

#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    UnknownTag(UnknownTagIssue),
    MisplacedTag(MisplacedTagIssue),
    UnsupportedSyntax(UnsupportedSyntaxIssue),
}

impl Issue {
    pub fn severity(&self) -> Severity {
        match self {
            Issue::UnknownTag(_) => UnknownTagIssue::severity(),
            Issue::MisplacedTag(_) => MisplacedTagIssue::severity(),
            Issue::UnsupportedSyntax(_) => UnsupportedSyntaxIssue::severity(),
        }
    }

    pub fn rule(&self) -> Rule {
        match self {
            Issue::UnknownTag(_) => UnknownTagIssue::rule(),
            Issue::MisplacedTag(_) => MisplacedTagIssue::rule(),
            Issue::UnsupportedSyntax(_) => UnsupportedSyntaxIssue::rule(),
        }
    }
}

impl From<TagError> for Issue {
    fn from(err: TagError) -> Self {
        match err {
            TagError::WrongNode {
                tag,
                node,
                kind,
                key,
            } => Issue::MisplacedTag(MisplacedTagIssue {
                key,
                tag,
                node,
                kind,
            }),
        }
    }
}

// ============================================================
// Report Trait (for CLI output)
// ============================================================

/// Location information for report output.
pub enum ReportLocation<'a> {
    /// Position in a declaration file, with the source line.
    Source(&'a SourceContext),
    /// A declaration identified by its key.
    Key { key: &'a str },
}

/// Trait for types that can be reported to CLI.
#[enum_dispatch]
pub trait Report {
    fn location(&self) -> ReportLocation<'_>;

    /// Primary message to display.
    fn message(&self) -> String;

    fn report_severity(&self) -> Severity;

    fn report_rule(&self) -> Rule;

    /// Optional hint for fixing the issue.
    fn hint(&self) -> Option<&str> {
        None
    }

    /// Optional details for the "= note:" line.
    fn details(&self) -> Option<String> {
        None
    }
}

// ============================================================
// Report Implementations
// ============================================================

impl Report for UnknownTagIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Source(&self.context)
    }

    fn message(&self) -> String {
        format!("unknown doc tag '@{}'", self.tag)
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn hint(&self) -> Option<&str> {
        Some("known tags: @text, @deprecated, @example, @params, @returns, @disable")
    }
}

impl Report for MisplacedTagIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Key { key: &self.key }
    }

    fn message(&self) -> String {
        format!("'@{}' is not allowed on {} '{}'", self.tag, self.kind, self.node)
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some("only functions, methods and constructors take this tag".to_string())
    }
}

impl Report for UnsupportedSyntaxIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Source(&self.context)
    }

    fn message(&self) -> String {
        format!("{} is not supported and was skipped", self.syntax)
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }
}

// ============================================================
// Ordering for Issue (for sorting in reports)
// ============================================================

impl Issue {
    /// Source issues first, by file and position; key issues after, by key.
    pub fn sort_key(&self) -> (u8, String, usize, usize) {
        match self.location() {
            ReportLocation::Source(ctx) => (0, ctx.file_path().to_string(), ctx.line(), ctx.col()),
            ReportLocation::Key { key } => (1, key.to_string(), 0, 0),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::issues::*;

    fn unknown_tag(line: usize) -> Issue {
        Issue::UnknownTag(UnknownTagIssue {
            context: SourceContext::new(
                SourceLocation::new("./types/index.d.ts", line, 8),
                "     * @since 1.0",
            ),
            tag: "since".to_string(),
        })
    }

    #[test]
    fn test_rule_display() {
        assert_eq!(Rule::UnknownTag.to_string(), "unknown-tag");
        assert_eq!(Rule::MisplacedTag.to_string(), "misplaced-tag");
        assert_eq!(Rule::UnsupportedSyntax.to_string(), "unsupported-syntax");
        assert_eq!(Severity::Warning.to_string(), "warning");
    }

    #[test]
    fn test_tag_error_becomes_misplaced_tag() {
        let issue = Issue::from(TagError::WrongNode {
            tag: "returns".to_string(),
            node: "count".to_string(),
            kind: NodeKind::Property,
            key: "shapes.circle.count".to_string(),
        });
        assert_eq!(issue.rule(), Rule::MisplacedTag);
        assert_eq!(issue.severity(), Severity::Warning);
        assert_eq!(issue.message(), "'@returns' is not allowed on Property 'count'");
        assert!(matches!(
            issue.location(),
            ReportLocation::Key { key: "shapes.circle.count" }
        ));
    }

    #[test]
    fn test_unknown_tag_report() {
        let issue = unknown_tag(3);
        assert_eq!(issue.message(), "unknown doc tag '@since'");
        assert!(issue.hint().is_some());
        assert_eq!(issue.report_rule(), Rule::UnknownTag);
    }

    #[test]
    fn test_sort_key_orders_source_before_key_issues() {
        let misplaced = Issue::MisplacedTag(MisplacedTagIssue {
            key: "a".to_string(),
            tag: "params".to_string(),
            node: "a".to_string(),
            kind: NodeKind::Var,
        });
        let mut issues = vec![misplaced, unknown_tag(9), unknown_tag(2)];
        issues.sort_by_key(Issue::sort_key);
        assert_eq!(issues[0], unknown_tag(2));
        assert_eq!(issues[1], unknown_tag(9));
        assert_eq!(issues[2].rule(), Rule::MisplacedTag);
    }
}
