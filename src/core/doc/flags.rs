//! Doc-flag engine.
//!
//! Turns the tag names found in a declaration's doc comment into the ordered
//! flag list that drives key derivation and comment rendering.

use std::{collections::HashMap, fmt};

use crate::core::model::NodeKind;

/// Tag that switches documentation off for a declaration.
pub const DISABLE_TAG: &str = "disable";

/// Tags with built-in record strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocTag {
    Deprecated,
    Text,
    Example,
    Params,
    Returns,
}

impl DocTag {
    pub const ALL: [DocTag; 5] = [
        DocTag::Deprecated,
        DocTag::Text,
        DocTag::Example,
        DocTag::Params,
        DocTag::Returns,
    ];

    pub fn name(self) -> &'static str {
        match self {
            DocTag::Deprecated => "deprecated",
            DocTag::Text => "text",
            DocTag::Example => "example",
            DocTag::Params => "params",
            DocTag::Returns => "returns",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        DocTag::ALL.into_iter().find(|tag| tag.name() == name)
    }

    /// Like [`DocTag::from_name`], also accepting the JSDoc spelling
    /// `param` that rendered comments use.
    pub fn from_source_name(name: &str) -> Option<Self> {
        match name {
            "param" => Some(DocTag::Params),
            _ => DocTag::from_name(name),
        }
    }

    /// Repeatable tags keep every occurrence; the rest are stored once.
    pub fn is_repeatable(self) -> bool {
        matches!(self, DocTag::Text)
    }
}

impl fmt::Display for DocTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Whether `name` is a tag the engine understands, `disable` included.
pub fn is_known_tag(name: &str) -> bool {
    name == DISABLE_TAG || DocTag::from_name(name).is_some()
}

fn is_repeatable(name: &str) -> bool {
    DocTag::from_name(name).is_some_and(DocTag::is_repeatable)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocFlags {
    pub enabled: bool,
    /// Tag names in record order. Empty whenever `enabled` is false.
    pub flags: Vec<String>,
}

impl DocFlags {
    pub fn enabled(flags: Vec<String>) -> Self {
        Self {
            enabled: true,
            flags,
        }
    }

    pub fn disabled() -> Self {
        Self {
            enabled: false,
            flags: Vec::new(),
        }
    }

    /// Flags to expand into records; nothing when documentation is off.
    pub fn active(&self) -> &[String] {
        if self.enabled { &self.flags[..] } else { &[] }
    }

    fn push(&mut self, name: &str) {
        if is_repeatable(name) || !self.flags.iter().any(|flag| flag == name) {
            self.flags.push(name.to_string());
        }
    }
}

/// Flags every declaration of `kind` starts with.
pub fn default_flags(kind: NodeKind) -> Vec<String> {
    let tags: &[DocTag] = match kind {
        NodeKind::Constructor => &[DocTag::Text, DocTag::Params],
        NodeKind::Function | NodeKind::Method => {
            &[DocTag::Text, DocTag::Params, DocTag::Returns]
        }
        _ => &[DocTag::Text],
    };
    tags.iter().map(|tag| tag.name().to_string()).collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagOutcome {
    pub flags: DocFlags,
    /// Indices into the input of tags the engine does not know.
    pub unknown: Vec<usize>,
}

/// Validate `tags` (in source order) against the defaults for `kind`.
///
/// Unknown tags are kept as flags and reported by index so the caller can
/// point at them. A `disable` tag wins over everything else.
pub fn build_doc_flags<S: AsRef<str>>(kind: NodeKind, tags: &[S]) -> FlagOutcome {
    let defaults = default_flags(kind);
    let mut flags = DocFlags::enabled(defaults.clone());
    let mut unknown = Vec::new();
    let mut explicit: HashMap<&str, usize> = HashMap::new();

    for (index, tag) in tags.iter().enumerate() {
        let name = match DocTag::from_source_name(tag.as_ref()) {
            Some(known) => known.name(),
            None => tag.as_ref(),
        };
        if name == DISABLE_TAG {
            return FlagOutcome {
                flags: DocFlags::disabled(),
                unknown,
            };
        }
        if !is_known_tag(name) {
            unknown.push(index);
        }
        if is_repeatable(name) {
            // Explicit occurrences first take the place of default entries.
            let seen = explicit.entry(name).or_insert(0);
            *seen += 1;
            if *seen <= defaults.iter().filter(|flag| *flag == name).count() {
                continue;
            }
        }
        flags.push(name);
    }

    FlagOutcome { flags, unknown }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::core::doc::flags::*;

    fn names(flags: &DocFlags) -> Vec<&str> {
        flags.flags.iter().map(String::as_str).collect()
    }

    #[test]
    fn test_defaults_per_kind() {
        assert_eq!(default_flags(NodeKind::Constructor), vec!["text", "params"]);
        assert_eq!(
            default_flags(NodeKind::Method),
            vec!["text", "params", "returns"]
        );
        assert_eq!(
            default_flags(NodeKind::Function),
            vec!["text", "params", "returns"]
        );
        assert_eq!(default_flags(NodeKind::Namespace), vec!["text"]);
        assert_eq!(default_flags(NodeKind::Var), vec!["text"]);
    }

    #[test]
    fn test_no_tags_gives_defaults() {
        let outcome = build_doc_flags::<&str>(NodeKind::Property, &[]);
        assert!(outcome.flags.enabled);
        assert_eq!(names(&outcome.flags), vec!["text"]);
        assert!(outcome.unknown.is_empty());
    }

    #[test]
    fn test_disable_short_circuits() {
        let outcome = build_doc_flags(NodeKind::Method, &["deprecated", "disable", "text"]);
        assert_eq!(outcome.flags, DocFlags::disabled());
        assert!(outcome.flags.active().is_empty());
    }

    #[test]
    fn test_repeatable_text_keeps_every_occurrence() {
        let outcome = build_doc_flags(NodeKind::Method, &["params", "text", "text", "text"]);
        assert_eq!(
            names(&outcome.flags),
            vec!["text", "params", "returns", "text", "text"]
        );
    }

    #[test]
    fn test_first_text_tag_takes_the_default_slot() {
        let outcome = build_doc_flags(NodeKind::Var, &["text"]);
        assert_eq!(names(&outcome.flags), vec!["text"]);

        let outcome = build_doc_flags(NodeKind::Var, &["text", "deprecated", "text"]);
        assert_eq!(names(&outcome.flags), vec!["text", "deprecated", "text"]);
    }

    #[test]
    fn test_non_repeatable_tags_are_deduplicated() {
        let outcome = build_doc_flags(
            NodeKind::Var,
            &["deprecated", "deprecated", "example", "example"],
        );
        assert_eq!(names(&outcome.flags), vec!["text", "deprecated", "example"]);
    }

    #[test]
    fn test_jsdoc_param_spelling() {
        let outcome = build_doc_flags(NodeKind::Function, &["param", "param"]);
        assert!(outcome.unknown.is_empty());
        assert_eq!(names(&outcome.flags), vec!["text", "params", "returns"]);
    }

    #[test]
    fn test_unknown_tags_are_kept_and_reported() {
        let outcome = build_doc_flags(NodeKind::Var, &["since", "deprecated", "since"]);
        assert_eq!(outcome.unknown, vec![0, 2]);
        assert_eq!(names(&outcome.flags), vec!["text", "since", "deprecated"]);
    }
}
