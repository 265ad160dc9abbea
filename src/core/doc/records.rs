//! Record strategies: how one doc flag expands into translatable lines.
//!
//! Each flag on a node maps to zero or more [`DocRecord`]s, one per rendered
//! comment line (or line group). The mapping is a constant table keyed by tag
//! name; tags without an entry fall back to a single `<base>.<tag>` record.

use thiserror::Error;

use crate::core::doc::flags::DocTag;
use crate::core::i18n::key::node_key;
use crate::core::model::{DeclTree, NodeId, NodeKind};

/// One translatable comment entry: its key and the literal text printed in
/// front of the translated value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocRecord {
    pub key: String,
    pub prefix: String,
}

impl DocRecord {
    pub fn new(key: impl Into<String>, prefix: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            prefix: prefix.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TagError {
    #[error("'{node}' is a {kind}, which does not take a '{tag}' tag")]
    WrongNode {
        tag: String,
        node: String,
        kind: NodeKind,
        /// Key of the offending node.
        key: String,
    },
}

/// Everything a strategy may look at.
pub struct RecordContext<'a> {
    pub tree: &'a DeclTree,
    pub node: NodeId,
    pub base_key: &'a str,
    pub tag: &'a str,
    /// How many times this tag appeared earlier in the node's flag list.
    pub occurrence: usize,
    /// How many times this tag appears in the node's flag list overall.
    pub count: usize,
    pub languages: &'a [String],
}

impl RecordContext<'_> {
    fn wrong_node(&self) -> TagError {
        let node = self.tree.node(self.node);
        TagError::WrongNode {
            tag: self.tag.to_string(),
            node: node.name.clone(),
            kind: node.kind(),
            key: self.base_key.to_string(),
        }
    }
}

pub type RecordStrategy = fn(&RecordContext<'_>) -> Result<Vec<DocRecord>, TagError>;

pub const STRATEGIES: &[(&str, RecordStrategy)] = &[
    ("deprecated", deprecated_records),
    ("text", text_records),
    ("example", example_records),
    ("params", param_records),
    ("returns", returns_records),
];

fn strategy_for(tag: &str) -> RecordStrategy {
    STRATEGIES
        .iter()
        .find(|(name, _)| *name == tag)
        .map(|(_, strategy)| *strategy)
        .unwrap_or(plain_records)
}

fn deprecated_records(ctx: &RecordContext<'_>) -> Result<Vec<DocRecord>, TagError> {
    Ok(vec![DocRecord::new(
        format!("{}.{}", ctx.base_key, DocTag::Deprecated),
        "@deprecated",
    )])
}

/// A lone text record has no prefix. Several are each marked `@text` so the
/// rendered comment parses back to the same number of occurrences.
fn text_records(ctx: &RecordContext<'_>) -> Result<Vec<DocRecord>, TagError> {
    let prefix = if ctx.count > 1 { "@text" } else { "" };
    Ok(vec![DocRecord::new(
        format!("{}.text{}", ctx.base_key, ctx.occurrence),
        prefix,
    )])
}

fn example_records(ctx: &RecordContext<'_>) -> Result<Vec<DocRecord>, TagError> {
    Ok(ctx
        .languages
        .iter()
        .map(|language| {
            DocRecord::new(format!("{}.example.{}", ctx.base_key, language), "@example")
        })
        .collect())
}

fn param_records(ctx: &RecordContext<'_>) -> Result<Vec<DocRecord>, TagError> {
    let signature = ctx
        .tree
        .node(ctx.node)
        .data
        .signature()
        .ok_or_else(|| ctx.wrong_node())?;
    Ok(signature
        .parameters
        .iter()
        .map(|&param| {
            let name = &ctx.tree.node(param).name;
            DocRecord::new(
                format!("{}.param.{}", ctx.base_key, name),
                format!("@param {}", name),
            )
        })
        .collect())
}

fn returns_records(ctx: &RecordContext<'_>) -> Result<Vec<DocRecord>, TagError> {
    if !ctx.tree.node(ctx.node).kind().is_function_like() {
        return Err(ctx.wrong_node());
    }
    Ok(vec![DocRecord::new(
        format!("{}.returns", ctx.base_key),
        "@returns",
    )])
}

fn plain_records(ctx: &RecordContext<'_>) -> Result<Vec<DocRecord>, TagError> {
    Ok(vec![DocRecord::new(
        format!("{}.{}", ctx.base_key, ctx.tag),
        format!("@{}", ctx.tag),
    )])
}

/// Records of one node, in flag order, plus the tags that could not be
/// expanded on this kind of node.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RecordExpansion {
    pub records: Vec<DocRecord>,
    pub misplaced: Vec<TagError>,
}

/// Expand the active doc flags of `node` into records.
///
/// Both the key-map pass and the renderer go through here, so occurrence
/// numbering of repeatable tags is identical on both sides.
pub fn expand_records(tree: &DeclTree, node: NodeId, languages: &[String]) -> RecordExpansion {
    let mut expansion = RecordExpansion::default();
    let Some(flags) = &tree.node(node).doc_flags else {
        return expansion;
    };
    let active = flags.active();
    if active.is_empty() {
        return expansion;
    }

    let base_key = node_key(tree, node);
    for (position, tag) in active.iter().enumerate() {
        let occurrence = active[..position].iter().filter(|t| *t == tag).count();
        let count = active.iter().filter(|t| *t == tag).count();
        let ctx = RecordContext {
            tree,
            node,
            base_key: &base_key,
            tag,
            occurrence,
            count,
            languages,
        };
        match strategy_for(tag)(&ctx) {
            Ok(records) => expansion.records.extend(records),
            Err(err) => expansion.misplaced.push(err),
        }
    }
    expansion
}
