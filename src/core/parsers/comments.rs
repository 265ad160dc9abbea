//! JSDoc comment collection.
//!
//! swc hands back every comment of a file keyed by position. Only `/** */`
//! blocks matter here; they are flattened into one sorted list so the
//! builder can find the doc comment of a declaration by position alone.

use std::sync::LazyLock;

use regex::Regex;
use swc_common::comments::{CommentKind, SingleThreadedComments};

/// `@tag` at the start of a comment line, after the optional `*`.
static TAG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ \t]*\*?[ \t]*@([A-Za-z_][\w-]*)").expect("valid tag regex")
});

/// Keywords allowed between a doc comment and the declaration it documents.
const MODIFIER_KEYWORDS: &[&str] = &[
    "declare",
    "export",
    "default",
    "static",
    "readonly",
    "public",
    "private",
    "protected",
    "abstract",
    "async",
    "const",
    "let",
    "var",
    "override",
];

/// A tag name and the absolute position of its `@`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTag {
    pub name: String,
    pub pos: u32,
}

/// One `/** ... */` block, positions absolute in the source map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocComment {
    pub lo: u32,
    pub hi: u32,
    pub tags: Vec<RawTag>,
}

impl DocComment {
    /// `text` is the comment body as swc stores it, without `/*` and `*/`.
    fn new(lo: u32, hi: u32, text: &str) -> Self {
        // The body starts two bytes after the comment start.
        let body_start = lo + 2;
        let tags = TAG_RE
            .captures_iter(text)
            .filter_map(|caps| caps.get(1))
            .map(|name| RawTag {
                name: name.as_str().to_string(),
                pos: body_start + name.start() as u32 - 1,
            })
            .collect();
        Self { lo, hi, tags }
    }
}

/// Doc comments of one file, sorted by position.
#[derive(Debug, Clone, Default)]
pub struct DocComments {
    comments: Vec<DocComment>,
}

impl DocComments {
    /// Extract doc comments. Must be called before `comments` is dropped.
    pub fn from_swc(comments: &SingleThreadedComments) -> Self {
        let (leading, trailing) = comments.borrow_all();
        let mut collected: Vec<DocComment> = leading
            .iter()
            .chain(trailing.iter())
            .flat_map(|(_, cmts)| cmts.iter())
            .filter(|cmt| cmt.kind == CommentKind::Block && cmt.text.starts_with('*'))
            .map(|cmt| DocComment::new(cmt.span.lo.0, cmt.span.hi.0, &cmt.text))
            .collect();
        collected.sort_by_key(|comment| comment.lo);
        collected.dedup_by_key(|comment| comment.lo);
        Self {
            comments: collected,
        }
    }

    pub fn len(&self) -> usize {
        self.comments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.comments.is_empty()
    }

    /// The doc comment attached to a declaration starting at `decl_lo`.
    ///
    /// That is the last comment ending before the declaration, provided only
    /// whitespace and modifier keywords sit between the two. `source` is the
    /// file text and `start_pos` the absolute position of its first byte.
    pub fn attached_to(&self, decl_lo: u32, source: &str, start_pos: u32) -> Option<&DocComment> {
        let index = self.comments.partition_point(|comment| comment.hi <= decl_lo);
        let comment = self.comments.get(index.checked_sub(1)?)?;

        let from = comment.hi.checked_sub(start_pos)? as usize;
        let to = decl_lo.checked_sub(start_pos)? as usize;
        let gap = source.get(from..to)?;
        gap.split_whitespace()
            .all(|word| MODIFIER_KEYWORDS.contains(&word))
            .then_some(comment)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::core::parsers::comments::*;

    fn tag_names(comment: &DocComment) -> Vec<&str> {
        comment.tags.iter().map(|tag| tag.name.as_str()).collect()
    }

    #[test]
    fn test_tags_at_line_start_only() {
        let text = "*\n * Some text mentioning @inline things\n * @deprecated\n *   @text\n * @since-v2 1.0\n ";
        let comment = DocComment::new(0, 10, text);
        assert_eq!(tag_names(&comment), vec!["deprecated", "text", "since-v2"]);
    }

    #[test]
    fn test_single_line_comment_tag() {
        let comment = DocComment::new(0, 16, "* @disable ");
        assert_eq!(tag_names(&comment), vec!["disable"]);
        // `/** @disable */`: the `@` sits at byte 4.
        assert_eq!(comment.tags[0].pos, 4);
    }

    #[test]
    fn test_attachment_requires_adjacency() {
        let source = "/** a */\ndeclare const x: number;\n/** b */\nlet y: number;\nfoo();\nlet z: number;";
        let a_hi = source.find("*/").unwrap() as u32 + 2;
        let b_lo = source.find("/** b").unwrap() as u32;
        let b_hi = b_lo + 8;
        let comments = DocComments {
            comments: vec![
                DocComment::new(0, a_hi, "* a "),
                DocComment::new(b_lo, b_hi, "* b "),
            ],
        };

        let x_lo = source.find("const x").unwrap() as u32;
        assert_eq!(comments.attached_to(x_lo, source, 0).unwrap().lo, 0);

        let y_lo = source.find("let y").unwrap() as u32;
        assert_eq!(comments.attached_to(y_lo, source, 0).unwrap().lo, b_lo);

        let z_lo = source.find("let z").unwrap() as u32;
        assert!(comments.attached_to(z_lo, source, 0).is_none());
    }

    #[test]
    fn test_attachment_with_source_map_offset() {
        let source = "/** doc */ declare function f(): void;";
        let comments = DocComments {
            comments: vec![DocComment::new(100, 110, "* doc ")],
        };
        assert!(comments.attached_to(111, source, 100).is_some());
        assert!(comments.attached_to(105, source, 100).is_none());
    }
}
