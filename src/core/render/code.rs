//! Language-neutral pretty-printing primitives.
//!
//! A [`Statement`] is one line of tokens with an optional comment above it;
//! a [`Block`] is a header statement followed by an indented body and a
//! closing token. Every rendered line ends with the configured newline, so
//! rendered pieces concatenate without separators.

/// Indentation and line-ending settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeStyle {
    pub indent_size: usize,
    pub newline: String,
}

impl Default for CodeStyle {
    fn default() -> Self {
        Self {
            indent_size: 4,
            newline: "\n".to_string(),
        }
    }
}

impl CodeStyle {
    pub fn indent(&self, depth: i32) -> String {
        let depth = usize::try_from(depth).unwrap_or(0);
        " ".repeat(self.indent_size * depth)
    }

    fn line(&self, depth: i32, text: &str) -> String {
        format!("{}{}{}", self.indent(depth), text, self.newline)
    }
}

pub trait Render {
    fn render(&self, depth: i32, style: &CodeStyle) -> String;
}

/// A `/** ... */` block. Renders as nothing when it has no lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentBlock {
    pub lines: Vec<String>,
}

impl CommentBlock {
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl Render for CommentBlock {
    fn render(&self, depth: i32, style: &CodeStyle) -> String {
        if self.lines.is_empty() {
            return String::new();
        }
        let mut out = style.line(depth, "/**");
        for line in &self.lines {
            out.push_str(&style.line(depth, &format!(" * {}", line)));
        }
        out.push_str(&style.line(depth, " */"));
        out
    }
}

/// Text placed around a statement's tokens at render time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Affixes<'a> {
    pub prefix: &'a str,
    pub suffix: &'a str,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Statement {
    pub tokens: Vec<String>,
    pub comment: Option<CommentBlock>,
}

impl Statement {
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tokens: tokens.into_iter().map(Into::into).collect(),
            comment: None,
        }
    }

    pub fn with_comment(mut self, comment: Option<CommentBlock>) -> Self {
        self.comment = comment;
        self
    }

    /// Non-empty tokens joined by single spaces.
    pub fn text(&self) -> String {
        self.tokens
            .iter()
            .filter(|token| !token.is_empty())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn render_with(&self, depth: i32, style: &CodeStyle, affixes: Affixes<'_>) -> String {
        let mut out = render_comment(self.comment.as_ref(), depth, style);
        let text = format!("{}{}{}", affixes.prefix, self.text(), affixes.suffix);
        out.push_str(&style.line(depth, &text));
        out
    }
}

impl Render for Statement {
    fn render(&self, depth: i32, style: &CodeStyle) -> String {
        self.render_with(depth, style, Affixes::default())
    }
}

/// Header, body one level deeper, closing token.
///
/// With an empty body the block collapses onto the header line:
/// `namespace Empty {}`.
#[derive(Debug, Clone, PartialEq)]
pub struct Block<C> {
    pub header: Statement,
    pub body: Vec<C>,
    pub open: String,
    pub close: String,
    pub comment: Option<CommentBlock>,
}

impl<C: Render> Block<C> {
    pub fn new(header: Statement, body: Vec<C>, open: &str, close: &str) -> Self {
        Self {
            header,
            body,
            open: open.to_string(),
            close: close.to_string(),
            comment: None,
        }
    }

    pub fn with_comment(mut self, comment: Option<CommentBlock>) -> Self {
        self.comment = comment;
        self
    }

    pub fn render_with(&self, depth: i32, style: &CodeStyle, prefix: &str) -> String {
        let body: String = self
            .body
            .iter()
            .map(|child| child.render(depth + 1, style))
            .collect();
        let header = format!("{}{}{}", prefix, self.header.text(), self.open);

        let mut out = render_comment(self.comment.as_ref(), depth, style);
        if body.is_empty() {
            out.push_str(&style.line(depth, &format!("{}{}", header, self.close)));
        } else {
            out.push_str(&style.line(depth, &header));
            out.push_str(&body);
            out.push_str(&style.line(depth, &self.close));
        }
        out
    }
}

impl<C: Render> Render for Block<C> {
    fn render(&self, depth: i32, style: &CodeStyle) -> String {
        self.render_with(depth, style, "")
    }
}

fn render_comment(comment: Option<&CommentBlock>, depth: i32, style: &CodeStyle) -> String {
    comment
        .map(|comment| comment.render(depth, style))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::core::render::code::*;

    fn style() -> CodeStyle {
        CodeStyle {
            indent_size: 2,
            newline: "\n".to_string(),
        }
    }

    #[test]
    fn test_statement_filters_empty_tokens() {
        let statement = Statement::new(["let", "", "x:", "number"]);
        assert_eq!(statement.render(1, &style()), "  let x: number\n");
        assert_eq!(
            statement.render_with(
                0,
                &style(),
                Affixes {
                    prefix: "declare ",
                    suffix: ";"
                }
            ),
            "declare let x: number;\n"
        );
    }

    #[test]
    fn test_empty_comment_renders_nothing() {
        assert_eq!(CommentBlock::default().render(3, &style()), "");
        let statement = Statement::new(["x"]).with_comment(Some(CommentBlock::default()));
        assert_eq!(statement.render(0, &style()), "x\n");
    }

    #[test]
    fn test_comment_is_indented_with_its_statement() {
        let comment = CommentBlock::new(vec!["first".to_string(), "second".to_string()]);
        let statement = Statement::new(["x;"]).with_comment(Some(comment));
        assert_eq!(
            statement.render(1, &style()),
            "  /**\n   * first\n   * second\n   */\n  x;\n"
        );
    }

    #[test]
    fn test_empty_block_collapses() {
        let block: Block<Statement> =
            Block::new(Statement::new(["namespace", "Empty"]), Vec::new(), " {", "}");
        assert_eq!(block.render(0, &style()), "namespace Empty {}\n");
    }

    #[test]
    fn test_nested_block_indents_body() {
        let inner = Block::new(
            Statement::new(["namespace", "Inner"]),
            vec![Statement::new(["x;"])],
            " {",
            "}",
        );
        let outer = Block::new(Statement::new(["namespace", "Outer"]), vec![inner], " {", "}");
        assert_eq!(
            outer.render(0, &style()),
            "namespace Outer {\n  namespace Inner {\n    x;\n  }\n}\n"
        );
    }

    #[test]
    fn test_crlf_newline() {
        let style = CodeStyle {
            indent_size: 4,
            newline: "\r\n".to_string(),
        };
        let block = Block::new(
            Statement::new(["enum", "E"]),
            vec![Statement::new(["A = 0,"])],
            " {",
            "}",
        );
        assert_eq!(block.render(0, &style), "enum E {\r\n    A = 0,\r\n}\r\n");
    }
}
