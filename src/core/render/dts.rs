//! Declaration-file rendering.
//!
//! [`DtsGenerator`] turns a declaration tree into [`DtsCode`], attaching a
//! translated comment block to every documented node; [`DtsCode`] then
//! renders as `.d.ts` text.

use thiserror::Error;

use crate::core::doc::{TagError, expand_records};
use crate::core::i18n::Translator;
use crate::core::model::{
    ClassShape, DeclTree, EnumMember, Modifier, NodeData, NodeId, NodeKind, Signature, TypeNode,
    TypeReference,
};
use crate::core::render::code::{Affixes, Block, CodeStyle, CommentBlock, Render, Statement};
use crate::core::render::types::{
    render_optional_type, render_parameter_nodes, render_type, render_type_parameter_nodes,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("{kind} '{name}' cannot be rendered as a standalone declaration")]
    UnrenderableNode { name: String, kind: NodeKind },
}

/// Renderable declaration-file code.
#[derive(Debug, Clone, PartialEq)]
pub enum DtsCode {
    /// A `;`-terminated declaration or member.
    Declaration(Statement),
    /// A `,`-terminated enum member.
    EnumMember(Statement),
    Block(Block<DtsCode>),
    SourceFile { name: String, body: Vec<DtsCode> },
    Root(Vec<DtsCode>),
}

fn declare_prefix(depth: i32) -> &'static str {
    if depth <= 0 { "declare " } else { "" }
}

impl Render for DtsCode {
    fn render(&self, depth: i32, style: &CodeStyle) -> String {
        match self {
            DtsCode::Declaration(statement) => statement.render_with(
                depth,
                style,
                Affixes {
                    prefix: declare_prefix(depth),
                    suffix: ";",
                },
            ),
            DtsCode::EnumMember(statement) => statement.render_with(
                depth,
                style,
                Affixes {
                    prefix: "",
                    suffix: ",",
                },
            ),
            DtsCode::Block(block) => block.render_with(depth, style, declare_prefix(depth)),
            DtsCode::SourceFile { name, body } => {
                if body.is_empty() {
                    return String::new();
                }
                let mut out = format!("{nl}// file: {name}{nl}{nl}", nl = style.newline);
                for code in body {
                    out.push_str(&code.render(0, style));
                }
                out
            }
            DtsCode::Root(files) => files.iter().map(|file| file.render(0, style)).collect(),
        }
    }
}

/// Builds [`DtsCode`] for a tree, translating comments as it goes.
pub struct DtsGenerator<'a> {
    tree: &'a DeclTree,
    translator: &'a Translator<'a>,
    languages: &'a [String],
    misplaced: Vec<TagError>,
}

impl<'a> DtsGenerator<'a> {
    pub fn new(tree: &'a DeclTree, translator: &'a Translator<'a>, languages: &'a [String]) -> Self {
        Self {
            tree,
            translator,
            languages,
            misplaced: Vec::new(),
        }
    }

    /// Tags skipped while building comments because they do not apply to
    /// their node.
    pub fn misplaced(&self) -> &[TagError] {
        &self.misplaced
    }

    pub fn into_misplaced(self) -> Vec<TagError> {
        self.misplaced
    }

    /// Render the whole tree as declaration text.
    pub fn render_text(&mut self, style: &CodeStyle) -> Result<String, RenderError> {
        let code = self.generate(self.tree.root())?;
        Ok(code.render(0, style))
    }

    pub fn generate(&mut self, id: NodeId) -> Result<DtsCode, RenderError> {
        let tree = self.tree;
        let node = tree.node(id);
        let code = match &node.data {
            NodeData::Var { ty, is_const } => {
                let keyword = if *is_const { "const" } else { "let" };
                let head = format!("{} {}:", keyword, node.name);
                DtsCode::Declaration(Statement::new([head, render_type(ty)]))
            }
            NodeData::Function(signature) => DtsCode::Declaration(Statement::new([
                format!("function {}", self.signature_head(&node.name, signature)),
                render_optional_type(signature.return_type.as_ref()),
            ])),
            NodeData::Property {
                ty,
                is_optional,
                modifiers,
            } => {
                let head = format!(
                    "{}{}{}:",
                    modifier_text(modifiers),
                    node.name,
                    if *is_optional { "?" } else { "" }
                );
                DtsCode::Declaration(Statement::new([head, render_type(ty)]))
            }
            NodeData::Method {
                signature,
                modifiers,
            } => DtsCode::Declaration(Statement::new([
                format!(
                    "{}{}",
                    modifier_text(modifiers),
                    self.signature_head(&node.name, signature)
                ),
                render_optional_type(signature.return_type.as_ref()),
            ])),
            NodeData::Constructor(signature) => DtsCode::Declaration(Statement::new([format!(
                "constructor({})",
                render_parameter_nodes(tree, &signature.parameters)
            )])),
            NodeData::Class { shape, implements } => {
                let header = Statement::new([
                    "class".to_string(),
                    self.generic_name(&node.name, &shape.type_parameters),
                    heritage("extends", &shape.extends),
                    heritage("implements", implements),
                ]);
                DtsCode::Block(Block::new(header, self.members(shape)?, " {", "}"))
            }
            NodeData::Interface(shape) => {
                let header = Statement::new([
                    "interface".to_string(),
                    self.generic_name(&node.name, &shape.type_parameters),
                    heritage("extends", &shape.extends),
                ]);
                DtsCode::Block(Block::new(header, self.members(shape)?, " {", "}"))
            }
            NodeData::Enum { members } => {
                let header = Statement::new(["enum", node.name.as_str()]);
                let body = members.iter().map(enum_member).collect();
                DtsCode::Block(Block::new(header, body, " {", "}"))
            }
            NodeData::TypeAlias {
                type_parameters,
                ty,
            } => DtsCode::Declaration(Statement::new([
                "type".to_string(),
                self.generic_name(&node.name, type_parameters),
                "=".to_string(),
                render_type(ty),
            ])),
            NodeData::Namespace { children } => {
                let header = Statement::new(["namespace", node.name.as_str()]);
                DtsCode::Block(Block::new(header, self.generate_all(children)?, " {", "}"))
            }
            NodeData::SourceFile { children } => DtsCode::SourceFile {
                name: node.name.clone(),
                body: self.generate_all(children)?,
            },
            NodeData::Root { children } => DtsCode::Root(self.generate_all(children)?),
            NodeData::Param { .. } | NodeData::TypeParameter { .. } => {
                return Err(RenderError::UnrenderableNode {
                    name: node.name.clone(),
                    kind: node.kind(),
                });
            }
        };

        let comment = self.comment(id);
        Ok(match code {
            DtsCode::Declaration(statement) => {
                DtsCode::Declaration(statement.with_comment(comment))
            }
            DtsCode::Block(block) => DtsCode::Block(block.with_comment(comment)),
            other => other,
        })
    }

    fn generate_all(&mut self, ids: &[NodeId]) -> Result<Vec<DtsCode>, RenderError> {
        ids.iter().map(|&id| self.generate(id)).collect()
    }

    /// Properties first, then methods and constructors.
    fn members(&mut self, shape: &ClassShape) -> Result<Vec<DtsCode>, RenderError> {
        let mut body = self.generate_all(&shape.properties)?;
        body.extend(self.generate_all(&shape.methods)?);
        Ok(body)
    }

    fn comment(&mut self, id: NodeId) -> Option<CommentBlock> {
        let expansion = expand_records(self.tree, id, self.languages);
        self.misplaced.extend(expansion.misplaced);
        let lines: Vec<String> = expansion
            .records
            .iter()
            .flat_map(|record| self.translator.record_lines(record))
            .collect();
        if lines.is_empty() {
            None
        } else {
            Some(CommentBlock::new(lines))
        }
    }

    fn generic_name(&self, name: &str, type_parameters: &[NodeId]) -> String {
        format!(
            "{}{}",
            name,
            render_type_parameter_nodes(self.tree, type_parameters)
        )
    }

    /// `name<T>(params):`
    fn signature_head(&self, name: &str, signature: &Signature) -> String {
        format!(
            "{}({}):",
            self.generic_name(name, &signature.type_parameters),
            render_parameter_nodes(self.tree, &signature.parameters)
        )
    }
}

fn modifier_text(modifiers: &[Modifier]) -> String {
    let mut sorted = modifiers.to_vec();
    sorted.sort();
    sorted.dedup();
    sorted
        .iter()
        .map(|modifier| format!("{} ", modifier.keyword()))
        .collect()
}

fn heritage(keyword: &str, references: &[TypeReference]) -> String {
    if references.is_empty() {
        return String::new();
    }
    let names: Vec<String> = references
        .iter()
        .map(|reference| render_type(&TypeNode::Reference(reference.clone())))
        .collect();
    format!("{} {}", keyword, names.join(", "))
}

fn enum_member(member: &EnumMember) -> DtsCode {
    DtsCode::EnumMember(Statement::new([
        member.name.as_str(),
        "=",
        member.value.as_str(),
    ]))
}
