//! Declaration nodes.
//!
//! Nodes live in the arena of a [`DeclTree`](super::DeclTree) and refer to
//! each other through [`NodeId`]s. Owners list their children by id; every
//! node also records its parent id, which is non-owning and only consulted
//! for key derivation.

use std::fmt;

use crate::core::doc::DocFlags;
use crate::core::model::types::{TypeNode, TypeReference};

/// Index of a node inside its tree's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Var,
    Param,
    Function,
    Class,
    Property,
    Method,
    Constructor,
    Enum,
    Namespace,
    Interface,
    TypeAlias,
    SourceFile,
    Root,
    TypeParameter,
}

impl NodeKind {
    pub fn index(self) -> usize {
        self as usize
    }

    /// Function, Method and Constructor: kinds that own parameters.
    pub fn is_function_like(self) -> bool {
        matches!(
            self,
            NodeKind::Function | NodeKind::Method | NodeKind::Constructor
        )
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Member modifiers that survive into declaration output.
///
/// The derived order is the order modifiers are printed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Modifier {
    Static,
    Readonly,
}

impl Modifier {
    pub fn keyword(self) -> &'static str {
        match self {
            Modifier::Static => "static",
            Modifier::Readonly => "readonly",
        }
    }
}

/// Parameters, return type and generics shared by function-like nodes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Signature {
    /// `Param` nodes, in declaration order.
    pub parameters: Vec<NodeId>,
    pub return_type: Option<TypeNode>,
    /// `TypeParameter` nodes, in declaration order.
    pub type_parameters: Vec<NodeId>,
}

/// Members and heritage shared by classes and interfaces.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClassShape {
    /// `Property` nodes.
    pub properties: Vec<NodeId>,
    /// `Method` and `Constructor` nodes.
    pub methods: Vec<NodeId>,
    pub extends: Vec<TypeReference>,
    pub type_parameters: Vec<NodeId>,
}

/// One enum member. `value` is the initializer text, or the member's
/// position when it has none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumMember {
    pub name: String,
    pub value: String,
}

impl EnumMember {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Kind-specific payload of a node.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeData {
    Var {
        ty: TypeNode,
        is_const: bool,
    },
    Param {
        ty: TypeNode,
        is_optional: bool,
        is_rest: bool,
    },
    Function(Signature),
    Class {
        shape: ClassShape,
        implements: Vec<TypeReference>,
    },
    Property {
        ty: TypeNode,
        is_optional: bool,
        modifiers: Vec<Modifier>,
    },
    Method {
        signature: Signature,
        modifiers: Vec<Modifier>,
    },
    Constructor(Signature),
    Enum {
        members: Vec<EnumMember>,
    },
    Namespace {
        children: Vec<NodeId>,
    },
    Interface(ClassShape),
    TypeAlias {
        type_parameters: Vec<NodeId>,
        ty: TypeNode,
    },
    SourceFile {
        children: Vec<NodeId>,
    },
    Root {
        children: Vec<NodeId>,
    },
    TypeParameter {
        constraint: Option<TypeNode>,
    },
}

impl NodeData {
    pub fn kind(&self) -> NodeKind {
        match self {
            NodeData::Var { .. } => NodeKind::Var,
            NodeData::Param { .. } => NodeKind::Param,
            NodeData::Function(_) => NodeKind::Function,
            NodeData::Class { .. } => NodeKind::Class,
            NodeData::Property { .. } => NodeKind::Property,
            NodeData::Method { .. } => NodeKind::Method,
            NodeData::Constructor(_) => NodeKind::Constructor,
            NodeData::Enum { .. } => NodeKind::Enum,
            NodeData::Namespace { .. } => NodeKind::Namespace,
            NodeData::Interface(_) => NodeKind::Interface,
            NodeData::TypeAlias { .. } => NodeKind::TypeAlias,
            NodeData::SourceFile { .. } => NodeKind::SourceFile,
            NodeData::Root { .. } => NodeKind::Root,
            NodeData::TypeParameter { .. } => NodeKind::TypeParameter,
        }
    }

    /// The signature of a function-like node.
    pub fn signature(&self) -> Option<&Signature> {
        match self {
            NodeData::Function(signature)
            | NodeData::Constructor(signature)
            | NodeData::Method { signature, .. } => Some(signature),
            _ => None,
        }
    }

    /// Owned child ids in traversal order: container children, then
    /// properties before methods, then parameters, then type parameters.
    pub fn children(&self) -> Vec<NodeId> {
        match self {
            NodeData::Namespace { children }
            | NodeData::SourceFile { children }
            | NodeData::Root { children } => children.clone(),
            NodeData::Class { shape, .. } | NodeData::Interface(shape) => shape
                .properties
                .iter()
                .chain(&shape.methods)
                .chain(&shape.type_parameters)
                .copied()
                .collect(),
            NodeData::Function(signature)
            | NodeData::Constructor(signature)
            | NodeData::Method { signature, .. } => signature
                .parameters
                .iter()
                .chain(&signature.type_parameters)
                .copied()
                .collect(),
            NodeData::TypeAlias {
                type_parameters, ..
            } => type_parameters.clone(),
            NodeData::Var { .. }
            | NodeData::Param { .. }
            | NodeData::Property { .. }
            | NodeData::Enum { .. }
            | NodeData::TypeParameter { .. } => Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub name: String,
    pub doc_flags: Option<DocFlags>,
    pub parent: Option<NodeId>,
    pub data: NodeData,
}

impl Node {
    pub fn new(name: impl Into<String>, doc_flags: Option<DocFlags>, data: NodeData) -> Self {
        Self {
            name: name.into(),
            doc_flags,
            parent: None,
            data,
        }
    }

    pub fn kind(&self) -> NodeKind {
        self.data.kind()
    }
}
