//! Structural type grammar used by declarations.
//!
//! Types are plain owned values: every `TypeNode` is exclusively owned by the
//! declaration (or the enclosing type) that contains it, so the grammar is a
//! strict tree and never needs parent links.

use std::fmt;

/// Discriminant of a [`TypeNode`], used for debug output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKind {
    Basic,
    Literal,
    Function,
    Union,
    Array,
    Tuple,
    TypeReference,
    TypeLiteral,
}

impl TypeKind {
    pub const ALL: [TypeKind; 8] = [
        TypeKind::Basic,
        TypeKind::Literal,
        TypeKind::Function,
        TypeKind::Union,
        TypeKind::Array,
        TypeKind::Tuple,
        TypeKind::TypeReference,
        TypeKind::TypeLiteral,
    ];

    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TypeKind::Basic => "Basic",
            TypeKind::Literal => "Literal",
            TypeKind::Function => "Function",
            TypeKind::Union => "Union",
            TypeKind::Array => "Array",
            TypeKind::Tuple => "Tuple",
            TypeKind::TypeReference => "TypeReference",
            TypeKind::TypeLiteral => "TypeLiteral",
        };
        write!(f, "{}", label)
    }
}

/// Built-in keyword types.
///
/// `Integer` and `Float` come from the `dint` / `dfloat` placeholder aliases
/// and both render as `number`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BasicType {
    Boolean,
    Number,
    Integer,
    Float,
    String,
    Void,
    Any,
    Unknown,
    Never,
    Null,
    Undefined,
    Object,
}

impl BasicType {
    pub fn index(self) -> usize {
        self as usize
    }

    /// The TypeScript keyword this type renders as.
    pub fn keyword(self) -> &'static str {
        match self {
            BasicType::Boolean => "boolean",
            BasicType::Number | BasicType::Integer | BasicType::Float => "number",
            BasicType::String => "string",
            BasicType::Void => "void",
            BasicType::Any => "any",
            BasicType::Unknown => "unknown",
            BasicType::Never => "never",
            BasicType::Null => "null",
            BasicType::Undefined => "undefined",
            BasicType::Object => "object",
        }
    }

    /// Resolve a placeholder alias (`dint`, `dbool`, ...) used in source
    /// declarations in place of a keyword.
    pub fn from_alias(name: &str) -> Option<Self> {
        match name {
            "dbool" => Some(BasicType::Boolean),
            "dint" => Some(BasicType::Integer),
            "dfloat" => Some(BasicType::Float),
            "dstring" => Some(BasicType::String),
            "dvoid" => Some(BasicType::Void),
            "dany" => Some(BasicType::Any),
            _ => None,
        }
    }
}

impl fmt::Display for BasicType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A generic parameter on a function type, e.g. `T extends string` in
/// `<T extends string>() => T`.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeParam {
    pub name: String,
    pub constraint: Option<Box<TypeNode>>,
}

impl TypeParam {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            constraint: None,
        }
    }

    pub fn with_constraint(name: impl Into<String>, constraint: TypeNode) -> Self {
        Self {
            name: name.into(),
            constraint: Some(Box::new(constraint)),
        }
    }
}

/// A named, typed slot: a function-type parameter or a type-literal member.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeSlot {
    pub name: String,
    pub ty: TypeNode,
    pub optional: bool,
}

impl TypeSlot {
    pub fn new(name: impl Into<String>, ty: TypeNode) -> Self {
        Self {
            name: name.into(),
            ty,
            optional: false,
        }
    }

    pub fn optional(name: impl Into<String>, ty: TypeNode) -> Self {
        Self {
            name: name.into(),
            ty,
            optional: true,
        }
    }
}

/// `(params) => ret`, optionally generic.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionType {
    pub type_params: Vec<TypeParam>,
    pub params: Vec<TypeSlot>,
    pub return_type: Box<TypeNode>,
}

/// A named type, optionally applied to generic arguments: `Name<A, B>`.
///
/// Also the fallback for type forms outside the grammar, in which case
/// `name` holds the verbatim source text.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeReference {
    pub name: String,
    pub args: Vec<TypeNode>,
}

impl TypeReference {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
        }
    }

    pub fn with_args(name: impl Into<String>, args: Vec<TypeNode>) -> Self {
        Self {
            name: name.into(),
            args,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TypeNode {
    Basic(BasicType),
    /// Literal token text as written, quotes included: `"on"`, `42`, `true`.
    Literal(String),
    Function(FunctionType),
    Union(Vec<TypeNode>),
    Array(Box<TypeNode>),
    Tuple(Vec<TypeNode>),
    Reference(TypeReference),
    TypeLiteral(Vec<TypeSlot>),
}

impl TypeNode {
    pub fn kind(&self) -> TypeKind {
        match self {
            TypeNode::Basic(_) => TypeKind::Basic,
            TypeNode::Literal(_) => TypeKind::Literal,
            TypeNode::Function(_) => TypeKind::Function,
            TypeNode::Union(_) => TypeKind::Union,
            TypeNode::Array(_) => TypeKind::Array,
            TypeNode::Tuple(_) => TypeKind::Tuple,
            TypeNode::Reference(_) => TypeKind::TypeReference,
            TypeNode::TypeLiteral(_) => TypeKind::TypeLiteral,
        }
    }

    pub fn reference(name: impl Into<String>) -> Self {
        TypeNode::Reference(TypeReference::new(name))
    }

    pub fn array(element: TypeNode) -> Self {
        TypeNode::Array(Box::new(element))
    }

    pub fn function(params: Vec<TypeSlot>, return_type: TypeNode) -> Self {
        TypeNode::Function(FunctionType {
            type_params: Vec::new(),
            params,
            return_type: Box::new(return_type),
        })
    }
}
