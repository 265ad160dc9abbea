//! Declaration and type model.
//!
//! - `types`: the structural type grammar
//! - `node`: declaration nodes and their kind-specific payloads
//! - `tree`: the arena that owns nodes and wires parent links
//! - `debug`: labelled JSON dump used by the `ast` command

pub mod debug;
pub mod node;
pub mod tree;
pub mod types;

pub use node::{ClassShape, EnumMember, Modifier, Node, NodeData, NodeId, NodeKind, Signature};
pub use tree::{DeclTree, TreeBuilder, TreeError};
pub use types::{
    BasicType, FunctionType, TypeKind, TypeNode, TypeParam, TypeReference, TypeSlot,
};
