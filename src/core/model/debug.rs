//! Debug serialization of a declaration tree.
//!
//! Enum-like fields are spelled out as `Name[index] Label` so the dump stays
//! readable without the source enums at hand, and parent links are omitted
//! (children are nested inline instead).

use anyhow::{Context, Result};
use serde_json::{Map, Value, json};

use crate::core::doc::DocFlags;
use crate::core::model::node::{ClassShape, EnumMember, NodeData, NodeId, Signature};
use crate::core::model::tree::DeclTree;
use crate::core::model::types::{TypeNode, TypeParam, TypeReference, TypeSlot};

/// Serialize the whole tree, starting from its root.
pub fn tree_to_json(tree: &DeclTree) -> Value {
    node_to_json(tree, tree.root())
}

/// Pretty-print the tree as JSON with the given indentation width.
/// An indent of zero gives compact JSON.
pub fn tree_to_string(tree: &DeclTree, indent: usize) -> Result<String> {
    let value = tree_to_json(tree);
    if indent == 0 {
        return Ok(value.to_string());
    }
    let indent = " ".repeat(indent);
    let formatter = serde_json::ser::PrettyFormatter::with_indent(indent.as_bytes());
    let mut out = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
    serde::Serialize::serialize(&value, &mut serializer)
        .context("Failed to serialize declaration tree")?;
    String::from_utf8(out).context("Declaration tree JSON is not valid UTF-8")
}

fn node_to_json(tree: &DeclTree, id: NodeId) -> Value {
    let node = tree.node(id);
    let kind = node.kind();
    let mut object = Map::new();
    object.insert(
        "kind".to_string(),
        Value::String(format!("Node[{}] {}", kind.index(), kind)),
    );
    object.insert("name".to_string(), Value::String(node.name.clone()));
    if let Some(flags) = &node.doc_flags {
        object.insert("docFlags".to_string(), doc_flags_to_json(flags));
    }

    let nodes = |ids: &[NodeId]| -> Value {
        Value::Array(ids.iter().map(|&child| node_to_json(tree, child)).collect())
    };

    match &node.data {
        NodeData::Var { ty, is_const } => {
            object.insert("type".to_string(), type_to_json(ty));
            object.insert("isConst".to_string(), Value::Bool(*is_const));
        }
        NodeData::Param {
            ty,
            is_optional,
            is_rest,
        } => {
            object.insert("type".to_string(), type_to_json(ty));
            object.insert("isOptional".to_string(), Value::Bool(*is_optional));
            object.insert("isRest".to_string(), Value::Bool(*is_rest));
        }
        NodeData::Function(signature) | NodeData::Constructor(signature) => {
            insert_signature(&mut object, signature, &nodes);
        }
        NodeData::Method {
            signature,
            modifiers,
        } => {
            insert_signature(&mut object, signature, &nodes);
            object.insert(
                "modifiers".to_string(),
                modifiers.iter().map(|m| m.keyword()).collect(),
            );
        }
        NodeData::Property {
            ty,
            is_optional,
            modifiers,
        } => {
            object.insert("type".to_string(), type_to_json(ty));
            object.insert("isOptional".to_string(), Value::Bool(*is_optional));
            object.insert(
                "modifiers".to_string(),
                modifiers.iter().map(|m| m.keyword()).collect(),
            );
        }
        NodeData::Class { shape, implements } => {
            insert_shape(&mut object, shape, &nodes);
            object.insert("implements".to_string(), references_to_json(implements));
        }
        NodeData::Interface(shape) => insert_shape(&mut object, shape, &nodes),
        NodeData::Enum { members } => {
            object.insert(
                "members".to_string(),
                members.iter().map(member_to_json).collect(),
            );
        }
        NodeData::TypeAlias {
            type_parameters,
            ty,
        } => {
            object.insert("typeParameters".to_string(), nodes(type_parameters));
            object.insert("type".to_string(), type_to_json(ty));
        }
        NodeData::TypeParameter { constraint } => {
            if let Some(constraint) = constraint {
                object.insert("constraint".to_string(), type_to_json(constraint));
            }
        }
        NodeData::Namespace { children }
        | NodeData::SourceFile { children }
        | NodeData::Root { children } => {
            object.insert("children".to_string(), nodes(children));
        }
    }
    Value::Object(object)
}

fn insert_signature(
    object: &mut Map<String, Value>,
    signature: &Signature,
    nodes: &dyn Fn(&[NodeId]) -> Value,
) {
    object.insert("parameters".to_string(), nodes(&signature.parameters));
    if let Some(ty) = &signature.return_type {
        object.insert("returnType".to_string(), type_to_json(ty));
    }
    if !signature.type_parameters.is_empty() {
        object.insert(
            "typeParameters".to_string(),
            nodes(&signature.type_parameters),
        );
    }
}

fn insert_shape(
    object: &mut Map<String, Value>,
    shape: &ClassShape,
    nodes: &dyn Fn(&[NodeId]) -> Value,
) {
    object.insert("properties".to_string(), nodes(&shape.properties));
    object.insert("methods".to_string(), nodes(&shape.methods));
    object.insert("extends".to_string(), references_to_json(&shape.extends));
    object.insert(
        "typeParameters".to_string(),
        nodes(&shape.type_parameters),
    );
}

fn doc_flags_to_json(flags: &DocFlags) -> Value {
    json!({
        "enabled": flags.enabled,
        "flags": flags.flags,
    })
}

fn member_to_json(member: &EnumMember) -> Value {
    json!({
        "name": member.name,
        "value": member.value,
    })
}

fn references_to_json(references: &[TypeReference]) -> Value {
    Value::Array(
        references
            .iter()
            .map(|reference| type_to_json(&TypeNode::Reference(reference.clone())))
            .collect(),
    )
}

fn slot_to_json(slot: &TypeSlot) -> Value {
    json!({
        "name": slot.name,
        "type": type_to_json(&slot.ty),
        "isOptional": slot.optional,
    })
}

fn type_param_to_json(param: &TypeParam) -> Value {
    let mut object = Map::new();
    object.insert("name".to_string(), Value::String(param.name.clone()));
    if let Some(constraint) = &param.constraint {
        object.insert("constraint".to_string(), type_to_json(constraint));
    }
    Value::Object(object)
}

pub fn type_to_json(ty: &TypeNode) -> Value {
    let kind = ty.kind();
    let mut object = Map::new();
    object.insert(
        "kind".to_string(),
        Value::String(format!("Type[{}] {}", kind.index(), kind)),
    );
    match ty {
        TypeNode::Basic(basic) => {
            object.insert(
                "value".to_string(),
                Value::String(format!("TypeValue[{}] {}", basic.index(), basic)),
            );
        }
        TypeNode::Literal(text) => {
            object.insert("value".to_string(), Value::String(text.clone()));
        }
        TypeNode::Function(function) => {
            if !function.type_params.is_empty() {
                object.insert(
                    "typeParameters".to_string(),
                    function.type_params.iter().map(type_param_to_json).collect(),
                );
            }
            object.insert(
                "parameters".to_string(),
                function.params.iter().map(slot_to_json).collect(),
            );
            object.insert(
                "returnType".to_string(),
                type_to_json(&function.return_type),
            );
        }
        TypeNode::Union(types) => {
            object.insert("value".to_string(), types.iter().map(type_to_json).collect());
        }
        TypeNode::Tuple(types) => {
            object.insert(
                "elements".to_string(),
                types.iter().map(type_to_json).collect(),
            );
        }
        TypeNode::Array(element) => {
            object.insert("value".to_string(), type_to_json(element));
        }
        TypeNode::Reference(reference) => {
            object.insert("name".to_string(), Value::String(reference.name.clone()));
            if !reference.args.is_empty() {
                object.insert(
                    "members".to_string(),
                    reference.args.iter().map(type_to_json).collect(),
                );
            }
        }
        TypeNode::TypeLiteral(slots) => {
            object.insert(
                "members".to_string(),
                slots.iter().map(slot_to_json).collect(),
            );
        }
    }
    Value::Object(object)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::core::doc::DocFlags;
    use crate::core::model::debug::*;
    use crate::core::model::node::{Node, NodeData};
    use crate::core::model::tree::TreeBuilder;
    use crate::core::model::types::BasicType;

    fn sample_tree() -> DeclTree {
        let mut builder = TreeBuilder::new();
        let v1 = builder.add(Node::new(
            "v1",
            Some(DocFlags::enabled(vec!["text".to_string()])),
            NodeData::Var {
                ty: TypeNode::Basic(BasicType::Number),
                is_const: false,
            },
        ));
        let foo = builder.add(Node::new(
            "Foo",
            None,
            NodeData::Namespace { children: vec![v1] },
        ));
        let root = builder.add(Node::new("", None, NodeData::Root { children: vec![foo] }));
        builder.finish(root).unwrap()
    }

    #[test]
    fn test_enum_fields_are_labelled() {
        let value = tree_to_json(&sample_tree());
        let namespace = &value["children"][0];
        assert_eq!(namespace["kind"], json!("Node[8] Namespace"));

        let var = &namespace["children"][0];
        assert_eq!(var["kind"], json!("Node[0] Var"));
        assert_eq!(var["type"]["kind"], json!("Type[0] Basic"));
        assert_eq!(var["type"]["value"], json!("TypeValue[1] Number"));
        assert_eq!(var["docFlags"]["flags"], json!(["text"]));
    }

    #[test]
    fn test_parent_links_are_omitted() {
        let text = tree_to_string(&sample_tree(), 2).unwrap();
        assert!(!text.contains("parent"));
        assert!(text.contains("\n  \"kind\": \"Node[12] Root\""));
    }

    #[test]
    fn test_zero_indent_is_compact() {
        let text = tree_to_string(&sample_tree(), 0).unwrap();
        assert!(!text.contains('\n'));
        assert!(text.starts_with("{\"kind\":\"Node[12] Root\""));
    }
}
