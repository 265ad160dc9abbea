//! Type expressions as TypeScript source text.

use crate::core::model::{DeclTree, NodeData, NodeId, TypeNode, TypeParam, TypeSlot};

/// Render `ty`, or `any` when the type is absent.
pub fn render_optional_type(ty: Option<&TypeNode>) -> String {
    ty.map(render_type).unwrap_or_else(|| "any".to_string())
}

pub fn render_type(ty: &TypeNode) -> String {
    match ty {
        TypeNode::Basic(basic) => basic.keyword().to_string(),
        TypeNode::Literal(text) => text.clone(),
        TypeNode::Function(function) => format!(
            "{}({}) => {}",
            render_type_params(&function.type_params),
            function
                .params
                .iter()
                .map(render_slot)
                .collect::<Vec<_>>()
                .join(", "),
            render_type(&function.return_type)
        ),
        TypeNode::Union(types) => types
            .iter()
            .map(|ty| match ty {
                TypeNode::Function(_) => format!("({})", render_type(ty)),
                _ => render_type(ty),
            })
            .collect::<Vec<_>>()
            .join(" | "),
        TypeNode::Array(element) => match element.as_ref() {
            TypeNode::Union(_) | TypeNode::Function(_) => {
                format!("({})[]", render_type(element))
            }
            _ => format!("{}[]", render_type(element)),
        },
        TypeNode::Tuple(types) => format!(
            "[{}]",
            types.iter().map(render_type).collect::<Vec<_>>().join(", ")
        ),
        TypeNode::Reference(reference) => {
            if reference.args.is_empty() {
                reference.name.clone()
            } else {
                format!(
                    "{}<{}>",
                    reference.name,
                    reference
                        .args
                        .iter()
                        .map(render_type)
                        .collect::<Vec<_>>()
                        .join(", ")
                )
            }
        }
        TypeNode::TypeLiteral(slots) => {
            if slots.is_empty() {
                "{}".to_string()
            } else {
                format!(
                    "{{ {} }}",
                    slots.iter().map(render_slot).collect::<Vec<_>>().join("; ")
                )
            }
        }
    }
}

fn render_slot(slot: &TypeSlot) -> String {
    format!(
        "{}{}: {}",
        slot.name,
        if slot.optional { "?" } else { "" },
        render_type(&slot.ty)
    )
}

/// `<T extends X, U>` for function types; empty without parameters.
pub fn render_type_params(params: &[TypeParam]) -> String {
    if params.is_empty() {
        return String::new();
    }
    let texts: Vec<String> = params
        .iter()
        .map(|param| match &param.constraint {
            Some(constraint) => format!("{} extends {}", param.name, render_type(constraint)),
            None => param.name.clone(),
        })
        .collect();
    format!("<{}>", texts.join(", "))
}

/// `<T extends X, U>` for declarations whose generics are `TypeParameter`
/// nodes.
pub fn render_type_parameter_nodes(tree: &DeclTree, ids: &[NodeId]) -> String {
    if ids.is_empty() {
        return String::new();
    }
    let texts: Vec<String> = ids
        .iter()
        .map(|&id| {
            let node = tree.node(id);
            match &node.data {
                NodeData::TypeParameter {
                    constraint: Some(constraint),
                } => format!("{} extends {}", node.name, render_type(constraint)),
                _ => node.name.clone(),
            }
        })
        .collect();
    format!("<{}>", texts.join(", "))
}

/// `a: T`, `b?: U`, `...rest: V[]` from `Param` nodes.
pub fn render_parameter_nodes(tree: &DeclTree, ids: &[NodeId]) -> String {
    ids.iter()
        .map(|&id| {
            let node = tree.node(id);
            match &node.data {
                NodeData::Param {
                    ty,
                    is_optional,
                    is_rest,
                } => format!(
                    "{}{}{}: {}",
                    if *is_rest { "..." } else { "" },
                    node.name,
                    if *is_optional { "?" } else { "" },
                    render_type(ty)
                ),
                _ => format!("{}: any", node.name),
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}
