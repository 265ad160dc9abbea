use crate::core::model::{DeclTree, NodeId};

/// Convert a camel-case declaration name into a lowercase, hyphenated key
/// segment: `getValue` -> `get-value`, `HTMLElement` -> `h-t-m-l-element`.
///
/// A leading uppercase letter is lowercased without a hyphen.
pub fn format_key_segment(name: &str) -> String {
    let mut segment = String::with_capacity(name.len() + 4);
    for (index, ch) in name.chars().enumerate() {
        if ch.is_ascii_uppercase() {
            if index > 0 {
                segment.push('-');
            }
            segment.push(ch.to_ascii_lowercase());
        } else {
            segment.push(ch);
        }
    }
    segment
}

/// Dotted key of `id`: one segment per ancestor below the root, outermost
/// first. The root itself has the empty key.
pub fn node_key(tree: &DeclTree, id: NodeId) -> String {
    let mut segments = Vec::new();
    let mut current = Some(id);
    while let Some(node_id) = current {
        segments.push(format_key_segment(&tree.node(node_id).name));
        current = tree.parent(node_id);
    }
    // The last segment belongs to the root.
    segments.pop();
    segments.reverse();
    segments.join(".")
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use crate::core::i18n::key::*;
    use crate::core::model::types::{BasicType, TypeNode};
    use crate::core::model::{Node, NodeData, TreeBuilder};

    #[test]
    fn test_format_key_segment() {
        assert_eq!(format_key_segment("Foo"), "foo");
        assert_eq!(format_key_segment("v1"), "v1");
        assert_eq!(format_key_segment("getValue"), "get-value");
        assert_eq!(format_key_segment("MyClassName"), "my-class-name");
        assert_eq!(format_key_segment("IO"), "i-o");
        assert_eq!(format_key_segment("source-d-ts"), "source-d-ts");
        assert_eq!(format_key_segment(""), "");
    }

    fn var(name: &str) -> Node {
        Node::new(
            name,
            None,
            NodeData::Var {
                ty: TypeNode::Basic(BasicType::Number),
                is_const: false,
            },
        )
    }

    #[test]
    fn test_node_key_walks_to_root() {
        let mut builder = TreeBuilder::new();
        let v1 = builder.add(var("v1"));
        let inner = builder.add(Node::new(
            "InnerSpace",
            None,
            NodeData::Namespace { children: vec![v1] },
        ));
        let foo = builder.add(Node::new(
            "Foo",
            None,
            NodeData::Namespace {
                children: vec![inner],
            },
        ));
        let root = builder.add(Node::new("Root", None, NodeData::Root { children: vec![foo] }));
        let tree = builder.finish(root).unwrap();

        assert_eq!(node_key(&tree, v1), "foo.inner-space.v1");
        assert_eq!(node_key(&tree, foo), "foo");
        assert_eq!(node_key(&tree, root), "");
    }

    #[test]
    fn test_sibling_keys_are_distinct() {
        let names = [
            "value",
            "getValue",
            "setValue",
            "valueOf",
            "Value2",
            "toString",
            "to_string",
            "isHTML",
        ];
        let mut builder = TreeBuilder::new();
        let ids: Vec<NodeId> = names.iter().map(|name| builder.add(var(name))).collect();
        let ns = builder.add(Node::new(
            "Space",
            None,
            NodeData::Namespace {
                children: ids.clone(),
            },
        ));
        let root = builder.add(Node::new("", None, NodeData::Root { children: vec![ns] }));
        let tree = builder.finish(root).unwrap();

        let keys: HashSet<String> = ids.iter().map(|&id| node_key(&tree, id)).collect();
        assert_eq!(keys.len(), names.len());
    }
}
