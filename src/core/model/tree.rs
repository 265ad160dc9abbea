//! Arena-backed declaration tree.
//!
//! Trees are built bottom-up through [`TreeBuilder`]: leaves (parameters,
//! members) are added before the declarations that own them, and
//! [`TreeBuilder::finish`] wires every `parent` link from the root down. The
//! wiring pass is the only way to obtain a [`DeclTree`], so keys are never
//! derived from a tree with dangling parents.

use thiserror::Error;

use crate::core::model::node::{Node, NodeId, NodeKind};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    #[error("tree root must be a Root node, found {0}")]
    NotRoot(NodeKind),
    #[error("node id {0} does not exist in this tree")]
    UnknownId(usize),
    #[error("node '{name}' is owned by more than one declaration")]
    SharedNode { name: String },
    #[error("node '{name}' is not reachable from the root")]
    Detached { name: String },
}

/// Collects nodes before their parents are known.
#[derive(Debug, Default)]
pub struct TreeBuilder {
    nodes: Vec<Node>,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, node: Node) -> NodeId {
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Freeze the arena into a tree rooted at `root` and wire parents.
    pub fn finish(self, root: NodeId) -> Result<DeclTree, TreeError> {
        let mut tree = DeclTree {
            nodes: self.nodes,
            root,
        };
        tree.assign_parents()?;
        Ok(tree)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeclTree {
    nodes: Vec<Node>,
    root: NodeId,
}

impl DeclTree {
    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id.0).and_then(|node| node.parent)
    }

    pub fn children(&self, id: NodeId) -> Vec<NodeId> {
        self.node(id).data.children()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Walk the tree from the root and set every node's parent.
    ///
    /// Fails if the root is not a Root node, if a node is owned twice, or if
    /// a node cannot be reached. Running it again on a wired tree leaves it
    /// unchanged.
    pub fn assign_parents(&mut self) -> Result<(), TreeError> {
        let root = self
            .nodes
            .get(self.root.0)
            .ok_or(TreeError::UnknownId(self.root.0))?;
        if root.kind() != NodeKind::Root {
            return Err(TreeError::NotRoot(root.kind()));
        }

        let mut parents: Vec<Option<NodeId>> = vec![None; self.nodes.len()];
        let mut visited = vec![false; self.nodes.len()];
        visited[self.root.0] = true;

        let mut stack = vec![self.root];
        while let Some(id) = stack.pop() {
            for child in self.nodes[id.0].data.children() {
                let seen = visited
                    .get_mut(child.0)
                    .ok_or(TreeError::UnknownId(child.0))?;
                if *seen {
                    return Err(TreeError::SharedNode {
                        name: self.nodes[child.0].name.clone(),
                    });
                }
                *seen = true;
                parents[child.0] = Some(id);
                stack.push(child);
            }
        }

        if let Some(index) = visited.iter().position(|seen| !seen) {
            return Err(TreeError::Detached {
                name: self.nodes[index].name.clone(),
            });
        }

        for (node, parent) in self.nodes.iter_mut().zip(parents) {
            node.parent = parent;
        }
        Ok(())
    }

    /// All node ids in depth-first pre-order, siblings in declaration order.
    pub fn walk(&self) -> Vec<NodeId> {
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut stack = vec![self.root];
        while let Some(id) = stack.pop() {
            order.push(id);
            let children = self.children(id);
            stack.extend(children.into_iter().rev());
        }
        order
    }
}

#[cfg(test)]
mod tests {
    use crate::core::model::node::*;
    use crate::core::model::tree::*;
    use crate::core::model::types::{BasicType, TypeNode};

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

    fn namespace(name: &str, children: Vec<NodeId>) -> Node {
        Node::new(name, None, NodeData::Namespace { children })
    }

    fn root(children: Vec<NodeId>) -> Node {
        Node::new("root", None, NodeData::Root { children })
    }

    #[test]
    fn test_finish_assigns_parents() {
        let mut builder = TreeBuilder::new();
        let v1 = builder.add(var("v1"));
        let foo = builder.add(namespace("Foo", vec![v1]));
        let top = builder.add(root(vec![foo]));
        let tree = builder.finish(top).unwrap();

        assert_eq!(tree.parent(v1), Some(foo));
        assert_eq!(tree.parent(foo), Some(top));
        assert_eq!(tree.parent(top), None);
    }

    #[test]
    fn test_assign_parents_is_idempotent() {
        let mut builder = TreeBuilder::new();
        let v1 = builder.add(var("v1"));
        let foo = builder.add(namespace("Foo", vec![v1]));
        let top = builder.add(root(vec![foo]));
        let mut tree = builder.finish(top).unwrap();
        let before = tree.clone();

        tree.assign_parents().unwrap();
        assert_eq!(tree, before);
    }

    #[test]
    fn test_root_must_be_root_kind() {
        let mut builder = TreeBuilder::new();
        let foo = builder.add(namespace("Foo", vec![]));
        let err = builder.finish(foo).unwrap_err();
        assert_eq!(err, TreeError::NotRoot(NodeKind::Namespace));
    }

    #[test]
    fn test_shared_node_rejected() {
        let mut builder = TreeBuilder::new();
        let v1 = builder.add(var("v1"));
        let a = builder.add(namespace("A", vec![v1]));
        let b = builder.add(namespace("B", vec![v1]));
        let top = builder.add(root(vec![a, b]));
        let err = builder.finish(top).unwrap_err();
        assert_eq!(
            err,
            TreeError::SharedNode {
                name: "v1".to_string()
            }
        );
    }

    #[test]
    fn test_detached_node_rejected() {
        let mut builder = TreeBuilder::new();
        builder.add(var("orphan"));
        let top = builder.add(root(vec![]));
        let err = builder.finish(top).unwrap_err();
        assert!(err.to_string().contains("orphan"));
    }

    #[test]
    fn test_unknown_child_id_rejected() {
        let mut builder = TreeBuilder::new();
        let top = builder.add(root(vec![NodeId(42)]));
        let err = builder.finish(top).unwrap_err();
        assert_eq!(err, TreeError::UnknownId(42));
    }

    #[test]
    fn test_walk_is_preorder_in_declaration_order() {
        let mut builder = TreeBuilder::new();
        let a1 = builder.add(var("a1"));
        let a2 = builder.add(var("a2"));
        let a = builder.add(namespace("A", vec![a1, a2]));
        let b = builder.add(namespace("B", vec![]));
        let top = builder.add(root(vec![a, b]));
        let tree = builder.finish(top).unwrap();

        let names: Vec<&str> = tree
            .walk()
            .into_iter()
            .map(|id| tree.node(id).name.as_str())
            .collect();
        assert_eq!(names, vec!["root", "A", "a1", "a2", "B"]);
    }
}
