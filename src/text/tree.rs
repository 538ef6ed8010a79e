//! In-memory content tree
//!
//! A host-independent `ContentNode` used where no DOM is available: native
//! tests, and callers that already hold their text as nested fragments.

use std::rc::Rc;

use super::ContentNode;

#[derive(Debug, PartialEq)]
enum NodeKind {
    Text(String),
    Element(Vec<TreeNode>),
}

/// Cheaply clonable handle to a node in an in-memory tree
#[derive(Clone, Debug, PartialEq)]
pub struct TreeNode(Rc<NodeKind>);

impl TreeNode {
    /// Create a text leaf
    pub fn text(content: &str) -> Self {
        Self(Rc::new(NodeKind::Text(content.to_string())))
    }

    /// Create a markup node with the given children
    pub fn element(children: Vec<TreeNode>) -> Self {
        Self(Rc::new(NodeKind::Element(children)))
    }

    /// Whether two handles refer to the same node
    pub fn same_node(&self, other: &TreeNode) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl ContentNode for TreeNode {
    fn child_nodes(&self) -> Vec<Self> {
        match &*self.0 {
            NodeKind::Text(_) => Vec::new(),
            NodeKind::Element(children) => children.clone(),
        }
    }

    fn literal_text(&self) -> Option<String> {
        match &*self.0 {
            NodeKind::Text(text) => Some(text.clone()),
            NodeKind::Element(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_identity() {
        let leaf = TreeNode::text("a");
        let copy = leaf.clone();
        assert!(leaf.same_node(&copy));
        assert!(!leaf.same_node(&TreeNode::text("a")));
    }

    #[test]
    fn test_element_has_no_literal_text() {
        let node = TreeNode::element(vec![TreeNode::text("x")]);
        assert_eq!(node.literal_text(), None);
        assert_eq!(node.child_nodes().len(), 1);
    }
}
