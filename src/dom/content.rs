//! DOM nodes as a content tree

use web_sys::Node;

use crate::text::ContentNode;

impl ContentNode for Node {
    fn child_nodes(&self) -> Vec<Self> {
        let list = Node::child_nodes(self);
        (0..list.length()).filter_map(|i| list.get(i)).collect()
    }

    fn literal_text(&self) -> Option<String> {
        if self.node_type() == Node::TEXT_NODE {
            Some(self.text_content().unwrap_or_default())
        } else {
            None
        }
    }
}
