//! Text fragments: leaf units of selectable text

use crate::text::ContentNode;

/// A leaf text node that made it into the index
///
/// Holds a handle to the node, not a copy of its text. `length` is the
/// untrimmed character count taken when the index was built.
#[derive(Clone, Debug, PartialEq)]
pub struct TextFragment<N> {
    node: N,
    length: usize,
}

impl<N: ContentNode> TextFragment<N> {
    pub(crate) fn new(node: N, length: usize) -> Self {
        Self { node, length }
    }

    /// The underlying content node
    pub fn node(&self) -> &N {
        &self.node
    }

    /// Character count (Unicode scalar values), including surrounding whitespace
    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Read the literal text back from the node
    pub fn content(&self) -> String {
        self.node.literal_text().unwrap_or_default()
    }
}
