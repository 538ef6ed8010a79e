//! Flat character index over a content tree
//!
//! The container's visible text is treated as one continuous sequence no
//! matter how it is split across markup. Building the index walks the tree
//! once; `locate` maps a global character offset back to the fragment and
//! in-fragment offset a selection range needs.

use crate::models::TextFragment;

/// A node in a traversable content tree
pub trait ContentNode: Clone {
    /// Children in document order
    fn child_nodes(&self) -> Vec<Self>;

    /// Literal text if this node is a text leaf, `None` for markup nodes
    fn literal_text(&self) -> Option<String>;
}

/// A global offset resolved to a fragment and an offset inside it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalPosition {
    /// Index into the fragment list
    pub fragment: usize,
    /// Character offset inside that fragment, `0..=len`
    pub offset: usize,
}

/// Ordered leaf fragments plus their total character count
#[derive(Debug, Clone)]
pub struct TextIndex<N> {
    fragments: Vec<TextFragment<N>>,
    total_length: usize,
}

impl<N: ContentNode> TextIndex<N> {
    /// Walk `root` depth-first, pre-order, collecting text leaves
    ///
    /// Leaves whose text is empty once trimmed are skipped. Stored lengths
    /// are always the untrimmed ones.
    pub fn build(root: &N) -> Self {
        let mut fragments = Vec::new();
        let mut total_length = 0;
        let mut stack = vec![root.clone()];

        while let Some(node) = stack.pop() {
            match node.literal_text() {
                Some(text) => {
                    if text.trim().is_empty() {
                        continue;
                    }
                    let length = text.chars().count();
                    total_length += length;
                    fragments.push(TextFragment::new(node, length));
                }
                None => {
                    // Reversed so the first child is popped first
                    stack.extend(node.child_nodes().into_iter().rev());
                }
            }
        }

        log::debug!(
            "Built text index: {} fragments, {} characters",
            fragments.len(),
            total_length
        );

        Self { fragments, total_length }
    }

    pub fn fragments(&self) -> &[TextFragment<N>] {
        &self.fragments
    }

    pub fn fragment(&self, index: usize) -> Option<&TextFragment<N>> {
        self.fragments.get(index)
    }

    pub fn total_length(&self) -> usize {
        self.total_length
    }

    pub fn is_empty(&self) -> bool {
        self.total_length == 0
    }

    /// Map a global offset to `(fragment, local offset)`
    ///
    /// An offset that lands exactly on a boundary resolves to the end of the
    /// earlier fragment, never the start of the next. Offsets past the end
    /// clamp to the end of the last fragment. Returns `None` only when the
    /// index has no fragments.
    pub fn locate(&self, offset: usize) -> Option<LocalPosition> {
        let mut remaining = offset;

        for (i, fragment) in self.fragments.iter().enumerate() {
            if remaining <= fragment.len() {
                return Some(LocalPosition { fragment: i, offset: remaining });
            }
            remaining -= fragment.len();
        }

        let last = self.fragments.len().checked_sub(1)?;
        log::warn!(
            "Offset {} beyond text length {}, clamping to end",
            offset,
            self.total_length
        );
        Some(LocalPosition {
            fragment: last,
            offset: self.fragments[last].len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::TreeNode;

    fn flat(parts: &[&str]) -> TreeNode {
        TreeNode::element(parts.iter().map(|p| TreeNode::text(p)).collect())
    }

    #[test]
    fn test_build_skips_whitespace_only_leaves() {
        let index = TextIndex::build(&flat(&["Hello", "   ", "World"]));
        assert_eq!(index.total_length(), 10);
        assert_eq!(index.fragments().len(), 2);
        assert_eq!(index.fragments()[0].content(), "Hello");
        assert_eq!(index.fragments()[1].content(), "World");
    }

    #[test]
    fn test_build_keeps_untrimmed_length() {
        let index = TextIndex::build(&flat(&["  hi  ", "\n"]));
        assert_eq!(index.fragments().len(), 1);
        assert_eq!(index.fragments()[0].len(), 6);
        assert_eq!(index.total_length(), 6);
    }

    #[test]
    fn test_build_walks_nested_markup_in_document_order() {
        let root = TreeNode::element(vec![
            TreeNode::element(vec![
                TreeNode::text("one "),
                TreeNode::element(vec![TreeNode::text("two")]),
            ]),
            TreeNode::text(" three"),
            TreeNode::element(vec![]),
            TreeNode::element(vec![TreeNode::element(vec![TreeNode::text("four")])]),
        ]);

        let index = TextIndex::build(&root);
        let contents: Vec<String> = index.fragments().iter().map(|f| f.content()).collect();
        assert_eq!(contents, vec!["one ", "two", " three", "four"]);
        assert_eq!(index.total_length(), 4 + 3 + 6 + 4);
    }

    #[test]
    fn test_build_counts_characters_not_bytes() {
        let index = TextIndex::build(&flat(&["héllo", "日本"]));
        assert_eq!(index.fragments()[0].len(), 5);
        assert_eq!(index.fragments()[1].len(), 2);
        assert_eq!(index.total_length(), 7);
    }

    #[test]
    fn test_build_empty_container() {
        let index = TextIndex::build(&flat(&["", "  ", "\t"]));
        assert!(index.is_empty());
        assert!(index.fragments().is_empty());
        assert_eq!(index.locate(0), None);
    }

    #[test]
    fn test_build_root_text_leaf() {
        let index = TextIndex::build(&TreeNode::text("solo"));
        assert_eq!(index.fragments().len(), 1);
        assert_eq!(index.total_length(), 4);
    }

    #[test]
    fn test_locate_boundary_resolves_to_end_of_earlier_fragment() {
        let index = TextIndex::build(&flat(&["ab", "cd"]));
        assert_eq!(index.locate(2), Some(LocalPosition { fragment: 0, offset: 2 }));
        assert_eq!(index.locate(3), Some(LocalPosition { fragment: 1, offset: 1 }));
    }

    #[test]
    fn test_locate_covers_every_valid_offset() {
        let index = TextIndex::build(&flat(&["abc", "d", "efgh"]));
        for offset in 0..=index.total_length() {
            let pos = index.locate(offset).unwrap();
            let fragment = index.fragment(pos.fragment).unwrap();
            assert!(pos.offset <= fragment.len());

            let before: usize = index.fragments()[..pos.fragment].iter().map(|f| f.len()).sum();
            assert_eq!(before + pos.offset, offset);

            assert_eq!(index.locate(offset), Some(pos));
        }
    }

    #[test]
    fn test_locate_clamps_past_end() {
        let index = TextIndex::build(&flat(&["ab", "cd"]));
        assert_eq!(index.locate(99), Some(LocalPosition { fragment: 1, offset: 2 }));
        assert_eq!(index.locate(4), index.locate(99));
    }
}
