use std::collections::VecDeque;

use super::{Node, Trie};

/// A node reached by [`Trie::breadth_first_search`].
#[derive(Debug)]
pub struct Visit<'a, K, V> {
    /// The visited node, either a branch or a leaf.
    pub node: &'a Node<K, V>,
    /// Distance from the root's children, which are at height 0.
    pub height: usize,
    /// Index of the branch holding this node.
    pub parent_index: usize,
}

impl<K, V> Trie<K, V> {
    /// Walks the trie level by level starting at the children of the root, handing every node to
    /// `visit`. The walk stops at the first error returned by `visit`, which is passed on to the
    /// caller.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `visit`.
    pub fn breadth_first_search<E, F>(&self, mut visit: F) -> Result<(), E>
    where
        F: FnMut(Visit<'_, K, V>) -> Result<(), E>,
    {
        let mut queue = VecDeque::new();
        queue.extend(
            self.root
                .children
                .items()
                .iter()
                .map(|node| (node, 0, self.root.index)),
        );
        while let Some((node, height, parent_index)) = queue.pop_front() {
            visit(Visit {
                node,
                height,
                parent_index,
            })?;
            if let Node::Branch(branch) = node {
                queue.extend(
                    branch
                        .children
                        .items()
                        .iter()
                        .map(|child| (child, height + 1, branch.index)),
                );
            }
        }
        Ok(())
    }
}
