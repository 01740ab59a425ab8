use std::slice;

use super::{Branch, Node};

/// An iterator over the key-value pairs of a [`Trie`](super::Trie) in byte order of the keys.
#[derive(Debug)]
pub struct Iter<'a, K, V> {
    stack: Vec<slice::Iter<'a, Node<K, V>>>,
    remaining: usize,
}

impl<'a, K, V> Iter<'a, K, V> {
    pub(super) fn new(root: &'a Branch<K, V>, len: usize) -> Self {
        Self {
            stack: vec![root.children.items().iter()],
            remaining: len,
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(children) = self.stack.last_mut() {
            match children.next() {
                Some(Node::Leaf(leaf)) => {
                    self.remaining -= 1;
                    return Some((&leaf.key, &leaf.value));
                }
                Some(Node::Branch(branch)) => self.stack.push(branch.children.items().iter()),
                Some(Node::Empty) => unreachable!("[bug] empty node stored in a branch"),
                None => {
                    self.stack.pop();
                }
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> std::iter::FusedIterator for Iter<'_, K, V> {}
