//! # qp-trie.

mod fmt;
mod iter;
mod node;
mod search;

#[cfg(test)]
mod proptests;

use std::{borrow::Borrow, mem};

use tracing::trace;

use crate::BytesRepr;

pub use iter::*;
pub use node::{Branch, Leaf, Node};
pub use search::*;

use node::{critical_index, discriminator};

/// A qp-trie mapping byte-representable keys to values. This structure owns the root branch of
/// the tree and serves as the entrypoint for all tree operations.
///
/// The root always discriminates on index 0 and is never contracted, so an empty trie is a root
/// without children.
pub struct Trie<K, V> {
    root: Branch<K, V>,
    len: usize,
}

impl<K, V> Default for Trie<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Trie<K, V> {
    /// Creates an empty trie.
    #[must_use]
    pub fn new() -> Self {
        Self {
            root: Branch::new(0),
            len: 0,
        }
    }

    /// Returns the number of keys in the trie.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the trie holds no keys.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Find the key-value pair with the smallest key in byte order.
    #[must_use]
    pub fn min(&self) -> Option<(&K, &V)> {
        self.root
            .children
            .first()
            .map(Node::first_leaf)
            .map(|leaf| (&leaf.key, &leaf.value))
    }

    /// Find the key-value pair with the largest key in byte order.
    #[must_use]
    pub fn max(&self) -> Option<(&K, &V)> {
        self.root
            .children
            .last()
            .map(Node::last_leaf)
            .map(|leaf| (&leaf.key, &leaf.value))
    }

    /// Iterates over all key-value pairs in byte order of the keys. A key sorts before every key
    /// it is a strict prefix of.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(&self.root, self.len)
    }
}

impl<K, V> Trie<K, V>
where
    K: BytesRepr,
{
    /// Search for the value associated with the given key.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: BytesRepr + ?Sized,
    {
        let key = key.repr();
        match self.root.descend(key) {
            (_, _, Some(Node::Leaf(leaf))) if leaf.matches(key) => Some(&leaf.value),
            _ => None,
        }
    }

    /// Returns `true` if the trie holds the given key.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: BytesRepr + ?Sized,
    {
        self.get(key).is_some()
    }

    /// Associates `value` with `key`. Returns `true` if the key was already present, in which case
    /// only the value is replaced and the originally inserted key is kept.
    pub fn set(&mut self, key: K, value: V) -> bool {
        let bytes = key.repr();
        let (branch, slot) = self.root.descend_mut(bytes);
        let (critical, nearest) = match branch.lookup_mut(slot) {
            None => {
                // The descent only looked at the bytes at the branch indices. Below the root, the
                // vacant slot is only valid if the key also agrees with every key under this
                // branch on the bytes before its index.
                let diverging = branch
                    .children
                    .first()
                    .map(|child| split_point(bytes, child.first_leaf().key.repr()))
                    .filter(|&(critical, _)| critical < branch.index);
                let Some(split) = diverging else {
                    branch.add(slot, Node::new_leaf(key, value));
                    self.len += 1;
                    return false;
                };
                split
            }
            Some(Node::Leaf(leaf)) if leaf.matches(bytes) => {
                leaf.value = value;
                return true;
            }
            Some(child) => split_point(bytes, child.first_leaf().key.repr()),
        };

        // The key and the nearest leaf diverge at `critical`, which may lie above the branch the
        // first descent stopped at, so the attachment point is searched again from the root with
        // only the bytes both keys share.
        let (parent, slot) = self.root.descend_mut(&bytes[..critical]);
        trace!(critical, parent = parent.index, "splitting to insert key");
        let twig_slot = discriminator(bytes, critical);
        let edge = parent
            .lookup_mut(slot)
            .expect("[bug] re-descent found a vacant slot where a simple insert applies");
        let mut twig = Branch::new(critical);
        twig.add(twig_slot, Node::new_leaf(key, value));
        twig.add(nearest, mem::take(edge));
        *edge = Node::Branch(twig);
        self.len += 1;
        false
    }

    /// Removes a key from the trie, returning its value if it was present.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: BytesRepr + ?Sized,
    {
        let key = key.repr();
        let (branch, slot) = self.root.descend_mut(key);
        if !matches!(branch.lookup(slot), Some(Node::Leaf(leaf)) if leaf.matches(key)) {
            return None;
        }
        let Some(Node::Leaf(leaf)) = branch.remove(slot) else {
            unreachable!("[bug] checked for a matching leaf above");
        };
        let unary = branch.len() == 1;
        self.len -= 1;
        if unary {
            self.contract(key);
        }
        Some(leaf.value)
    }

    /// Removes a key from the trie. Returns `true` if the key was present.
    pub fn delete<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: BytesRepr + ?Sized,
    {
        self.remove(key).is_some()
    }

    /// Replaces the branch left with a single child after removing `key` by that child. The
    /// root is exempt; it may be left with one child.
    fn contract(&mut self, key: &[u8]) {
        let mut branch = &mut self.root;
        loop {
            let Some(node) = branch.lookup_mut(discriminator(key, branch.index)) else {
                return;
            };
            match node {
                Node::Branch(child) if child.len() == 1 => {
                    let index = child.index;
                    let Some((_, sole)) = child.children.release() else {
                        unreachable!("[bug] checked for a single child above");
                    };
                    trace!(index, "contracting unary branch");
                    *node = sole;
                    return;
                }
                Node::Branch(child) => branch = child,
                Node::Leaf(_) | Node::Empty => return,
            }
        }
    }
}

/// Where `key` leaves the subtree holding `nearest`: the critical index and the slot the subtree
/// takes under a new branch at that index.
fn split_point(key: &[u8], nearest: &[u8]) -> (usize, usize) {
    let critical = critical_index(key, nearest);
    (critical, discriminator(nearest, critical))
}

impl<K, V> Extend<(K, V)> for Trie<K, V>
where
    K: BytesRepr,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.set(key, value);
        }
    }
}

impl<K, V> FromIterator<(K, V)> for Trie<K, V>
where
    K: BytesRepr,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut trie = Self::new();
        trie.extend(iter);
        trie
    }
}

impl<'a, K, V> IntoIterator for &'a Trie<K, V> {
    type Item = (&'a K, &'a V);

    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
