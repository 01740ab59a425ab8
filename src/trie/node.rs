use std::cmp::min;

use crate::{sparse::SparseArray, BytesRepr, TERMINAL};

/// A slot in the trie. Branches never store [`Node::Empty`]; an empty slot is an unset bit in the
/// branch's bitmap. `Empty` only exists transiently while nodes are being moved around.
#[derive(Debug, Default)]
pub enum Node<K, V> {
    /// A vacant slot.
    #[default]
    Empty,
    /// An internal node discriminating on one byte position.
    Branch(Branch<K, V>),
    /// A terminal node holding a full key.
    Leaf(Box<Leaf<K, V>>),
}

impl<K, V> Node<K, V> {
    pub(crate) fn new_leaf(key: K, value: V) -> Self {
        Self::Leaf(Box::new(Leaf { key, value }))
    }

    /// Follows the first child down to a leaf. Every key below a branch agrees on all bytes before
    /// the branch's index, so any leaf will do as a representative of the subtree.
    pub(crate) fn first_leaf(&self) -> &Leaf<K, V> {
        let mut node = self;
        loop {
            match node {
                Self::Leaf(leaf) => return leaf,
                Self::Branch(branch) => {
                    node = branch
                        .children
                        .first()
                        .expect("[bug] a branch must have at least one child");
                }
                Self::Empty => unreachable!("[bug] an empty node has no leaves"),
            }
        }
    }

    /// Follows the last child down to a leaf.
    pub(crate) fn last_leaf(&self) -> &Leaf<K, V> {
        let mut node = self;
        loop {
            match node {
                Self::Leaf(leaf) => return leaf,
                Self::Branch(branch) => {
                    node = branch
                        .children
                        .last()
                        .expect("[bug] a branch must have at least one child");
                }
                Self::Empty => unreachable!("[bug] an empty node has no leaves"),
            }
        }
    }
}

/// An internal node. Its children are stored sparsely by discriminator, the mapped value of the
/// key byte at `index`.
#[derive(Debug)]
pub struct Branch<K, V> {
    pub(crate) index: usize,
    pub(crate) children: SparseArray<Node<K, V>>,
}

impl<K, V> Branch<K, V> {
    pub(crate) fn new(index: usize) -> Self {
        Self {
            index,
            children: SparseArray::default(),
        }
    }

    /// The byte position this branch discriminates on.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Returns the number of children.
    #[must_use]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Returns `true` if the branch has no children. Only the root of an empty trie can be empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns the child in the slot for `discriminator`.
    #[must_use]
    pub fn lookup(&self, discriminator: usize) -> Option<&Node<K, V>> {
        self.children.get(discriminator)
    }

    /// Iterates over `(discriminator, child)` pairs in discriminator order.
    pub fn children(&self) -> impl ExactSizeIterator<Item = (usize, &Node<K, V>)> {
        self.children.iter()
    }

    pub(crate) fn lookup_mut(&mut self, discriminator: usize) -> Option<&mut Node<K, V>> {
        self.children.get_mut(discriminator)
    }

    pub(crate) fn add(&mut self, discriminator: usize, node: Node<K, V>) {
        assert!(
            !matches!(node, Node::Empty),
            "[bug] tried to add an empty node"
        );
        self.children.add(discriminator, node);
    }

    pub(crate) fn remove(&mut self, discriminator: usize) -> Option<Node<K, V>> {
        self.children.remove(discriminator)
    }

    /// Whether following `key` through this branch's child at `discriminator` can decide anything
    /// further: the child is a branch whose index is still within reach of the key.
    fn leads_deeper(&self, discriminator: usize, key: &[u8]) -> bool {
        matches!(
            self.children.get(discriminator),
            Some(Node::Branch(child)) if child.index <= key.len()
        )
    }

    /// Follows `key` through the branches below `self` as far as they agree with it and returns
    /// the deepest edge `branch --discriminator--> child`. `child` is `None` if the slot is vacant.
    pub(crate) fn descend(&self, key: &[u8]) -> (&Self, usize, Option<&Node<K, V>>) {
        let mut branch = self;
        loop {
            let discriminator = discriminator(key, branch.index);
            match branch.children.get(discriminator) {
                Some(Node::Branch(child)) if child.index <= key.len() => branch = child,
                child => return (branch, discriminator, child),
            }
        }
    }

    /// Mutable form of [`Branch::descend`], returning the deepest branch and the discriminator
    /// `key` selects on it.
    pub(crate) fn descend_mut(&mut self, key: &[u8]) -> (&mut Self, usize) {
        let mut branch = self;
        loop {
            let discriminator = discriminator(key, branch.index);
            if !branch.leads_deeper(discriminator, key) {
                return (branch, discriminator);
            }
            branch = match branch.children.get_mut(discriminator) {
                Some(Node::Branch(child)) => child,
                _ => unreachable!("[bug] checked for a branch child above"),
            };
        }
    }
}

/// A terminal node storing the complete key, since the path through the trie only encodes the
/// bytes at the critical indices.
#[derive(Debug, Clone)]
pub struct Leaf<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
}

impl<K, V> Leaf<K, V> {
    /// The key exactly as it was inserted.
    pub const fn key(&self) -> &K {
        &self.key
    }

    /// The stored value.
    pub const fn value(&self) -> &V {
        &self.value
    }
}

impl<K, V> Leaf<K, V>
where
    K: BytesRepr,
{
    pub(crate) fn matches(&self, key: &[u8]) -> bool {
        self.key.repr() == key
    }
}

/// Maps the key byte at `index` to a slot: the byte plus one, or [`TERMINAL`] past the end of the
/// key so that prefixes and the empty key have a slot of their own.
pub(crate) fn discriminator(key: &[u8], index: usize) -> usize {
    key.get(index).map_or(TERMINAL, |&byte| usize::from(byte) + 1)
}

/// The first position at which `a` and `b` differ, or the length of the shorter one if it is a
/// prefix of the other.
pub(crate) fn critical_index(a: &[u8], b: &[u8]) -> usize {
    let len = min(a.len(), b.len());
    a.iter()
        .zip(b)
        .position(|(x, y)| x != y)
        .unwrap_or(len)
}
