use std::fmt;

use super::{Branch, Node, Trie};
use crate::{BytesRepr, TERMINAL};

impl<K, V> Trie<K, V>
where
    K: BytesRepr,
    V: fmt::Debug,
{
    /// Renders the structure of the trie as a tree diagram. Every edge is labelled with the key
    /// byte it stands for (`^` for the terminal slot) and the index of the branch it leaves;
    /// leaves show their key and value.
    #[must_use]
    pub fn dump(&self) -> String {
        format!("{self:?}")
    }
}

impl<K, V> fmt::Debug for Trie<K, V>
where
    K: BytesRepr,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "root @{}", self.root.index)?;
        debug_print_children(f, &self.root, &mut String::new())
    }
}

/// Label of the edge taken for a discriminator.
struct Edge(usize);

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == TERMINAL {
            return write!(f, "^");
        }
        let byte = u8::try_from(self.0 - 1).map_err(|_| fmt::Error)?;
        write!(f, "'{}'", byte.escape_ascii())
    }
}

fn debug_print_children<K, V>(
    f: &mut fmt::Formatter<'_>,
    branch: &Branch<K, V>,
    prefix: &mut String,
) -> fmt::Result
where
    K: BytesRepr,
    V: fmt::Debug,
{
    let count = branch.len();
    for (i, (slot, child)) in branch.children().enumerate() {
        let (connector, extension) = if i + 1 == count {
            ("└── ", "    ")
        } else {
            ("├── ", "│   ")
        };
        write!(f, "{prefix}{connector}{} @{}", Edge(slot), branch.index)?;
        match child {
            Node::Branch(child) => {
                writeln!(f, " => @{}", child.index)?;
                let len = prefix.len();
                prefix.push_str(extension);
                debug_print_children(f, child, prefix)?;
                prefix.truncate(len);
            }
            Node::Leaf(leaf) => {
                writeln!(
                    f,
                    " -> {:?}: {:?}",
                    String::from_utf8_lossy(leaf.key.repr()),
                    leaf.value
                )?;
            }
            Node::Empty => unreachable!("[bug] empty node stored in a branch"),
        }
    }
    Ok(())
}
