//! A library containing an implementation of a qp-trie: a path-compressed trie over byte strings
//! that branches 257 ways, one slot per byte value plus a terminal slot for keys that end at a
//! branch.
//!
//! ```
//! use yaqp::Trie;
//!
//! let mut trie = Trie::new();
//! assert!(!trie.set("apple", 1));
//! assert!(!trie.set("app", 2));
//! assert!(trie.set("apple", 3));
//!
//! assert_eq!(trie.get("apple"), Some(&3));
//! assert_eq!(trie.get("app"), Some(&2));
//! assert_eq!(trie.get("ap"), None);
//! assert!(trie.delete("app"));
//! ```

#![warn(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::all,
    missing_debug_implementations
)]
#![deny(clippy::all, missing_docs, rust_2018_idioms, rust_2021_compatibility)]

pub mod bitmap;
mod repr;
pub mod sparse;
mod trie;

pub use repr::*;
pub use trie::*;

/// Number of slots in a branch: one per byte value plus the terminal slot.
pub const BRANCHING_FACTOR: usize = 257;

/// Slot used by keys that end before the index a branch discriminates on.
pub const TERMINAL: usize = 0;
