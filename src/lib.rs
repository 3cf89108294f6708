//! Provides a prefix tree (trie) set for storing keys composed of
//! a sequence of atoms. Each key is either present or absent; there are
//! no associated values.
//!
//! Atoms must support the [`crate::trie::TrieAtom`] trait, which is
//! implemented for anything `Copy + Ord`. Since the most common use of a
//! trie is to store the chars of a String, a convenience type,
//! [`crate::trie::TrieString`], is provided.
//!
//! The interface relies on iterators to insert, remove and check for
//! existence of keys, so `"apple".chars()`, `['a', 'b']` or a `Vec<u8>` all
//! work as keys of the matching atom type.
//!
//! Enumeration is always sorted: children are kept in ascending atom order,
//! so a pre-order walk of the tree yields keys in lexicographic order.
//!
//! Examples:
//! * trie : [`crate::trie`]
//! * iterator : [`crate::iterator`]
//! * shared access : [`crate::sync`]
//!
//! Typical usages for this data structure:
//!  - Autocompletion
//!  - Prefix counting ("how many stored words start with `ba`?")
//!  - Storing large numbers of keys with significant amounts of
//!    sub-key duplication
//!  - ...

#[cfg(feature = "serde")]
extern crate serde_crate;

pub mod error;

pub mod iterator;

pub mod sync;

pub mod trie;

pub use error::{Result, TrieError};
pub use sync::SharedTrie;
pub use trie::{Trie, TrieAtom, TrieString};
