//! Provides a prefix tree set for storing keys composed of sequences of
//! atoms. A key is either present or absent.
//!
//! Atoms must support the TrieAtom trait.
//!
//! The interface relies on iterators to insert, remove and check for
//! existence of keys. It is up to the user to decide what kind of atoms
//! make most sense of the keys being stored: chars of a string, bytes,
//! whole words, ...
//!
//! Example 1
//! ```
//! use prefixset::trie::TrieString;
//!
//! let mut trie = TrieString::new();
//! let input = "abcdef".chars();
//! assert!(trie.insert(input.clone()));
//!
//! // Anything which implements IntoIterator<Item=char> can now be used
//! // to interact with our Trie
//! assert!(trie.contains(input.clone())); // Clone the original iterator
//! assert!(trie.contains("abcdef".chars())); // Create a new iterator
//! assert!(trie.contains(['a', 'b', 'c', 'd', 'e', 'f'])); // Build an array, etc...
//! assert!(trie.contains_prefix("abc".chars()));
//! assert!(!trie.contains("abc".chars()));
//! assert!(trie.remove(input.clone()));
//! assert!(!trie.contains(input));
//! ```
//!
//! Example 2
//! ```
//! use prefixset::trie::Trie;
//!
//! let mut trie = Trie::new();
//! let input = "the quick brown fox".split_whitespace();
//! trie.insert(input.clone());
//!
//! assert!(trie.contains(input.clone()));
//! assert!(trie.contains_prefix("the quick brown".split_whitespace()));
//! assert_eq!(trie.count_prefix(["the"]), 1);
//! assert!(trie.remove(input.clone()));
//! assert!(!trie.contains(input));
//! ```
//!
//! Keys always come back out in ascending order, whatever order they went
//! in.
//!
//! Example 3
//! ```
//! use prefixset::trie::TrieString;
//!
//! let trie: TrieString = ["band", "apple", "banana", "bean"]
//!     .iter()
//!     .map(|s| s.chars())
//!     .collect();
//!
//! assert_eq!(trie.len(), 4);
//! assert_eq!(trie.count_prefix("ba".chars()), 2);
//! assert_eq!(
//!     trie.get_all::<String>(),
//!     vec!["apple", "banana", "band", "bean"]
//! );
//! let b: Vec<String> = trie.get_all_with_prefix("b".chars());
//! assert_eq!(b, vec!["banana", "band", "bean"]);
//! ```

use std::collections::BTreeMap;

use tracing::{debug, trace, warn};

use crate::error::{Result, TrieError};
use crate::iterator::Keys;

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

/// Atoms which we wish to store in a Trie must implement
/// TrieAtom.
pub trait TrieAtom: Copy + Ord {}

// Blanket implementation which satisfies the compiler
impl<A> TrieAtom for A
where
    A: Copy + Ord,
{
    // Nothing to implement, since A already supports the other traits.
    // It has the functions it needs already
}

/// A Trie of chars, the usual way to store strings.
pub type TrieString = Trie<char>;

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(
        crate = "serde_crate",
        bound(deserialize = "A: Deserialize<'de> + Ord")
    )
)]
pub(crate) struct Node<A> {
    pub(crate) children: BTreeMap<A, Node<A>>,
    pub(crate) terminated: bool,
}

impl<A> Default for Node<A> {
    fn default() -> Self {
        Self {
            children: BTreeMap::new(),
            terminated: false,
        }
    }
}

impl<A> Node<A> {
    /// Count the terminated nodes in the subtree rooted here, including
    /// this node.
    fn count_terminated(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            if node.terminated {
                count += 1;
            }
            stack.extend(node.children.values());
        }
        count
    }
}

/// Stores a set of keys of atoms as individual nodes.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(
        crate = "serde_crate",
        try_from = "Snapshot<A>",
        bound(deserialize = "A: Deserialize<'de> + TrieAtom")
    )
)]
pub struct Trie<A> {
    pub(crate) head: Node<A>,
    count: usize,
}

impl<A> Default for Trie<A> {
    fn default() -> Self {
        Self {
            head: Node::default(),
            count: 0,
        }
    }
}

/// The unchecked shape of a serialized Trie.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
#[serde(
    crate = "serde_crate",
    bound(deserialize = "A: Deserialize<'de> + Ord")
)]
struct Snapshot<A> {
    head: Node<A>,
    count: usize,
}

#[cfg(feature = "serde")]
impl<A: TrieAtom> TryFrom<Snapshot<A>> for Trie<A> {
    type Error = TrieError;

    fn try_from(snapshot: Snapshot<A>) -> Result<Self> {
        let trie = Self {
            head: snapshot.head,
            count: snapshot.count,
        };
        trie.validate()?;
        Ok(trie)
    }
}

impl<A: TrieAtom> Trie<A> {
    /// Create a new Trie.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a Trie holding each of the supplied keys.
    pub fn from_keys<I, K>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: IntoIterator<Item = A>,
    {
        keys.into_iter().collect()
    }

    /// Clear the Trie.
    pub fn clear(&mut self) {
        debug!(discarded = self.count, "clearing trie");
        self.head = Node::default();
        self.count = 0;
    }

    /// Does the Trie contain the supplied key?
    pub fn contains<K: IntoIterator<Item = A>>(&self, key: K) -> bool {
        self.find(key).map_or(false, |n| n.terminated)
    }

    /// Does the Trie contain a node for the supplied prefix?
    ///
    /// Removing keys never removes nodes, so this stays true for a prefix
    /// once it has been inserted, until the Trie is cleared.
    pub fn contains_prefix<P: IntoIterator<Item = A>>(&self, prefix: P) -> bool {
        self.find(prefix).is_some()
    }

    /// How many keys does the Trie contain?
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.count
    }

    /// Is the Trie empty?
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// How many keys start with the supplied prefix?
    ///
    /// This walks the whole subtree below the prefix on every call. An empty
    /// prefix counts every key, so `count_prefix([])` equals `len()`.
    pub fn count_prefix<P: IntoIterator<Item = A>>(&self, prefix: P) -> usize {
        self.find(prefix).map_or(0, Node::count_terminated)
    }

    /// Insert the key into the Trie. Returns true if the key was not
    /// already present.
    pub fn insert<K: IntoIterator<Item = A>>(&mut self, key: K) -> bool {
        let mut node = &mut self.head;
        for atom in key {
            node = node.children.entry(atom).or_default();
        }
        if node.terminated {
            return false;
        }
        node.terminated = true;
        self.count += 1;
        trace!(count = self.count, "inserted key");
        true
    }

    /// Insert each of the supplied keys in order. Returns how many of them
    /// were not already present.
    pub fn insert_all<I, K>(&mut self, keys: I) -> usize
    where
        I: IntoIterator<Item = K>,
        K: IntoIterator<Item = A>,
    {
        let added = keys
            .into_iter()
            .fold(0, |added, key| added + usize::from(self.insert(key)));
        debug!(added, count = self.count, "inserted keys");
        added
    }

    /// Remove the key from the Trie. Returns true if the key was present.
    ///
    /// Only the key's terminal marker is cleared; the nodes along its path
    /// stay in place.
    pub fn remove<K: IntoIterator<Item = A>>(&mut self, key: K) -> bool {
        match self.find_mut(key) {
            Some(node) if node.terminated => {
                node.terminated = false;
                self.count -= 1;
                trace!(count = self.count, "removed key");
                true
            }
            _ => false,
        }
    }

    /// Create a sorted iterator over the keys of the Trie.
    pub fn keys(&self) -> Keys<'_, A> {
        Keys::new(&self.head, vec![])
    }

    /// Create a sorted iterator over the keys which start with the supplied
    /// prefix. Each yielded key includes the prefix.
    pub fn keys_with_prefix<P: IntoIterator<Item = A>>(&self, prefix: P) -> Keys<'_, A> {
        let prefix: Vec<A> = prefix.into_iter().collect();
        match self.find(prefix.iter().copied()) {
            Some(node) => Keys::new(node, prefix),
            None => Keys::empty(),
        }
    }

    /// Create a sorted iterator over the Trie.
    pub fn iter(&self) -> Keys<'_, A> {
        self.keys()
    }

    /// Get every key in the Trie, in ascending order.
    pub fn get_all<K: FromIterator<A>>(&self) -> Vec<K> {
        self.keys().map(|key| key.into_iter().collect()).collect()
    }

    /// Get every key which starts with the supplied prefix, in ascending
    /// order.
    pub fn get_all_with_prefix<K, P>(&self, prefix: P) -> Vec<K>
    where
        K: FromIterator<A>,
        P: IntoIterator<Item = A>,
    {
        self.keys_with_prefix(prefix)
            .map(|key| key.into_iter().collect())
            .collect()
    }

    /// Check that the recorded key count matches the terminated nodes in
    /// the tree.
    pub fn validate(&self) -> Result<()> {
        let actual = self.head.count_terminated();
        if actual != self.count {
            warn!(recorded = self.count, actual, "trie failed validation");
            return Err(TrieError::CountMismatch {
                recorded: self.count,
                actual,
            });
        }
        Ok(())
    }

    fn find<K: IntoIterator<Item = A>>(&self, key: K) -> Option<&Node<A>> {
        let mut node = &self.head;
        for atom in key {
            node = node.children.get(&atom)?;
        }
        Some(node)
    }

    fn find_mut<K: IntoIterator<Item = A>>(&mut self, key: K) -> Option<&mut Node<A>> {
        let mut node = &mut self.head;
        for atom in key {
            node = node.children.get_mut(&atom)?;
        }
        Some(node)
    }
}

impl<A: TrieAtom, K: IntoIterator<Item = A>> FromIterator<K> for Trie<A> {
    fn from_iter<I: IntoIterator<Item = K>>(keys: I) -> Self {
        let mut trie = Self::new();
        trie.insert_all(keys);
        trie
    }
}

impl<A: TrieAtom, K: IntoIterator<Item = A>> Extend<K> for Trie<A> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, keys: I) {
        self.insert_all(keys);
    }
}
