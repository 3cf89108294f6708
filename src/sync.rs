//! Provides a Trie which can be shared between threads.
//!
//! [`SharedTrie`] wraps a [`Trie`] in a single reader-writer lock. Lookups,
//! prefix counts and listings take the read lock and may run concurrently;
//! insertion, removal and clearing take the write lock.
//!
//! ```
//! use prefixset::sync::SharedTrie;
//! use std::thread;
//!
//! let trie = SharedTrie::new();
//! let handles: Vec<_> = ["apple", "banana", "band"]
//!     .into_iter()
//!     .map(|word| {
//!         let trie = trie.clone();
//!         thread::spawn(move || trie.insert(word.chars()))
//!     })
//!     .collect();
//! for handle in handles {
//!     handle.join().unwrap();
//! }
//! assert_eq!(trie.count_prefix("ban".chars()), 2);
//! ```

use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::trie::{Trie, TrieAtom};

/// A cloneable, lock-protected handle to a Trie. Clones share the same
/// underlying Trie.
#[derive(Debug)]
pub struct SharedTrie<A> {
    inner: Arc<RwLock<Trie<A>>>,
}

impl<A> Clone for SharedTrie<A> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<A> Default for SharedTrie<A> {
    fn default() -> Self {
        Self::from(Trie::default())
    }
}

impl<A> From<Trie<A>> for SharedTrie<A> {
    fn from(trie: Trie<A>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(trie)),
        }
    }
}

impl<A: TrieAtom> SharedTrie<A> {
    /// Create a new, empty SharedTrie.
    pub fn new() -> Self {
        Self::default()
    }

    /// Lock the Trie for reading. Use this to run several queries against
    /// the same state.
    pub fn read(&self) -> RwLockReadGuard<'_, Trie<A>> {
        self.inner.read()
    }

    /// Lock the Trie for writing.
    pub fn write(&self) -> RwLockWriteGuard<'_, Trie<A>> {
        self.inner.write()
    }

    /// Recover the Trie if this is the last handle to it, otherwise hand
    /// the handle back.
    pub fn into_inner(self) -> Result<Trie<A>, Self> {
        Arc::try_unwrap(self.inner)
            .map(RwLock::into_inner)
            .map_err(|inner| Self { inner })
    }

    /// See [`Trie::insert`].
    pub fn insert<K: IntoIterator<Item = A>>(&self, key: K) -> bool {
        self.write().insert(key)
    }

    /// See [`Trie::insert_all`]. The keys are inserted under a single lock.
    pub fn insert_all<I, K>(&self, keys: I) -> usize
    where
        I: IntoIterator<Item = K>,
        K: IntoIterator<Item = A>,
    {
        self.write().insert_all(keys)
    }

    /// See [`Trie::remove`].
    pub fn remove<K: IntoIterator<Item = A>>(&self, key: K) -> bool {
        self.write().remove(key)
    }

    /// See [`Trie::clear`].
    pub fn clear(&self) {
        self.write().clear()
    }

    pub fn contains<K: IntoIterator<Item = A>>(&self, key: K) -> bool {
        self.read().contains(key)
    }

    pub fn contains_prefix<P: IntoIterator<Item = A>>(&self, prefix: P) -> bool {
        self.read().contains_prefix(prefix)
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    pub fn count_prefix<P: IntoIterator<Item = A>>(&self, prefix: P) -> usize {
        self.read().count_prefix(prefix)
    }

    pub fn get_all<K: FromIterator<A>>(&self) -> Vec<K> {
        self.read().get_all()
    }

    pub fn get_all_with_prefix<K, P>(&self, prefix: P) -> Vec<K>
    where
        K: FromIterator<A>,
        P: IntoIterator<Item = A>,
    {
        self.read().get_all_with_prefix(prefix)
    }
}
