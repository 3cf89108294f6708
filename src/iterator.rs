//! Provides Trie iterators.
//!
//! Both iterators walk the tree depth first, visiting children in ascending
//! atom order, so keys are produced in lexicographic order. The key being
//! built is held in a single buffer: an atom is pushed when a child is
//! entered and popped once that child's subtree is exhausted.
//!
//! ```
//! use prefixset::trie::TrieString;
//!
//! let trie = TrieString::from_keys(["fig", "date", "fern"].iter().map(|s| s.chars()));
//! let keys: Vec<String> = trie.iter().map(String::from_iter).collect();
//! assert_eq!(keys, vec!["date", "fern", "fig"]);
//! ```
use std::collections::btree_map;
use std::iter::FusedIterator;

use crate::trie::{Node, Trie, TrieAtom};

/// Sorted iterator over the keys of a Trie, or of the part of a Trie
/// below a prefix.
#[derive(Debug)]
pub struct Keys<'a, A> {
    pending: Option<Vec<A>>,
    buffer: Vec<A>,
    stack: Vec<btree_map::Iter<'a, A, Node<A>>>,
}

impl<'a, A: TrieAtom> Keys<'a, A> {
    pub(crate) fn new(start: &'a Node<A>, prefix: Vec<A>) -> Self {
        Self {
            pending: start.terminated.then(|| prefix.clone()),
            buffer: prefix,
            stack: vec![start.children.iter()],
        }
    }

    pub(crate) fn empty() -> Self {
        Self {
            pending: None,
            buffer: vec![],
            stack: vec![],
        }
    }
}

impl<'a, A: TrieAtom> Iterator for Keys<'a, A> {
    type Item = Vec<A>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(key) = self.pending.take() {
            return Some(key);
        }
        loop {
            let children = self.stack.last_mut()?;
            match children.next() {
                Some((atom, child)) => {
                    self.buffer.push(*atom);
                    self.stack.push(child.children.iter());
                    if child.terminated {
                        return Some(self.buffer.clone());
                    }
                }
                None => {
                    self.stack.pop();
                    // The bottom of the stack is the start node, whose
                    // atoms belong to the prefix.
                    if !self.stack.is_empty() {
                        self.buffer.pop();
                    }
                }
            }
        }
    }
}

impl<'a, A: TrieAtom> FusedIterator for Keys<'a, A> {}

impl<'a, A: TrieAtom> IntoIterator for &'a Trie<A> {
    type Item = Vec<A>;
    type IntoIter = Keys<'a, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.keys()
    }
}

/// Consuming sorted iterator over a Trie.
#[derive(Debug)]
pub struct IntoIter<A> {
    pending: Option<Vec<A>>,
    buffer: Vec<A>,
    stack: Vec<btree_map::IntoIter<A, Node<A>>>,
}

impl<A: TrieAtom> Iterator for IntoIter<A> {
    type Item = Vec<A>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(key) = self.pending.take() {
            return Some(key);
        }
        loop {
            let children = self.stack.last_mut()?;
            match children.next() {
                Some((atom, child)) => {
                    self.buffer.push(atom);
                    let terminated = child.terminated;
                    self.stack.push(child.children.into_iter());
                    if terminated {
                        return Some(self.buffer.clone());
                    }
                }
                None => {
                    self.stack.pop();
                    if !self.stack.is_empty() {
                        self.buffer.pop();
                    }
                }
            }
        }
    }
}

impl<A: TrieAtom> FusedIterator for IntoIter<A> {}

impl<A: TrieAtom> IntoIterator for Trie<A> {
    type Item = Vec<A>;
    type IntoIter = IntoIter<A>;

    fn into_iter(self) -> Self::IntoIter {
        let head = self.head;
        IntoIter {
            pending: head.terminated.then(Vec::new),
            buffer: vec![],
            stack: vec![head.children.into_iter()],
        }
    }
}
