// wordguard-core/src/automaton.rs
//! automaton.rs - Compilation of an effective word set into a trie automaton.
//!
//! The automaton is the compiled form of the deny-minus-allow word set. It is
//! a rooted tree of states keyed by normalized characters, walked by the
//! scanner in a single left-to-right pass. Construction is O(total characters
//! across all words); after construction the automaton is immutable and can
//! be shared read-only across concurrent scans.
//!
//! License: MIT OR Apache-2.0

use std::collections::{HashMap, HashSet};

use log::debug;

use crate::errors::FilterError;

/// A single state in the trie.
///
/// Children are keyed by one normalized character each; `word_end` marks the
/// terminal state of a compiled word.
#[derive(Debug, Default)]
pub(crate) struct TrieNode {
    children: HashMap<char, TrieNode>,
    word_end: bool,
}

impl TrieNode {
    pub(crate) fn child(&self, c: char) -> Option<&TrieNode> {
        self.children.get(&c)
    }

    pub(crate) fn is_word_end(&self) -> bool {
        self.word_end
    }
}

/// The compiled, immutable matching structure over the effective word set.
#[derive(Debug, Default)]
pub struct WordTrie {
    root: TrieNode,
    word_count: usize,
}

impl WordTrie {
    /// Compiles a set of already-normalized words into a trie.
    ///
    /// An empty set yields a root-only automaton that matches nothing. An
    /// empty word is a configuration error: it would produce degenerate
    /// zero-length matches at every position, so compilation fails fast
    /// instead.
    pub fn compile(words: &HashSet<String>) -> Result<Self, FilterError> {
        debug!("Starting compilation of {} words.", words.len());

        let mut root = TrieNode::default();
        for word in words {
            if word.is_empty() {
                return Err(FilterError::EmptyWord);
            }
            let mut node = &mut root;
            for c in word.chars() {
                node = node.children.entry(c).or_default();
            }
            node.word_end = true;
        }

        debug!("Finished compiling automaton. Total words: {}.", words.len());
        Ok(Self {
            root,
            word_count: words.len(),
        })
    }

    /// Number of distinct words compiled into this automaton.
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// True when no words were compiled; such an automaton matches nothing.
    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    pub(crate) fn root(&self) -> &TrieNode {
        &self.root
    }
}
