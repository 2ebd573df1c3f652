// wordguard-core/src/filter.rs
//! filter.rs - The word filter dispatcher: one compiled automaton per
//! configuration, plus the four query modes built on top of it.
//!
//! A [`WordFilter`] is constructed from a [`FilterConfig`], compiles the
//! effective word set once, and answers `contains` / `find_first` /
//! `find_all` / `replace` against the same automaton. The automaton is held
//! behind `RwLock<Arc<_>>`: queries clone the `Arc` and scan lock-free, while
//! [`WordFilter::reload`] builds a fresh automaton off to the side and
//! publishes it in one swap, so in-flight scans observe either the old or the
//! new automaton in full. Multiple independent filters may coexist; there is
//! no process-wide singleton.
//!
//! License: MIT OR Apache-2.0

use std::collections::HashSet;
use std::sync::{Arc, RwLock};

use anyhow::{Context, Result};
use log::debug;

use crate::automaton::WordTrie;
use crate::config::FilterConfig;
use crate::replace::{CharRepeat, ReplaceStrategy};
use crate::scanner::{self, PreparedText};
use crate::word_match::WordMatch;

pub struct WordFilter {
    config: FilterConfig,
    automaton: RwLock<Arc<WordTrie>>,
}

impl WordFilter {
    /// Builds a filter, compiling the configuration's effective word set.
    ///
    /// Fails on configuration errors (a word source failing, or an empty word
    /// in the effective set); an empty effective set is valid and yields a
    /// filter that matches nothing.
    pub fn new(config: FilterConfig) -> Result<Self> {
        let automaton = Arc::new(Self::compile(&config)?);
        Ok(Self {
            config,
            automaton: RwLock::new(automaton),
        })
    }

    fn compile(config: &FilterConfig) -> Result<WordTrie> {
        let words = config.effective_words()?;
        let trie =
            WordTrie::compile(&words).context("Failed to compile the effective word set")?;
        debug!("Compiled automaton over {} word(s).", trie.word_count());
        Ok(trie)
    }

    /// Re-runs the word sources and atomically republishes the automaton.
    ///
    /// On error the previous automaton stays in place.
    pub fn reload(&self) -> Result<()> {
        let fresh = Arc::new(Self::compile(&self.config)?);
        *self.automaton.write().unwrap() = fresh;
        Ok(())
    }

    fn automaton(&self) -> Arc<WordTrie> {
        Arc::clone(&self.automaton.read().unwrap())
    }

    fn prepare(&self, text: &str) -> PreparedText {
        PreparedText::prepare(text, self.config.normalizers())
    }

    /// Number of distinct words in the compiled set.
    pub fn word_count(&self) -> usize {
        self.automaton().word_count()
    }

    /// Whether the text contains any sensitive word.
    pub fn contains(&self, text: &str) -> bool {
        scanner::contains(&self.automaton(), &self.prepare(text))
    }

    /// The first occurrence in scan order, or `None` when the text is clean.
    pub fn find_first(&self, text: &str) -> Option<WordMatch> {
        scanner::find_first(&self.automaton(), &self.prepare(text))
    }

    /// Every occurrence in order of appearance, one record per occurrence.
    pub fn find_all(&self, text: &str) -> Vec<WordMatch> {
        scanner::find_all(&self.automaton(), &self.prepare(text))
    }

    /// Like [`find_first`](Self::find_first), shaped through a caller-chosen
    /// transform.
    pub fn find_first_with<R>(&self, text: &str, transform: impl Fn(&WordMatch) -> R) -> Option<R> {
        self.find_first(text).map(|m| transform(&m))
    }

    /// Like [`find_all`](Self::find_all), shaped through a caller-chosen
    /// transform.
    pub fn find_all_with<R>(&self, text: &str, transform: impl Fn(&WordMatch) -> R) -> Vec<R> {
        self.find_all(text).iter().map(transform).collect()
    }

    /// The distinct matched surface texts, in order of first appearance.
    ///
    /// This is the deduplicated view over [`find_all`](Self::find_all) that
    /// callers interested in "which words occurred" rather than "where"
    /// usually want.
    pub fn find_all_words(&self, text: &str) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut words = Vec::new();
        for m in self.find_all(text) {
            if seen.insert(m.text.clone()) {
                words.push(m.text);
            }
        }
        words
    }

    /// Replaces every occurrence with `*` repeated to the span's character
    /// count, preserving the overall character count of the text.
    pub fn replace(&self, text: &str) -> String {
        self.replace_with(text, &CharRepeat::default())
    }

    /// Replaces every occurrence with the given character repeated to the
    /// span's character count.
    pub fn replace_with_char(&self, text: &str, mask: char) -> String {
        self.replace_with(text, &CharRepeat::new(mask))
    }

    /// Replaces every occurrence using a caller-supplied strategy.
    pub fn replace_with(&self, text: &str, strategy: &dyn ReplaceStrategy) -> String {
        scanner::replace(&self.automaton(), &self.prepare(text), strategy)
    }
}
