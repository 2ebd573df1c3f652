// wordguard-core/src/scanner.rs
//! scanner.rs - The single-pass walk over input text against the automaton.
//!
//! All four query modes (`contains`, `find_first`, `find_all`, `replace`)
//! share the same walk: from every position not consumed by a prior match,
//! extend along trie children as far as possible and take the longest word
//! ending reached (greedy longest-match-first). After a match `[i, j)` the
//! scan resumes at `j`, so matches never overlap; on failure the scan
//! advances by one character.
//!
//! Matching happens in normalized-character space while offsets and slices
//! refer to the original text. The two cursors advance in lockstep, one
//! character at a time, which the `char -> char` normalizer contract makes
//! sound.
//!
//! License: MIT OR Apache-2.0

use crate::automaton::WordTrie;
use crate::normalize::{normalize_char, CharNormalizer};
use crate::replace::ReplaceStrategy;
use crate::word_match::WordMatch;

/// Input text decoded once into parallel original/normalized codepoint
/// buffers. Each scan allocates its own `PreparedText`; nothing is shared
/// between concurrent scans.
pub(crate) struct PreparedText {
    original: Vec<char>,
    normalized: Vec<char>,
}

impl PreparedText {
    pub(crate) fn prepare(text: &str, chain: &[Box<dyn CharNormalizer>]) -> Self {
        let mut original = Vec::with_capacity(text.len());
        let mut normalized = Vec::with_capacity(text.len());
        for c in text.chars() {
            original.push(c);
            normalized.push(normalize_char(chain, c));
        }
        Self {
            original,
            normalized,
        }
    }

    fn make_match(&self, start: usize, end: usize) -> WordMatch {
        WordMatch {
            text: self.original[start..end].iter().collect(),
            start,
            end,
        }
    }
}

/// Walks trie children from `start`, returning the end offset (exclusive) of
/// the longest word terminating on the path, if any.
fn longest_match_end(trie: &WordTrie, normalized: &[char], start: usize) -> Option<usize> {
    let mut node = trie.root();
    let mut best = None;
    for (offset, &c) in normalized[start..].iter().enumerate() {
        match node.child(c) {
            Some(next) => {
                if next.is_word_end() {
                    best = Some(start + offset + 1);
                }
                node = next;
            }
            None => break,
        }
    }
    best
}

/// Containment check; short-circuits on the first word ending reached,
/// without building match records.
pub(crate) fn contains(trie: &WordTrie, text: &PreparedText) -> bool {
    if trie.is_empty() {
        return false;
    }
    for start in 0..text.normalized.len() {
        let mut node = trie.root();
        for &c in &text.normalized[start..] {
            match node.child(c) {
                Some(next) => {
                    if next.is_word_end() {
                        return true;
                    }
                    node = next;
                }
                None => break,
            }
        }
    }
    false
}

/// First match in scan order, extended to its longest form.
pub(crate) fn find_first(trie: &WordTrie, text: &PreparedText) -> Option<WordMatch> {
    if trie.is_empty() {
        return None;
    }
    for start in 0..text.normalized.len() {
        if let Some(end) = longest_match_end(trie, &text.normalized, start) {
            return Some(text.make_match(start, end));
        }
    }
    None
}

/// Every occurrence, in order of appearance, one record per occurrence.
///
/// Repeated occurrences of the same word at different offsets are all
/// reported; deduplication by surface text is a caller-side concern.
pub(crate) fn find_all(trie: &WordTrie, text: &PreparedText) -> Vec<WordMatch> {
    let mut matches = Vec::new();
    if trie.is_empty() {
        return matches;
    }
    let mut i = 0;
    while i < text.normalized.len() {
        match longest_match_end(trie, &text.normalized, i) {
            Some(end) => {
                matches.push(text.make_match(i, end));
                i = end;
            }
            None => i += 1,
        }
    }
    matches
}

/// Same walk as `find_all`, emitting unmatched spans verbatim and matched
/// spans through the replacement strategy.
pub(crate) fn replace(
    trie: &WordTrie,
    text: &PreparedText,
    strategy: &dyn ReplaceStrategy,
) -> String {
    let mut output = String::with_capacity(text.original.len());
    if trie.is_empty() {
        output.extend(text.original.iter());
        return output;
    }
    let mut i = 0;
    while i < text.normalized.len() {
        match longest_match_end(trie, &text.normalized, i) {
            Some(end) => {
                let m = text.make_match(i, end);
                output.push_str(&strategy.replace(&m));
                i = end;
            }
            None => {
                output.push(text.original[i]);
                i += 1;
            }
        }
    }
    output
}
