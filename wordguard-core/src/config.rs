//! Configuration management for `wordguard-core`.
//!
//! This module defines the word sources and the filter configuration that
//! together determine the effective word set: the union of all deny sources
//! minus the union of all allow sources, with duplicates collapsed. The
//! subtraction happens in normalized space, so an allow entry suppresses a
//! deny entry that differs only by case or width once the configured
//! normalizers fold them together.
//!
//! License: MIT OR Apache-2.0

use std::collections::HashSet;

use anyhow::{Context, Result};
use log::debug;

use crate::normalize::{normalize_word, CharNormalizer};

/// A provider of words to block.
pub trait DenySource: Send + Sync {
    fn words(&self) -> Result<Vec<String>>;
}

/// A provider of exceptions removed from the deny set before compilation.
pub trait AllowSource: Send + Sync {
    fn words(&self) -> Result<Vec<String>>;
}

/// An in-memory word list, usable as either a deny or an allow source.
#[derive(Debug, Clone, Default)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }
}

impl DenySource for WordList {
    fn words(&self) -> Result<Vec<String>> {
        Ok(self.words.clone())
    }
}

impl AllowSource for WordList {
    fn words(&self) -> Result<Vec<String>> {
        Ok(self.words.clone())
    }
}

/// Parses one word per line, skipping blank lines and `#` comments.
///
/// This is the shared format for file-backed word lists.
pub fn parse_word_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// Owns the word sources and the ordered normalizer chain for one filter.
#[derive(Default)]
pub struct FilterConfig {
    deny_sources: Vec<Box<dyn DenySource>>,
    allow_sources: Vec<Box<dyn AllowSource>>,
    normalizers: Vec<Box<dyn CharNormalizer>>,
}

impl FilterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a source of words to block.
    pub fn deny_source(mut self, source: impl DenySource + 'static) -> Self {
        self.deny_sources.push(Box::new(source));
        self
    }

    /// Adds a source of exceptions.
    pub fn allow_source(mut self, source: impl AllowSource + 'static) -> Self {
        self.allow_sources.push(Box::new(source));
        self
    }

    /// Appends a normalizer to the chain. Chain order is application order.
    pub fn normalizer(mut self, normalizer: impl CharNormalizer + 'static) -> Self {
        self.normalizers.push(Box::new(normalizer));
        self
    }

    pub(crate) fn normalizers(&self) -> &[Box<dyn CharNormalizer>] {
        &self.normalizers
    }

    /// Computes the normalized effective word set: union(deny) - union(allow).
    pub(crate) fn effective_words(&self) -> Result<HashSet<String>> {
        let mut deny = HashSet::new();
        for source in &self.deny_sources {
            for word in source.words().context("Deny source failed")? {
                deny.insert(normalize_word(&self.normalizers, &word));
            }
        }
        let mut allow = HashSet::new();
        for source in &self.allow_sources {
            for word in source.words().context("Allow source failed")? {
                allow.insert(normalize_word(&self.normalizers, &word));
            }
        }

        let effective: HashSet<String> = deny.difference(&allow).cloned().collect();
        debug!(
            "Effective word set: {} deny, {} allow, {} effective.",
            deny.len(),
            allow.len(),
            effective.len()
        );
        Ok(effective)
    }
}
