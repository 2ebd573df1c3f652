// wordguard-core/src/lib.rs
//! # WordGuard Core Library
//!
//! `wordguard-core` provides the fundamental, platform-independent logic for
//! detecting, enumerating, and redacting sensitive words in text. Callers
//! supply deny-lists (words to block) and allow-lists (exceptions removed
//! from the deny-list), optionally with per-character normalizers; the
//! effective set is compiled once into a trie automaton and scanned in a
//! single left-to-right pass.
//!
//! The library is pure and synchronous: a compiled filter performs no I/O,
//! holds no mutable scan state, and may be queried from many threads at once.
//!
//! ## Modules
//!
//! * `config`: Word sources (`DenySource`/`AllowSource`) and `FilterConfig`.
//! * `normalize`: The `CharNormalizer` trait and the built-in foldings.
//! * `automaton`: Compilation of the effective word set into a `WordTrie`.
//! * `scanner`: The shared single-pass walk behind all four query modes.
//! * `replace`: Pluggable `ReplaceStrategy` implementations.
//! * `filter`: The `WordFilter` dispatcher tying the above together.
//! * `word_match`: The `WordMatch` occurrence record.
//! * `errors`: The `FilterError` type.
//!
//! ## Matching semantics
//!
//! Matching is greedy longest-match-first per start position, and matches
//! never overlap: after a match ending at offset `j` the scan resumes at `j`.
//! The automaton is built and walked over normalized characters, but every
//! reported offset and slice refers to the original text.
//!
//! ## Usage Example
//!
//! ```rust
//! use wordguard_core::{CaseFolding, FilterConfig, WordFilter, WordList};
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     let config = FilterConfig::new()
//!         .deny_source(WordList::new(["secret", "badword"]))
//!         .allow_source(WordList::new(["badword"]))
//!         .normalizer(CaseFolding);
//!     let filter = WordFilter::new(config)?;
//!
//!     assert!(filter.contains("A Secret plan"));
//!     assert!(!filter.contains("a badword stays allowed"));
//!     assert_eq!(filter.replace("A Secret plan"), "A ****** plan");
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Fallible operations use `anyhow::Error` at the orchestration seams and the
//! structured [`FilterError`] underneath. No-match outcomes are normal
//! values (`false`, `None`, an empty `Vec`, the input returned unchanged),
//! never errors.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod automaton;
pub mod config;
pub mod errors;
pub mod filter;
pub mod normalize;
pub mod replace;
mod scanner;
pub mod word_match;

/// Re-exports the word-source traits, in-memory list, and configuration type.
pub use config::{parse_word_lines, AllowSource, DenySource, FilterConfig, WordList};

/// Re-exports the custom error type for clear error reporting.
pub use errors::FilterError;

/// Re-exports the compiled automaton for advanced usage.
pub use automaton::WordTrie;

/// Re-exports the character normalization trait and built-in foldings.
pub use normalize::{CaseFolding, CharNormalizer, WidthFolding};

/// Re-exports the replacement strategy trait and the built-in variant.
pub use replace::{CharRepeat, ReplaceStrategy};

/// Re-exports the occurrence record.
pub use word_match::WordMatch;

/// Re-exports the filter dispatcher.
pub use filter::WordFilter;
