// wordguard-core/src/word_match.rs
//! Provides the core data structure for reporting detected sensitive words.
//!
//! A [`WordMatch`] describes a single occurrence in the scanned text. Offsets
//! are expressed in codepoints of the *original* (un-normalized) input, and
//! the carried slice is always the original text, never its folded form.

use serde::{Deserialize, Serialize};

/// Represents a single detected occurrence of a sensitive word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct WordMatch {
    /// The slice of the original input spanning this occurrence.
    pub text: String,
    /// Codepoint offset of the first matched character (inclusive).
    pub start: usize,
    /// Codepoint offset one past the last matched character (exclusive).
    pub end: usize,
}

impl WordMatch {
    /// Length of the matched span in codepoints.
    ///
    /// Equals `self.end - self.start`; `text` holds exactly this many
    /// characters.
    pub fn char_len(&self) -> usize {
        self.end - self.start
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_len_counts_codepoints() {
        let m = WordMatch {
            text: "ｂａｄ".to_string(),
            start: 2,
            end: 5,
        };
        assert_eq!(m.char_len(), 3);
    }

    #[test]
    fn test_serialization_round_trip() {
        let m = WordMatch {
            text: "secret".to_string(),
            start: 4,
            end: 10,
        };
        let json = serde_json::to_string(&m).unwrap();
        let back: WordMatch = serde_json::from_str(&json).unwrap();
        assert_eq!(m, back);
    }
}
