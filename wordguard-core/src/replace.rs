// wordguard-core/src/replace.rs
//! Pluggable replacement strategies for matched spans.
//!
//! A strategy turns one [`WordMatch`] into replacement text. Implementations
//! must be deterministic and side-effect free; the scanner treats them as
//! opaque. The built-in [`CharRepeat`] fills the span with a single repeated
//! character, preserving the overall character count of the text.

use crate::word_match::WordMatch;

/// Capability interface: given a matched span, produce replacement text.
pub trait ReplaceStrategy: Send + Sync {
    fn replace(&self, m: &WordMatch) -> String;
}

/// Replaces a match with its character count worth of a fixed character.
///
/// The default character is `*`, so `"badword"` becomes `"*******"` and
/// fixed-width layouts downstream are not disturbed.
#[derive(Debug, Clone, Copy)]
pub struct CharRepeat {
    mask: char,
}

impl CharRepeat {
    pub fn new(mask: char) -> Self {
        Self { mask }
    }
}

impl Default for CharRepeat {
    fn default() -> Self {
        Self::new('*')
    }
}

impl ReplaceStrategy for CharRepeat {
    fn replace(&self, m: &WordMatch) -> String {
        std::iter::repeat(self.mask).take(m.char_len()).collect()
    }
}
