// wordguard-core/src/normalize.rs
//! Character normalization applied identically at compile time (to stored
//! words) and at scan time (to the haystack).
//!
//! A normalizer maps one character to one canonical character. The `char ->
//! char` signature makes the required 1:1 character-count mapping a type-level
//! guarantee: a normalizer that cannot fold a character into a single
//! codepoint must return the input unchanged. Normalizers compose as an
//! ordered chain, applied left to right per character.
//!
//! License: MIT OR Apache-2.0

/// A pure, total, per-character canonicalization function.
///
/// Implementations must be deterministic and side-effect free; the scanner
/// invokes them once per input character during both build and scan.
pub trait CharNormalizer: Send + Sync {
    fn normalize(&self, c: char) -> char;
}

/// Folds characters to lowercase.
///
/// Characters whose Unicode lowercase form expands to more than one codepoint
/// (e.g. `İ`) are left unchanged so the character count of the text is
/// preserved.
#[derive(Debug, Clone, Copy, Default)]
pub struct CaseFolding;

impl CharNormalizer for CaseFolding {
    fn normalize(&self, c: char) -> char {
        let mut lower = c.to_lowercase();
        match (lower.next(), lower.next()) {
            (Some(folded), None) => folded,
            _ => c,
        }
    }
}

/// Folds full-width ASCII variants (U+FF01..=U+FF5E) to their half-width
/// forms, and the ideographic space (U+3000) to an ASCII space.
#[derive(Debug, Clone, Copy, Default)]
pub struct WidthFolding;

impl CharNormalizer for WidthFolding {
    fn normalize(&self, c: char) -> char {
        match c {
            '\u{ff01}'..='\u{ff5e}' => {
                char::from_u32(c as u32 - 0xff01 + 0x21).unwrap_or(c)
            }
            '\u{3000}' => ' ',
            _ => c,
        }
    }
}

/// Runs a character through the configured normalizer chain.
pub(crate) fn normalize_char(chain: &[Box<dyn CharNormalizer>], c: char) -> char {
    chain.iter().fold(c, |acc, n| n.normalize(acc))
}

/// Normalizes a stored word character by character.
pub(crate) fn normalize_word(chain: &[Box<dyn CharNormalizer>], word: &str) -> String {
    word.chars().map(|c| normalize_char(chain, c)).collect()
}
