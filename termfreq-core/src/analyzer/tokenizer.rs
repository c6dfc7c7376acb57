//! Streaming tokenizer over cleaned cell text.
//!
//! Given cleaned input like `"data science team"`, it emits each word with its
//! position in the cell:
//!
//! ```ignore
//! ("data", 0)
//! ("science", 1)
//! ("team", 2)
//! ```
//!
//! Tokens are slices of the input, emitted through a callback, so splitting a
//! cell never allocates.
//!
//! ## The Input Contract
//!
//! The tokenizer expects text produced by
//! [`CellNormalizer`](crate::analyzer::normalizer::CellNormalizer):
//! - no leading or trailing space
//! - words separated by exactly one ASCII space
//!
//! Violations panic in debug builds.

use core::str;
use memchr::memchr_iter;

/// Splits cleaned text into tokens.
#[derive(Debug, Default, Copy, Clone)]
pub struct Tokenizer;

impl Tokenizer {
    /// Creates a new tokenizer.
    #[inline]
    pub const fn new() -> Self {
        Self
    }

    /// Tokenizes cleaned input and emits `(text, position)`.
    ///
    /// Position is `u32`. After emitting a token at position `u32::MAX`,
    /// further emissions stop.
    #[inline]
    pub fn tokenize<'n, F>(&self, cleaned: &'n str, mut emit: F)
    where
        F: FnMut(&'n str, u32),
    {
        let bytes = cleaned.as_bytes();

        debug_assert!(
            bytes.first().is_none_or(|&b| b != b' '),
            "tokenizer: leading whitespace, normalizer contract violated"
        );

        debug_assert!(
            bytes.last().is_none_or(|&b| b != b' '),
            "tokenizer: trailing whitespace, normalizer contract violated"
        );

        debug_assert!(
            !cleaned.contains("  "),
            "tokenizer: consecutive spaces, normalizer contract violated"
        );

        if bytes.is_empty() {
            return;
        }

        let mut start = 0usize;
        let mut pos = 0u32;

        for i in memchr_iter(b' ', bytes) {
            if start < i {
                // ASCII space is never a UTF-8 continuation byte, so both ends
                // of the slice are char boundaries.
                emit(&cleaned[start..i], pos);
                if pos == u32::MAX {
                    return;
                }
                pos += 1;
            }
            start = i + 1;
        }

        if start < bytes.len() {
            emit(&cleaned[start..], pos);
        }
    }

    /// Counts tokens without emitting them.
    #[inline]
    pub fn count(&self, cleaned: &str) -> usize {
        if cleaned.is_empty() {
            0
        } else {
            memchr_iter(b' ', cleaned.as_bytes()).count() + 1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(input: &str) -> Vec<(&str, u32)> {
        let mut out = Vec::new();
        Tokenizer::new().tokenize(input, |text, pos| out.push((text, pos)));
        out
    }

    #[test]
    fn single_word() {
        let out = collect("hello");
        assert_eq!(out, vec![("hello", 0)]);
    }

    #[test]
    fn persian_words() {
        let out = collect("شرکت عالی است");
        assert_eq!(out, vec![("شرکت", 0), ("عالی", 1), ("است", 2)]);
    }

    #[test]
    fn positions_are_sequential() {
        let out = collect("the quick brown fox");
        assert_eq!(out.len(), 4);
        for (i, (_, pos)) in out.iter().enumerate() {
            assert_eq!(*pos, i as u32);
        }
    }

    #[test]
    fn empty_emits_nothing() {
        assert!(collect("").is_empty());
    }

    #[test]
    fn tokens_are_slices_of_input() {
        let input = String::from("hello world");
        let base = input.as_ptr() as usize;
        let end = base + input.len();

        Tokenizer::new().tokenize(&input, |text, _| {
            let ptr = text.as_ptr() as usize;
            assert!(ptr >= base && ptr < end);
        });
    }

    #[test]
    fn count_matches_emitted() {
        let t = Tokenizer::new();
        for s in ["", "a", "a b", "داده علم تیم", "one two three four"] {
            assert_eq!(t.count(s), collect(s).len());
        }
    }

    #[test]
    fn tokenizer_is_reusable() {
        let t = Tokenizer::new();

        let mut n = 0usize;
        t.tokenize("hello world", |_, _| n += 1);
        assert_eq!(n, 2);

        n = 0;
        t.tokenize("one two three", |_, _| n += 1);
        assert_eq!(n, 3);
    }
}
