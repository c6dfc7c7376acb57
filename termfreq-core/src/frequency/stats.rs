//! Statistics and FrequencyStats.

use crate::frequency::types::FrequencyEngine;

/// A snapshot of what the engine has seen so far.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrequencyStats {
    /// Cells fed to the engine, including missing ones.
    pub rows: u64,
    /// Cells that were missing or had nothing left after cleaning.
    pub empty_rows: u64,
    /// Tokens produced by the tokenizer before filtering.
    pub tokens: u64,
    /// Tokens dropped because they are stopwords.
    pub stopword_tokens: u64,
    /// Tokens dropped because they are shorter than the minimum length.
    pub short_tokens: u64,
    /// Phrases counted, with repetition.
    pub phrase_occurrences: u64,
    /// Distinct phrases counted.
    pub unique_phrases: usize,
}

impl FrequencyEngine {
    /// Returns engine statistics.
    pub fn stats(&self) -> FrequencyStats {
        FrequencyStats {
            unique_phrases: self.table.len(),
            ..self.stats
        }
    }
}

impl FrequencyStats {
    /// Tokens that survived filtering.
    #[inline]
    pub fn surviving_tokens(&self) -> u64 {
        self.tokens - self.stopword_tokens - self.short_tokens
    }
}

impl core::fmt::Display for FrequencyStats {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{} rows ({} empty), {} tokens ({} stopwords, {} too short), {} phrases ({} unique)",
            self.rows,
            self.empty_rows,
            self.tokens,
            self.stopword_tokens,
            self.short_tokens,
            self.phrase_occurrences,
            self.unique_phrases
        )
    }
}
