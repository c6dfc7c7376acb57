//! Engine types and constants.

use crate::analyzer::normalizer::{CellNormalizer, NormalizerConfig};
use crate::analyzer::stopwords::StopwordSet;
use crate::analyzer::tokenizer::Tokenizer;
use crate::frequency::stats::FrequencyStats;

use rustc_hash::FxHashMap;
use termfreq_types::{AnalysisConfig, ConfigError, NGram};

/// Inline capacity for the surviving tokens of one cell. Longer cells spill
/// to the heap.
pub const INLINE_TOKENS: usize = 32;

/// Tracing target for everything the engine logs.
pub const LOG_TARGET: &str = "termfreq::frequency";

/// Occurrence count of one phrase plus the order in which it was first seen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PhraseEntry {
    pub count: u64,
    /// Index among distinct phrases, in scan order. Breaks count ties.
    pub first_seen: usize,
}

/// Single-request frequency counter.
///
/// Owns its stopword set, phrase table and scratch buffers. One engine
/// serves one column and one configuration; build a fresh engine for the next
/// request instead of sharing one.
pub struct FrequencyEngine {
    pub(crate) ngram: NGram,
    pub(crate) min_length: usize,
    pub(crate) normalizer: CellNormalizer,
    pub(crate) tokenizer: Tokenizer,
    pub(crate) stopwords: StopwordSet,
    pub(crate) table: FxHashMap<Box<str>, PhraseEntry>,
    pub(crate) stats: FrequencyStats,
    pub(crate) norm_buf: String,
    /// Reusable buffer for joining multi-word phrases
    pub(crate) phrase_buf: String,
}

impl FrequencyEngine {
    /// Creates an engine from a request configuration.
    ///
    /// The stopword set is the built-in list plus `config.custom_stopwords`.
    ///
    /// # Errors
    ///
    /// Returns the [`ConfigError`] reported by [`AnalysisConfig::validate`].
    pub fn new(config: &AnalysisConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let stopwords = StopwordSet::build(&config.custom_stopwords);
        let engine = Self::with_stopwords(config.ngram, config.min_length, stopwords)?
            .with_normalizer(NormalizerConfig {
                fold_arabic_letters: config.fold_arabic_letters,
            });
        Ok(engine)
    }

    /// Creates an engine with an explicit stopword set.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ZeroMinLength` if `min_length` is zero.
    pub fn with_stopwords(
        ngram: NGram,
        min_length: usize,
        stopwords: StopwordSet,
    ) -> Result<Self, ConfigError> {
        if min_length == 0 {
            return Err(ConfigError::ZeroMinLength);
        }
        Ok(Self {
            ngram,
            min_length,
            normalizer: CellNormalizer::default(),
            tokenizer: Tokenizer::new(),
            stopwords,
            table: FxHashMap::default(),
            stats: FrequencyStats::default(),
            norm_buf: String::with_capacity(256),
            phrase_buf: String::with_capacity(64),
        })
    }

    /// Replaces the cleaning configuration.
    #[must_use]
    pub fn with_normalizer(mut self, config: NormalizerConfig) -> Self {
        self.normalizer = CellNormalizer::new(config);
        self
    }

    /// Phrase size this engine counts.
    #[inline(always)]
    pub fn ngram(&self) -> NGram {
        self.ngram
    }

    /// The stopword set in use.
    #[inline]
    pub fn stopwords(&self) -> &StopwordSet {
        &self.stopwords
    }

    /// Returns the number of distinct phrases counted so far.
    #[inline(always)]
    #[must_use]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns `true` if no phrase has been counted.
    #[inline(always)]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Occurrences of `phrase` so far, if it was seen at all.
    #[inline]
    pub fn count_of(&self, phrase: &str) -> Option<u64> {
        self.table.get(phrase).map(|e| e.count)
    }

    /// Forgets every counted phrase and resets the statistics.
    pub fn clear(&mut self) {
        self.table.clear();
        self.stats = FrequencyStats::default();
    }
}
