//! Public API for feeding cells and running whole-column analyses.

use std::borrow::Borrow;

use crate::analyzer::ngram::{count_ngrams, extract_ngrams};
use crate::frequency::types::{FrequencyEngine, PhraseEntry, INLINE_TOKENS, LOG_TARGET};
use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use termfreq_types::{AnalysisConfig, ConfigError, FrequencyReport, NGram, RawCell};

impl FrequencyEngine {
    /// Cleans, tokenizes and filters one cell, then counts its phrases.
    ///
    /// Phrases are assembled from this cell's surviving tokens only, so no
    /// phrase ever joins words from two cells.
    pub fn add_cell(&mut self, cell: &RawCell) {
        let Self {
            ngram,
            min_length,
            normalizer,
            tokenizer,
            stopwords,
            table,
            stats,
            norm_buf,
            phrase_buf,
        } = self;

        stats.rows += 1;
        normalizer.normalize_cell_into(cell, norm_buf);
        if norm_buf.is_empty() {
            stats.empty_rows += 1;
            tracing::trace!(target: LOG_TARGET, row = stats.rows, "cell empty after cleaning");
            return;
        }

        stats.tokens += tokenizer.count(norm_buf.as_str()) as u64;

        let mut survivors: SmallVec<[&str; INLINE_TOKENS]> = SmallVec::new();
        tokenizer.tokenize(norm_buf.as_str(), |token, _| {
            if stopwords.contains(token) {
                stats.stopword_tokens += 1;
            } else if token.chars().count() < *min_length {
                stats.short_tokens += 1;
            } else {
                survivors.push(token);
            }
        });

        stats.phrase_occurrences += count_ngrams(survivors.len(), *ngram) as u64;
        extract_ngrams(&survivors, *ngram, phrase_buf, |phrase| Self::bump(table, phrase));
    }

    /// Adds every cell of a column in order.
    pub fn add_column<I>(&mut self, cells: I)
    where
        I: IntoIterator,
        I::Item: Borrow<RawCell>,
    {
        for cell in cells {
            self.add_cell(cell.borrow());
        }
    }

    #[inline(always)]
    fn bump(table: &mut FxHashMap<Box<str>, PhraseEntry>, phrase: &str) {
        if let Some(entry) = table.get_mut(phrase) {
            entry.count += 1;
            return;
        }
        let first_seen = table.len();
        table.insert(
            phrase.into(),
            PhraseEntry {
                count: 1,
                first_seen,
            },
        );
    }
}

/// Ranks the phrases of one column.
///
/// Builds the stopword set from the built-in list plus
/// `config.custom_stopwords`, scans `cells` once, and returns the `top_n`
/// most frequent phrases. Ties keep the order in which phrases were first
/// seen.
///
/// An empty column, or one where nothing survives filtering, yields an empty
/// report rather than an error.
///
/// # Errors
///
/// Fails fast with [`ConfigError`] before any cell is read if `top_n` or
/// `min_length` is zero.
///
/// # Example
///
/// ```
/// use termfreq_core::compute_frequency;
/// use termfreq_types::{AnalysisConfig, RawCell};
///
/// let cells = [RawCell::from("rust is fast"), RawCell::from("rust is safe")];
/// let config = AnalysisConfig::default();
/// let report = compute_frequency(&cells, &config).unwrap();
///
/// assert_eq!(report.rows[0].phrase, "rust");
/// assert_eq!(report.rows[0].count, 2);
/// assert_eq!(report.rows.len(), 3);
/// ```
pub fn compute_frequency<I>(
    cells: I,
    config: &AnalysisConfig,
) -> Result<FrequencyReport, ConfigError>
where
    I: IntoIterator,
    I::Item: Borrow<RawCell>,
{
    let mut engine = FrequencyEngine::new(config)?;
    engine.add_column(cells);
    let report = engine.report(config.top_n);

    let stats = engine.stats();
    tracing::debug!(
        target: LOG_TARGET,
        ngram = %config.ngram,
        top_n = config.top_n,
        returned = report.rows.len(),
        %stats,
        "frequency table ranked"
    );

    Ok(report)
}

/// Runs [`compute_frequency`] once per requested phrase size over the same
/// column, returning the reports in the order of `ngrams`.
///
/// `config.ngram` is ignored; every other setting applies to each pass.
///
/// # Errors
///
/// Same as [`compute_frequency`].
pub fn compute_frequencies(
    cells: &[RawCell],
    ngrams: &[NGram],
    config: &AnalysisConfig,
) -> Result<Vec<FrequencyReport>, ConfigError> {
    config.validate()?;
    ngrams
        .iter()
        .map(|&n| compute_frequency(cells, &config.clone().with_ngram(n)))
        .collect()
}
