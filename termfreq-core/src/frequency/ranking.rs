//! Ranking and top-N truncation.

use core::cmp::Ordering;

use crate::frequency::types::{FrequencyEngine, PhraseEntry};
use termfreq_types::{FrequencyReport, FrequencyRow};

/// Higher counts first; equal counts in first-seen order. Total, because
/// `first_seen` is unique per phrase.
#[inline(always)]
fn rank_order(a: &PhraseEntry, b: &PhraseEntry) -> Ordering {
    b.count
        .cmp(&a.count)
        .then_with(|| a.first_seen.cmp(&b.first_seen))
}

impl FrequencyEngine {
    /// Returns the `limit` most frequent phrases, ranked from 1.
    ///
    /// Only the kept prefix is fully sorted: for large tables the cut is found
    /// with a selection pass first.
    pub fn top(&self, limit: usize) -> Vec<FrequencyRow> {
        if limit == 0 || self.table.is_empty() {
            return Vec::new();
        }

        let mut ranked: Vec<(&str, &PhraseEntry)> =
            self.table.iter().map(|(k, v)| (&**k, v)).collect();

        if ranked.len() > limit {
            ranked.select_nth_unstable_by(limit, |a, b| rank_order(a.1, b.1));
            ranked.truncate(limit);
        }
        ranked.sort_unstable_by(|a, b| rank_order(a.1, b.1));

        ranked
            .into_iter()
            .enumerate()
            .map(|(i, (phrase, entry))| FrequencyRow {
                rank: i + 1,
                phrase: phrase.to_owned(),
                count: entry.count,
            })
            .collect()
    }

    /// Builds the report for the top `limit` phrases, with both the returned
    /// and the whole-column totals.
    pub fn report(&self, limit: usize) -> FrequencyReport {
        if self.table.is_empty() {
            return FrequencyReport::empty(self.ngram);
        }

        let rows = self.top(limit);
        let total_in_returned_rows = rows.iter().map(|r| r.count).sum();
        FrequencyReport {
            ngram: self.ngram,
            rows,
            total_in_returned_rows,
            unique_phrases: self.table.len(),
            total_occurrences: self.stats.phrase_occurrences,
        }
    }
}
