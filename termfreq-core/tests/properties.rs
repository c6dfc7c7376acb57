//! Property tests for cleaning, filtering and counting.

use proptest::prelude::*;
use termfreq_core::analyzer::normalizer::is_allowed;
use termfreq_core::{CellNormalizer, FrequencyEngine, StopwordSet};
use termfreq_types::{NGram, RawCell};

/// Words mixing Latin, digits, underscore and Persian letters, plus a few
/// built-in stopwords in both scripts.
fn word() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z0-9_]{1,6}",
        "[آ-ی]{1,5}",
        Just("The".to_owned()),
        Just("and".to_owned()),
        Just("از".to_owned()),
        Just("است".to_owned()),
    ]
}

/// A raw cell: words joined by a mix of spaces and punctuation.
fn raw_cell() -> impl Strategy<Value = String> {
    prop::collection::vec((word(), "[ ,.!?\t-]{1,3}"), 0..8).prop_map(|parts| {
        parts
            .into_iter()
            .map(|(w, sep)| format!("{w}{sep}"))
            .collect::<String>()
    })
}

fn ngram() -> impl Strategy<Value = NGram> {
    prop_oneof![Just(NGram::Unigram), Just(NGram::Bigram), Just(NGram::Trigram)]
}

/// Surviving tokens of one cell, computed independently of the engine.
fn survivors(raw: &str, stopwords: &StopwordSet, min_length: usize) -> Vec<String> {
    CellNormalizer::default()
        .normalize(raw)
        .split(' ')
        .filter(|t| !t.is_empty())
        .filter(|t| !stopwords.contains(t))
        .filter(|t| t.chars().count() >= min_length)
        .map(str::to_owned)
        .collect()
}

proptest! {
    #[test]
    fn cleaning_is_idempotent(s in "[a-zA-Z0-9_آ-ی]{1,8}( [a-zA-Z0-9_آ-ی]{1,8}){0,5}") {
        let n = CellNormalizer::default();
        prop_assert_eq!(n.normalize(&s), s.clone());
        let once = n.normalize(&s);
        prop_assert_eq!(n.normalize(&once), once.clone());
    }

    #[test]
    fn cleaned_text_is_whitelisted(s in any::<String>()) {
        let out = CellNormalizer::default().normalize(&s);
        prop_assert!(out.chars().all(|c| c == ' ' || is_allowed(c)));
        prop_assert!(!out.contains("  "));
        prop_assert!(!out.starts_with(' '));
        prop_assert!(!out.ends_with(' '));
    }

    #[test]
    fn no_stopword_survives(cells in prop::collection::vec(raw_cell(), 0..12)) {
        let stopwords = StopwordSet::build("alpha, BETA");
        let mut engine =
            FrequencyEngine::with_stopwords(NGram::Unigram, 1, stopwords.clone()).unwrap();
        engine.add_column(cells.iter().map(|c| RawCell::from(c.as_str())));

        for row in engine.top(usize::MAX) {
            prop_assert!(!stopwords.contains(&row.phrase.to_lowercase()));
        }
    }

    #[test]
    fn no_short_token_survives(
        cells in prop::collection::vec(raw_cell(), 0..12),
        min_length in 1usize..5,
    ) {
        let stopwords = StopwordSet::builtin();
        let mut engine =
            FrequencyEngine::with_stopwords(NGram::Unigram, min_length, stopwords).unwrap();
        engine.add_column(cells.iter().map(|c| RawCell::from(c.as_str())));

        for row in engine.top(usize::MAX) {
            prop_assert!(row.phrase.chars().count() >= min_length);
        }
    }

    #[test]
    fn counts_are_conserved_without_truncation(
        cells in prop::collection::vec(raw_cell(), 0..12),
        n in ngram(),
        min_length in 1usize..4,
    ) {
        let stopwords = StopwordSet::builtin();
        let expected: u64 = cells
            .iter()
            .map(|c| {
                let k = survivors(c, &stopwords, min_length).len();
                k.saturating_sub(n.size() - 1) as u64
            })
            .sum();

        let mut engine = FrequencyEngine::with_stopwords(n, min_length, stopwords).unwrap();
        engine.add_column(cells.iter().map(|c| RawCell::from(c.as_str())));

        let report = engine.report(usize::MAX);
        prop_assert_eq!(report.rows.len(), report.unique_phrases);
        prop_assert_eq!(report.total_in_returned_rows, expected);
        prop_assert_eq!(report.total_occurrences, expected);
    }

    #[test]
    fn ranks_are_ordered(cells in prop::collection::vec(raw_cell(), 0..12), limit in 1usize..10) {
        let mut engine =
            FrequencyEngine::with_stopwords(NGram::Unigram, 1, StopwordSet::empty()).unwrap();
        engine.add_column(cells.iter().map(|c| RawCell::from(c.as_str())));

        let top = engine.top(limit);
        prop_assert!(top.len() <= limit);
        for (i, row) in top.iter().enumerate() {
            prop_assert_eq!(row.rank, i + 1);
        }
        for pair in top.windows(2) {
            prop_assert!(pair[0].count >= pair[1].count);
        }
    }

    #[test]
    fn phrases_stay_within_one_row(
        lengths in prop::collection::vec(0usize..6, 1..10),
        n in prop_oneof![Just(NGram::Bigram), Just(NGram::Trigram)],
    ) {
        // Every word carries its row number, so a phrase built from two rows
        // would mix prefixes.
        let cells: Vec<RawCell> = lengths
            .iter()
            .enumerate()
            .map(|(row, &len)| {
                let words: Vec<String> = (0..len).map(|j| format!("r{row}w{j}")).collect();
                RawCell::from(words.join(" "))
            })
            .collect();

        let mut engine = FrequencyEngine::with_stopwords(n, 1, StopwordSet::empty()).unwrap();
        engine.add_column(&cells);

        for row in engine.top(usize::MAX) {
            let prefixes: Vec<&str> = row
                .phrase
                .split(' ')
                .map(|w| w.split('w').next().unwrap_or(""))
                .collect();
            prop_assert_eq!(prefixes.len(), n.size());
            prop_assert!(prefixes.iter().all(|p| *p == prefixes[0]));
        }
    }
}
