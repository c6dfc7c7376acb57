//! End-to-end scenarios over small columns.

use termfreq_core::{compute_frequency, FrequencyEngine, StopwordSet};
use termfreq_types::{AnalysisConfig, FrequencyReport, FrequencyRow, NGram, RawCell};

fn column(values: &[&str]) -> Vec<RawCell> {
    values.iter().map(|&v| RawCell::from(v)).collect()
}

fn row(rank: usize, phrase: &str, count: u64) -> FrequencyRow {
    FrequencyRow {
        rank,
        phrase: phrase.to_owned(),
        count,
    }
}

#[test]
fn persian_column_with_custom_stopword() {
    let cells = column(&["برای شرکت خوب", "شرکت عالی است", ""]);
    let config = AnalysisConfig {
        ngram: NGram::Unigram,
        top_n: 20,
        custom_stopwords: "شرکت".to_owned(),
        min_length: 2,
        fold_arabic_letters: false,
    };

    let report = compute_frequency(&cells, &config).unwrap();

    assert_eq!(report.rows, vec![row(1, "خوب", 1), row(2, "عالی", 1)]);
    assert_eq!(report.total_in_returned_rows, 2);
    assert_eq!(report.unique_phrases, 2);
}

#[test]
fn bigrams_without_stopwords() {
    let mut engine =
        FrequencyEngine::with_stopwords(NGram::Bigram, 1, StopwordSet::empty()).unwrap();
    engine.add_cell(&RawCell::from("data science team"));

    let report = engine.report(10);
    assert_eq!(
        report.rows,
        vec![row(1, "data science", 1), row(2, "science team", 1)]
    );
}

#[test]
fn all_stopwords_gives_empty_result() {
    let config = AnalysisConfig::default();
    let report = compute_frequency(&column(&["و یا اما"]), &config).unwrap();
    assert!(report.is_empty());
    assert_eq!(report.total_occurrences, 0);
}

#[test]
fn empty_column_gives_empty_result() {
    let cells: Vec<RawCell> = Vec::new();
    let report = compute_frequency(&cells, &AnalysisConfig::default()).unwrap();
    assert_eq!(report, FrequencyReport::empty(NGram::Unigram));
}

#[test]
fn ngram_longer_than_every_cell() {
    let config = AnalysisConfig::default().with_ngram(NGram::Trigram);
    let report = compute_frequency(&column(&["one two", "three", "four five"]), &config).unwrap();
    assert!(report.is_empty());
}

#[test]
fn headline_column() {
    let cells = column(&[
        "بازار بورس تهران امروز رشد کرد",
        "رشد بازار بورس در هفته جاری",
        "بازار ارز و بورس",
        "",
    ]);
    let config = AnalysisConfig::default().with_ngram(NGram::Bigram);
    let report = compute_frequency(&cells, &config).unwrap();

    assert_eq!(report.rows[0], row(1, "بازار بورس", 2));
    // "در" and "و" are dropped before joining, so these become neighbours.
    let phrases: Vec<_> = report.pairs().map(|(p, _)| p).collect();
    assert!(phrases.contains(&"بورس هفته"));
    assert!(phrases.contains(&"ارز بورس"));
}

#[test]
fn truncated_report_keeps_corpus_total() {
    let cells = column(&["alpha beta gamma", "alpha beta", "alpha delta"]);
    let config = AnalysisConfig {
        top_n: 2,
        ..AnalysisConfig::default()
    };
    let report = compute_frequency(&cells, &config).unwrap();

    assert_eq!(report.rows, vec![row(1, "alpha", 3), row(2, "beta", 2)]);
    assert_eq!(report.total_in_returned_rows, 5);
    assert_eq!(report.total_occurrences, 7);
    assert_eq!(report.unique_phrases, 4);
    assert!(report.is_truncated());
}

#[test]
fn mixed_cell_types() {
    let cells = vec![
        RawCell::from("Quarter 2024 results"),
        RawCell::Int(2024),
        RawCell::Float(f64::NAN),
        RawCell::Missing,
        RawCell::Bool(true),
    ];
    let report = compute_frequency(&cells, &AnalysisConfig::default()).unwrap();

    assert_eq!(report.rows[0], row(1, "2024", 2));
    assert!(report.pairs().any(|(p, c)| p == "True" && c == 1));
}

#[test]
fn report_serializes_to_json() {
    let config = AnalysisConfig::default();
    let report = compute_frequency(&column(&["alpha alpha beta"]), &config).unwrap();
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["ngram"], 1);
    assert_eq!(json["rows"][0]["phrase"], "alpha");
    assert_eq!(json["rows"][0]["count"], 2);
    assert_eq!(json["rows"][0]["rank"], 1);
}
