//! Word and phrase frequencies for a spreadsheet text column.
//!
//! The pipeline has two stages:
//!
//! 1. [`analyzer`]: clean each cell, split it into tokens, drop stopwords and
//!    short tokens, join the survivors into n-gram phrases
//! 2. [`frequency`]: count phrases over the whole column and rank them
//!
//! Most callers only need [`compute_frequency`]:
//!
//! ```
//! use termfreq_core::compute_frequency;
//! use termfreq_types::{AnalysisConfig, NGram, RawCell};
//!
//! let column = vec![
//!     RawCell::from("data science team"),
//!     RawCell::from("data science"),
//!     RawCell::Missing,
//! ];
//! let config = AnalysisConfig::default().with_ngram(NGram::Bigram);
//! let report = compute_frequency(&column, &config).unwrap();
//!
//! assert_eq!(report.rows[0].phrase, "data science");
//! assert_eq!(report.rows[0].count, 2);
//! ```

pub mod analyzer;
pub mod frequency;

pub use analyzer::{CellNormalizer, NormalizerConfig, StopwordSet};
pub use frequency::{compute_frequencies, compute_frequency, FrequencyEngine, FrequencyStats};
