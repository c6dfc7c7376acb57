//! Core types for the termfreq column analyzer.
//!
//! This crate holds the plain data that crosses the boundary between the
//! frequency engine and whatever hosts it (a spreadsheet loader, a CLI, a
//! web front end). Keeping it separate means:
//!
//! - **No pipeline dependencies**: callers can build configs and read reports
//!   without pulling in the analyzer
//! - **Serializable boundary**: every type here round-trips through serde
//! - **Validation in one place**: out-of-range configuration is rejected here,
//!   before any cell is touched

#![warn(missing_docs)]

use core::fmt;
use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single scalar value taken from a spreadsheet column.
///
/// Spreadsheet loaders hand back loosely typed cells. The analyzer only needs
/// their text form, so every variant except [`RawCell::Missing`] can be
/// rendered as a string. A `Float` holding NaN is the usual "empty cell"
/// sentinel of dataframe libraries and is treated exactly like `Missing`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawCell {
    /// Empty or absent cell.
    #[default]
    Missing,
    /// Free text.
    Text(String),
    /// Integer cell.
    Int(i64),
    /// Floating point cell. NaN counts as missing.
    Float(f64),
    /// Boolean cell.
    Bool(bool),
}

impl RawCell {
    /// Returns `true` for empty cells and NaN floats.
    #[inline]
    pub fn is_missing(&self) -> bool {
        match self {
            RawCell::Missing => true,
            RawCell::Float(v) => v.is_nan(),
            _ => false,
        }
    }

    /// Renders the cell as text, or `None` if the cell is missing.
    ///
    /// Integral floats keep a trailing `.0` (`3.0`, not `3`) and booleans
    /// render as `True`/`False`, matching how spreadsheet tooling prints them.
    pub fn as_text(&self) -> Option<Cow<'_, str>> {
        if self.is_missing() {
            return None;
        }
        match self {
            RawCell::Missing => None,
            RawCell::Text(s) => Some(Cow::Borrowed(s.as_str())),
            RawCell::Int(v) => Some(Cow::Owned(v.to_string())),
            RawCell::Float(v) => Some(Cow::Owned(format_float(*v))),
            RawCell::Bool(true) => Some(Cow::Borrowed("True")),
            RawCell::Bool(false) => Some(Cow::Borrowed("False")),
        }
    }
}

fn format_float(v: f64) -> String {
    if v.is_finite() && v.fract() == 0.0 && v.abs() < 1e16 {
        format!("{v:.1}")
    } else {
        v.to_string()
    }
}

impl From<&str> for RawCell {
    fn from(value: &str) -> Self {
        RawCell::Text(value.to_owned())
    }
}

impl From<String> for RawCell {
    fn from(value: String) -> Self {
        RawCell::Text(value)
    }
}

impl From<i64> for RawCell {
    fn from(value: i64) -> Self {
        RawCell::Int(value)
    }
}

impl From<f64> for RawCell {
    fn from(value: f64) -> Self {
        RawCell::Float(value)
    }
}

impl From<bool> for RawCell {
    fn from(value: bool) -> Self {
        RawCell::Bool(value)
    }
}

impl<T: Into<RawCell>> From<Option<T>> for RawCell {
    fn from(value: Option<T>) -> Self {
        value.map_or(RawCell::Missing, Into::into)
    }
}

/// Number of consecutive surviving tokens joined into one phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum NGram {
    /// Single words.
    Unigram = 1,
    /// Two-word phrases.
    Bigram = 2,
    /// Three-word phrases.
    Trigram = 3,
}

impl NGram {
    /// All supported sizes, smallest first.
    pub const ALL: [NGram; 3] = [NGram::Unigram, NGram::Bigram, NGram::Trigram];

    /// Number of tokens per phrase.
    #[inline(always)]
    pub const fn size(self) -> usize {
        self as usize
    }

    /// Human readable name.
    pub const fn label(self) -> &'static str {
        match self {
            NGram::Unigram => "unigram",
            NGram::Bigram => "bigram",
            NGram::Trigram => "trigram",
        }
    }
}

impl TryFrom<u8> for NGram {
    type Error = ConfigError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(NGram::Unigram),
            2 => Ok(NGram::Bigram),
            3 => Ok(NGram::Trigram),
            other => Err(ConfigError::InvalidNGram(other)),
        }
    }
}

impl From<NGram> for u8 {
    #[inline(always)]
    fn from(n: NGram) -> Self {
        n as u8
    }
}

impl fmt::Display for NGram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Rejected analysis configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// N-gram size outside 1..=3.
    #[error("n-gram size must be 1, 2 or 3 (got {0})")]
    InvalidNGram(u8),
    /// `top_n` was zero.
    #[error("top_n must be at least 1")]
    ZeroTopN,
    /// `min_length` was zero.
    #[error("min_length must be at least 1")]
    ZeroMinLength,
}

/// Settings for one analysis request.
///
/// Defaults mirror the interactive tool this analyzer grew out of: unigrams,
/// top 20, no extra stopwords, tokens of at least two characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Phrase size.
    pub ngram: NGram,
    /// Maximum number of rows returned.
    pub top_n: usize,
    /// Extra stopwords, comma separated.
    pub custom_stopwords: String,
    /// Minimum token length in characters, checked before phrases are joined.
    pub min_length: usize,
    /// Fold Arabic Yeh/Kaf variants onto their Persian forms while cleaning.
    pub fold_arabic_letters: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            ngram: NGram::Unigram,
            top_n: 20,
            custom_stopwords: String::new(),
            min_length: 2,
            fold_arabic_letters: false,
        }
    }
}

impl AnalysisConfig {
    /// Builds a validated configuration from raw numbers.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found.
    pub fn new(ngram: u8, top_n: usize, min_length: usize) -> Result<Self, ConfigError> {
        let config = Self {
            ngram: NGram::try_from(ngram)?,
            top_n,
            min_length,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Replaces the custom stopword list.
    #[must_use]
    pub fn with_custom_stopwords(mut self, csv: impl Into<String>) -> Self {
        self.custom_stopwords = csv.into();
        self
    }

    /// Replaces the phrase size.
    #[must_use]
    pub fn with_ngram(mut self, ngram: NGram) -> Self {
        self.ngram = ngram;
        self
    }

    /// Checks numeric bounds.
    ///
    /// # Errors
    ///
    /// `ZeroTopN` or `ZeroMinLength` when the respective field is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.top_n == 0 {
            return Err(ConfigError::ZeroTopN);
        }
        if self.min_length == 0 {
            return Err(ConfigError::ZeroMinLength);
        }
        Ok(())
    }
}

/// One ranked line of a frequency report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyRow {
    /// 1-based rank.
    pub rank: usize,
    /// Word or space-joined phrase.
    pub phrase: String,
    /// Occurrences across the whole column.
    pub count: u64,
}

impl fmt::Display for FrequencyRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {} ({})", self.rank, self.phrase, self.count)
    }
}

/// Ranked result of one analysis request.
///
/// `total_in_returned_rows` only covers `rows`. When the table was truncated
/// it is smaller than `total_occurrences`, which always covers every phrase
/// seen in the column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyReport {
    /// Phrase size the report was built with.
    pub ngram: NGram,
    /// Rows ordered by descending count, ties in first-seen order.
    pub rows: Vec<FrequencyRow>,
    /// Sum of `count` over `rows`.
    pub total_in_returned_rows: u64,
    /// Distinct phrases in the whole column, before truncation.
    pub unique_phrases: usize,
    /// Phrase occurrences in the whole column, before truncation.
    pub total_occurrences: u64,
}

impl FrequencyReport {
    /// Creates an empty report.
    pub fn empty(ngram: NGram) -> Self {
        Self {
            ngram,
            rows: Vec::new(),
            total_in_returned_rows: 0,
            unique_phrases: 0,
            total_occurrences: 0,
        }
    }

    /// Returns `true` when no phrase survived.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns `true` when `rows` omits some phrases of the column.
    #[inline]
    pub fn is_truncated(&self) -> bool {
        self.rows.len() < self.unique_phrases
    }

    /// Iterates `(phrase, count)` pairs in rank order.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.rows.iter().map(|r| (r.phrase.as_str(), r.count))
    }
}
