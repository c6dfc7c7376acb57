//! Text analysis pipeline.
//!
//! This module provides the text processing components:
//! - **Normalizer**: Cleans raw cell values down to word runs
//! - **Tokenizer**: Splits cleaned text into tokens
//! - **Stopwords**: Built-in and user-supplied words to drop
//! - **N-gram**: Joins surviving tokens into phrases

pub mod ngram;
pub mod normalizer;
pub mod stopwords;
pub mod tokenizer;

pub use ngram::extract_ngrams;
pub use normalizer::{CellNormalizer, NormalizerConfig};
pub use stopwords::StopwordSet;
pub use tokenizer::Tokenizer;
