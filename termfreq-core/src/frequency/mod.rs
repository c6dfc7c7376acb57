//! Phrase counting and ranking for one text column.
//!
//! A single sequential pass: each cell is cleaned, tokenized and filtered,
//! its surviving tokens are joined into phrases, and every phrase is counted
//! in one table keyed by phrase text. Each new phrase records the index at
//! which it was first seen so that ranking can break count ties
//! deterministically.
//!
//! Threading:
//! - [`FrequencyEngine`] holds reusable scratch buffers and one request's
//!   table. Build one per request; do not share it across requests.

mod api;
mod ranking;
mod stats;
mod types;

pub use api::{compute_frequencies, compute_frequency};
pub use stats::FrequencyStats;
pub use types::FrequencyEngine;
