//! Phrase assembly.
//!
//! Builds n-gram phrases from the tokens of one cell that survived filtering.
//! Filtered tokens are gone before this step, so a phrase may join words that
//! were not adjacent in the raw text. Phrases never cross cell boundaries
//! because each call only sees one cell's tokens.

use termfreq_types::NGram;

/// Emits every phrase of `n` consecutive tokens using a sliding window.
///
/// Unigrams are emitted as the token slices themselves; longer phrases are
/// joined with single spaces into `buf`, which is reused between windows.
/// For `k` tokens exactly `k - n + 1` phrases are emitted, none when `k < n`.
///
/// # Example
///
/// ```
/// use termfreq_core::analyzer::ngram::extract_ngrams;
/// use termfreq_types::NGram;
///
/// let mut phrases = Vec::new();
/// let mut buf = String::new();
/// extract_ngrams(&["data", "science", "team"], NGram::Bigram, &mut buf, |p| {
///     phrases.push(p.to_owned())
/// });
///
/// assert_eq!(phrases, ["data science", "science team"]);
/// ```
#[inline]
pub fn extract_ngrams<F>(tokens: &[&str], n: NGram, buf: &mut String, mut callback: F)
where
    F: FnMut(&str),
{
    if n == NGram::Unigram {
        for &token in tokens {
            callback(token);
        }
        return;
    }

    for window in tokens.windows(n.size()) {
        buf.clear();
        for (i, token) in window.iter().enumerate() {
            if i > 0 {
                buf.push(' ');
            }
            buf.push_str(token);
        }
        callback(buf.as_str());
    }
}

/// Number of phrases [`extract_ngrams`] emits for `tokens` tokens.
#[inline(always)]
pub const fn count_ngrams(tokens: usize, n: NGram) -> usize {
    let size = n.size();
    if tokens < size {
        0
    } else {
        tokens - size + 1
    }
}
