//! Cell text cleaning.
//!
//! Turns an arbitrary cell string into space-separated word runs: every
//! character outside the Arabic-script blocks and the Unicode word class is
//! treated as a separator, separators collapse to one ASCII space, and the
//! result is trimmed. The output is exactly what the tokenizer expects.

use termfreq_types::RawCell;

const SEP: u8 = 0;
const KEEP: u8 = 1;

/// Byte class for the ASCII range: letters, digits and `_` are kept, everything
/// else (whitespace, punctuation, controls) separates words.
const ASCII_CLASS: [u8; 128] = {
    let mut table = [SEP; 128];
    let mut b = 0usize;
    while b < 128 {
        let c = b as u8;
        if c.is_ascii_alphanumeric() || c == b'_' {
            table[b] = KEEP;
        }
        b += 1;
    }
    table
};

/// Returns `true` for code points in the Arabic, Arabic Supplement,
/// Arabic Extended-A and Arabic Presentation Forms blocks.
#[inline(always)]
pub const fn is_arabic_script(c: char) -> bool {
    matches!(
        c,
        '\u{0600}'..='\u{06FF}'
            | '\u{0750}'..='\u{077F}'
            | '\u{08A0}'..='\u{08FF}'
            | '\u{FB50}'..='\u{FDFF}'
            | '\u{FE70}'..='\u{FEFF}'
    )
}

/// Returns `true` for word characters: Unicode alphanumerics and underscore.
#[inline(always)]
pub fn is_word_char(c: char) -> bool {
    c == '_' || c.is_alphanumeric()
}

/// Returns `true` if `c` may appear inside cleaned text (besides the single
/// space separator).
#[inline(always)]
pub fn is_allowed(c: char) -> bool {
    if c.is_ascii() {
        return ASCII_CLASS[c as usize] == KEEP;
    }
    is_arabic_script(c) || is_word_char(c)
}

/// Configuration options for cell cleaning.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizerConfig {
    /// When enabled, Arabic Yeh (ي), Alef Maksura (ى) and Kaf (ك) are folded
    /// onto the Persian forms ی and ک, so both keyboard layouts produce the
    /// same term.
    pub fold_arabic_letters: bool,
}

/// Cleans raw cell values into tokenizer-ready text.
///
/// Performs the following operations:
/// - Replaces every disallowed character with a space
/// - Collapses runs of separators into a single ASCII space
/// - Removes leading and trailing separators
/// - Optionally folds Arabic letter variants onto Persian ones
///
/// Case is left untouched; stopword lookup lowercases on its own.
///
/// # Examples
///
/// ```
/// use termfreq_core::analyzer::normalizer::CellNormalizer;
///
/// let normalizer = CellNormalizer::default();
/// assert_eq!(normalizer.normalize("  Hello,   world! "), "Hello world");
/// assert_eq!(normalizer.normalize("سلام، دنیا!"), "سلام، دنیا");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct CellNormalizer {
    config: NormalizerConfig,
}

impl CellNormalizer {
    /// Creates a new normalizer with the specified configuration.
    pub const fn new(config: NormalizerConfig) -> Self {
        Self { config }
    }

    /// Returns the active configuration.
    #[inline]
    pub const fn config(&self) -> NormalizerConfig {
        self.config
    }

    /// Cleans `input` into an existing buffer.
    ///
    /// Clears the buffer first and reuses its capacity.
    pub fn normalize_into(&self, input: &str, out: &mut String) {
        out.clear();
        out.reserve(input.len());

        let bytes = input.as_bytes();
        let fold = self.config.fold_arabic_letters;
        let mut i = 0usize;
        // Starting "after a space" drops leading separators.
        let mut prev_space = true;

        while i < bytes.len() {
            let b = bytes[i];
            if b < 128 {
                if ASCII_CLASS[b as usize] == KEEP {
                    out.push(b as char);
                    prev_space = false;
                } else if !prev_space {
                    out.push(' ');
                    prev_space = true;
                }
                i += 1;
                continue;
            }

            // `i` always sits on a char boundary: ASCII bytes advance by one and
            // everything else advances by the full UTF-8 width.
            let Some(ch) = input[i..].chars().next() else {
                break;
            };
            i += ch.len_utf8();

            if is_arabic_script(ch) || is_word_char(ch) {
                out.push(if fold { fold_arabic(ch) } else { ch });
                prev_space = false;
            } else if !prev_space {
                out.push(' ');
                prev_space = true;
            }
        }

        if out.ends_with(' ') {
            out.pop();
        }
    }

    /// Cleans `input` and returns a new String.
    #[inline]
    pub fn normalize(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        self.normalize_into(input, &mut out);
        out
    }

    /// Cleans a spreadsheet cell. Missing cells produce an empty buffer.
    pub fn normalize_cell_into(&self, cell: &RawCell, out: &mut String) {
        match cell.as_text() {
            Some(text) => self.normalize_into(&text, out),
            None => out.clear(),
        }
    }
}

#[inline(always)]
fn fold_arabic(c: char) -> char {
    match c {
        '\u{064A}' | '\u{0649}' => '\u{06CC}',
        '\u{0643}' => '\u{06A9}',
        _ => c,
    }
}
