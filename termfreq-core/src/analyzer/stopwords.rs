//! Stopword filtering.
//!
//! The built-in list is kept as independent groups (prepositions, conjunctions,
//! verb forms, ...), each a closed slice, and unioned when a set is built. A
//! user-supplied comma separated list is merged on top.
//!
//! Lookups lowercase the token first, so Latin stopwords match regardless of
//! case. Persian has no case and is looked up as-is.

use rustc_hash::FxHashSet;

/// Separators accepted in a custom stopword list: ASCII comma and Arabic comma.
const CSV_SEPARATORS: [char; 2] = [',', '\u{060C}'];

/// A set of lowercase stopwords.
#[derive(Debug, Clone, Default)]
pub struct StopwordSet {
    words: FxHashSet<Box<str>>,
}

impl StopwordSet {
    /// Creates an empty set.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a set holding every built-in group.
    pub fn builtin() -> Self {
        let mut set = Self::empty();
        for group in BUILTIN_GROUPS {
            for word in *group {
                set.insert(word);
            }
        }
        set
    }

    /// Built-in groups plus the terms of `custom_csv`.
    pub fn build(custom_csv: &str) -> Self {
        let mut set = Self::builtin();
        set.extend_csv(custom_csv);
        set
    }

    /// Adds a single term. Surrounding whitespace is trimmed and the term is
    /// lowercased; blank terms are ignored.
    ///
    /// Returns `true` if the term was not already present.
    pub fn insert(&mut self, term: &str) -> bool {
        let term = term.trim();
        if term.is_empty() {
            return false;
        }
        self.words.insert(term.to_lowercase().into_boxed_str())
    }

    /// Adds every term of a comma separated list. Returns how many were new.
    pub fn extend_csv(&mut self, csv: &str) -> usize {
        parse_custom(csv).filter(|term| self.insert(term)).count()
    }

    /// Returns `true` if the lowercased token is a stopword.
    #[inline]
    pub fn contains(&self, token: &str) -> bool {
        if token.chars().any(changes_case) {
            self.words.contains(token.to_lowercase().as_str())
        } else {
            self.words.contains(token)
        }
    }

    /// Number of distinct stopwords.
    #[inline]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if the set is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterates the stored (lowercase) terms in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.words.iter().map(|w| &**w)
    }
}

impl<'a> FromIterator<&'a str> for StopwordSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut set = Self::empty();
        for term in iter {
            set.insert(term);
        }
        set
    }
}

/// `true` if lowercasing alters `c`. Covers titlecase letters (`ǅ`), which
/// are not `is_uppercase`.
#[inline]
fn changes_case(c: char) -> bool {
    c.to_lowercase().ne(core::iter::once(c))
}

/// Splits a custom stopword list into trimmed, non-empty terms.
pub fn parse_custom(csv: &str) -> impl Iterator<Item = &str> + '_ {
    csv.split(CSV_SEPARATORS)
        .map(str::trim)
        .filter(|term| !term.is_empty())
}

/// Persian prepositions.
pub const PERSIAN_PREPOSITIONS: &[&str] = &[
    "از", "به", "در", "با", "تا", "برای", "بر", "روی", "زیر", "کنار", "نزد", "پیش", "بعد",
    "قبل", "جلو", "عقب", "بالا", "پایین", "داخل", "خارج", "میان", "مانند", "همچون", "نظیر",
    "چون", "مثل", "سوی", "طرف", "سمت", "جانب", "ناحیه", "حوالی", "اطراف", "دور",
];

/// Persian conjunctions and question words.
pub const PERSIAN_CONJUNCTIONS: &[&str] = &[
    "و", "یا", "اما", "ولی", "لیکن", "ولیکن", "اگر", "اگرچه", "گرچه", "هرچند", "چونکه",
    "زیرا", "پس", "بنابراین", "لذا", "لکن", "هم", "نیز", "البته", "ضمناً", "همچنین", "علاوه",
    "افزون", "که", "تا", "وقتی", "زمانی", "هنگامی", "چه", "آیا", "کجا", "کی", "چرا", "چگونه",
    "چطور",
];

/// Common Persian auxiliary and copula verb forms.
pub const PERSIAN_VERB_FORMS: &[&str] = &[
    "است", "بود", "باشد", "شد", "شده", "می‌شود", "میشود", "خواهد", "دارد", "داشت", "کرد",
    "کرده", "می‌کند", "میکند", "می‌کرد", "میکرد", "بکند", "کند", "نکند", "هست", "نیست",
    "بوده", "نبوده", "گفت", "گفته", "می‌گوید", "میگوید", "بگوید", "رفت", "رفته", "می‌رود",
    "میرود", "برود", "آمد", "آمده", "می‌آید", "میآید", "بیاید", "دید", "دیده", "می‌بیند",
    "میبیند", "ببیند", "شود", "نشود", "بشود", "باید", "نباید", "باشید", "نباشید", "کنید",
    "نکنید", "بکنید",
];

/// Persian pronouns and determiners.
pub const PERSIAN_PRONOUNS: &[&str] = &[
    "من", "تو", "او", "ما", "شما", "آنها", "این", "آن", "آنان", "ایشان", "وی", "خود", "خودت",
    "خودش", "خودمان", "خودتان", "خودشان", "هم", "هر", "همه", "همگی", "برخی", "بعضی", "چندی",
    "کسی", "کسانی", "یکی", "دیگری", "سایر", "سایرین", "دیگران", "غیر", "جز", "بجز", "مگر",
];

/// Persian intensifiers, hedges and filler adverbs.
pub const PERSIAN_EMPHASIS: &[&str] = &[
    "خیلی", "بسیار", "زیاد", "کم", "اندک", "فقط", "تنها", "حتی", "هنوز", "دیگر", "باز",
    "بازهم", "دوباره", "مجدد", "اصلاً", "کلاً", "کاملاً", "تماماً", "واقعاً", "حقیقتاً",
    "راستی", "البته", "مطمئناً", "حتماً", "قطعاً", "یقیناً", "احتمالاً", "شاید", "ممکن",
    "امکان", "ظاهراً", "گویا",
];

/// Single letters of the Persian alphabet.
pub const PERSIAN_LETTERS: &[&str] = &[
    "الف", "ب", "پ", "ت", "ث", "ج", "چ", "ح", "خ", "د", "ذ", "ر", "ز", "ژ", "س", "ش", "ص", "ض",
    "ط", "ظ", "ع", "غ", "ف", "ق", "ک", "گ", "ل", "م", "ن", "و", "ه", "ی",
];

/// English function words and very common verbs.
pub const ENGLISH: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "been", "by", "for", "from", "has", "he", "in",
    "is", "it", "its", "of", "on", "that", "the", "to", "was", "will", "with", "have", "i",
    "not", "you", "do", "this", "but", "his", "they", "we", "say", "her", "she", "or", "my",
    "one", "all", "would", "there", "their", "what", "so", "up", "out", "if", "about", "who",
    "get", "which", "go", "me", "when", "make", "can", "like", "time", "no", "just", "him",
    "know", "take", "people", "into", "year", "your", "good", "some", "could", "them", "see",
    "other", "than", "then", "now", "look", "only", "come", "over", "think", "also", "back",
    "after", "use", "two", "how", "our", "work", "first", "well", "way", "even", "new", "want",
    "because", "any", "these", "give", "day", "most", "us", "had", "does", "did", "should",
    "may", "might", "must", "shall", "am", "were", "being", "having",
];

/// Every built-in group, unioned by [`StopwordSet::builtin`].
pub const BUILTIN_GROUPS: &[&[&str]] = &[
    PERSIAN_PREPOSITIONS,
    PERSIAN_CONJUNCTIONS,
    PERSIAN_VERB_FORMS,
    PERSIAN_PRONOUNS,
    PERSIAN_EMPHASIS,
    PERSIAN_LETTERS,
    ENGLISH,
];
