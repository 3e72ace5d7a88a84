//! First-person pronoun handling.
//!
//! A subject such as 僕 or 俺たち is rewritten into the second-person address
//! used by the statement template. Anything else is left to the caller.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Address used for a singular (or implicit) first-person subject.
pub const YOU: &str = "きみ";

/// Address used for a plural first-person subject.
pub const YOU_PLURAL: &str = "きみたち";

/// Plural markers, at most one of which is stripped before lookup.
pub const PLURAL_SUFFIXES: [&str; 3] = ["達", "たち", "ら"];

/// First-person pronouns, including dialect and katakana spellings.
pub const FIRST_PERSONS: &[&str] = &[
    "私", "わたし", "ワタシ", "わたくし", "ワタクシ",
    "自分", "じぶん", "ジブン",
    "僕", "ぼく", "ボク",
    "俺", "おれ", "オレ",
    "儂", "わし", "ワシ",
    "あたし", "あたくし", "アタクシ", "あてくし", "アテクシ", "あたい", "アタイ",
    "わい", "ワイ", "わて", "ワテ", "あて", "アテ",
    "わだす", "ワダス", "あだす", "アダス", "わす", "ワス",
    "内", "うち", "ウチ",
    "己等", "おいら", "オイラ", "俺ら", "おら", "オラ",
    "おい", "オイ", "おいどん", "オイドン",
    "うら", "ウラ", "わ", "ワ", "わー", "ワー",
    "ぼくちゃん", "ボクチャン", "ぼくちん", "ボクチン", "おれっち", "オレッチ",
];

static LEXICON: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| FIRST_PERSONS.iter().copied().collect());

/// Exact membership test against the first-person lexicon.
pub fn is_first_person(word: &str) -> bool {
    LEXICON.contains(word)
}

/// Splits one trailing plural marker off `word`.
///
/// Returns the remainder and whether a marker was removed.
pub fn strip_plural(word: &str) -> (&str, bool) {
    PLURAL_SUFFIXES
        .iter()
        .find_map(|suffix| word.strip_suffix(suffix))
        .map_or((word, false), |stem| (stem, true))
}

/// Maps a first-person subject onto its second-person address.
///
/// An empty subject counts as direct address. `None` means the subject is not
/// a first-person pronoun and should be kept as is.
pub fn normalize(subject: &str) -> Option<&'static str> {
    if subject.is_empty() {
        return Some(YOU);
    }

    let (stem, plural) = strip_plural(subject);
    if !is_first_person(stem) {
        return None;
    }

    Some(if plural { YOU_PLURAL } else { YOU })
}
