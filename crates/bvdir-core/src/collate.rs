//! Locale-aware string ordering for table sorting.
//!
//! A root-locale approximation in four levels: base characters, then
//! accents, then case (lower before upper), then raw code points so that the
//! order is total and consistent with `Eq`.
//!
//! At the base level characters fall into classes ordered whitespace,
//! punctuation, other symbols, digits, letters. Punctuation and the common
//! ASCII symbols follow the root collation order in [`PUNCTUATION_ORDER`].

use std::cmp::Ordering;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Root collation order of ASCII punctuation and symbols.
const PUNCTUATION_ORDER: &str = "_-,;:!?.'\"()[]{}@*/\\&#%`^+<=>|~$";

/// Base-level class, in sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum CharClass {
    Whitespace,
    Punctuation,
    Symbol,
    Digit,
    Letter,
}

/// Base-level weight of one lower-cased, accent-stripped character.
fn base_weight(c: char) -> (CharClass, u32) {
    if c.is_whitespace() {
        (CharClass::Whitespace, u32::from(c))
    } else if let Some(rank) = PUNCTUATION_ORDER.find(c) {
        (CharClass::Punctuation, u32::try_from(rank).unwrap_or(u32::MAX))
    } else if let Some(digit) = c.to_digit(10) {
        (CharClass::Digit, digit)
    } else if c.is_alphanumeric() {
        (CharClass::Letter, u32::from(c))
    } else {
        (CharClass::Symbol, u32::from(c))
    }
}

fn primary_key(s: &str) -> Vec<(CharClass, u32)> {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .map(base_weight)
        .collect()
}

fn accent_key(s: &str) -> Vec<char> {
    s.nfd().flat_map(char::to_lowercase).collect()
}

fn case_key(s: &str) -> Vec<bool> {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .map(char::is_uppercase)
        .collect()
}

/// Compare two strings the way a human-facing sorted list expects.
///
/// `"alpha"` sorts before `"Zeta"`, `"éclair"` sorts next to `"eclair"`
/// rather than after `"z"`, and `"a"` sorts before `"A"`.
#[must_use]
pub fn compare(a: &str, b: &str) -> Ordering {
    primary_key(a)
        .cmp(&primary_key(b))
        .then_with(|| accent_key(a).cmp(&accent_key(b)))
        .then_with(|| case_key(a).cmp(&case_key(b)))
        .then_with(|| a.cmp(b))
}
