//! Matching Domain Service
//!
//! Locale-tolerant text matching for search and type-ahead. Both sides of a
//! comparison are folded to unaccented, single-case text first, so `alv`
//! finds `Álvaro` and `senor` finds `Señor`.

use std::borrow::Cow;
use std::fmt;

use serde_json::Value;
use unicode_normalization::UnicodeNormalization;

use crate::domain::value_objects::MatcherKind;

/// Scores a leaf against search text.
///
/// A score `>= 0` means the leaf matches and `< 0` means it does not. Callers
/// in this crate only look at the sign. Any `Fn(&T, &str) -> i32` is a
/// matcher.
pub trait Matcher<T: ?Sized> {
    fn score(&self, value: &T, search_text: &str) -> i32;

    fn matches(&self, value: &T, search_text: &str) -> bool {
        self.score(value, search_text) >= 0
    }
}

impl<T: ?Sized, F> Matcher<T> for F
where
    F: Fn(&T, &str) -> i32,
{
    fn score(&self, value: &T, search_text: &str) -> i32 {
        self(value, search_text)
    }
}

impl<T: SearchText + ?Sized> Matcher<T> for MatcherKind {
    fn score(&self, value: &T, search_text: &str) -> i32 {
        let text = value.search_text();
        match self {
            MatcherKind::Contains => default_matcher(&*text, search_text),
            MatcherKind::TypeAhead => default_type_ahead_matcher(&*text, search_text),
        }
    }
}

/// Text a leaf is searched by.
pub trait SearchText {
    fn search_text(&self) -> Cow<'_, str>;

    /// Text of a named field, for record-like leaves.
    fn field_text(&self, _field: &str) -> Option<Cow<'_, str>> {
        None
    }
}

impl SearchText for str {
    fn search_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl SearchText for String {
    fn search_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_str())
    }
}

impl<T: SearchText + ?Sized> SearchText for &T {
    fn search_text(&self) -> Cow<'_, str> {
        (**self).search_text()
    }

    fn field_text(&self, field: &str) -> Option<Cow<'_, str>> {
        (**self).field_text(field)
    }
}

impl<T: SearchText + ?Sized> SearchText for Box<T> {
    fn search_text(&self) -> Cow<'_, str> {
        (**self).search_text()
    }

    fn field_text(&self, field: &str) -> Option<Cow<'_, str>> {
        (**self).field_text(field)
    }
}

/// Strings search as themselves, `null` as empty text, and anything else as
/// its compact JSON rendering.
impl SearchText for Value {
    fn search_text(&self) -> Cow<'_, str> {
        match self {
            Value::String(text) => Cow::Borrowed(text.as_str()),
            Value::Null => Cow::Borrowed(""),
            other => Cow::Owned(other.to_string()),
        }
    }

    fn field_text(&self, field: &str) -> Option<Cow<'_, str>> {
        self.get(field).map(SearchText::search_text)
    }
}

macro_rules! search_by_display {
    ($($ty:ty),* $(,)?) => {
        $(impl SearchText for $ty {
            fn search_text(&self) -> Cow<'_, str> {
                Cow::Owned(self.to_string())
            }
        })*
    };
}

search_by_display!(
    char, bool, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);

/// Replace accented Latin letters with their unaccented base letters.
///
/// Non-string input is rendered with `Display` first, so `1` becomes `"1"`.
/// Letters that decompose under NFD (á, ñ, ü, ç, ...) lose their combining
/// marks. Letters with no decomposition (ø, æ, ß, ł, ...) are folded through a
/// fixed table. Characters outside the Latin blocks pass through unchanged.
pub fn strip_diacritics(value: impl fmt::Display) -> String {
    let text = value.to_string();
    let mut stripped = String::with_capacity(text.len());

    for c in text.chars() {
        if !is_latin(c) {
            if !is_combining_mark(c) {
                stripped.push(c);
            }
            continue;
        }
        for d in std::iter::once(c).nfd().filter(|d| !is_combining_mark(*d)) {
            match fold_letter(d) {
                Some(base) => stripped.push_str(base),
                None => stripped.push(d),
            }
        }
    }

    stripped
}

fn is_latin(c: char) -> bool {
    matches!(c, '\u{00C0}'..='\u{024F}' | '\u{1E00}'..='\u{1EFF}')
}

fn is_combining_mark(c: char) -> bool {
    matches!(c,
        '\u{0300}'..='\u{036F}' |  // Combining Diacritical Marks
        '\u{1AB0}'..='\u{1AFF}' |  // Combining Diacritical Marks Extended
        '\u{1DC0}'..='\u{1DFF}' |  // Combining Diacritical Marks Supplement
        '\u{20D0}'..='\u{20FF}' |  // Combining Diacritical Marks for Symbols
        '\u{FE20}'..='\u{FE2F}'    // Combining Half Marks
    )
}

/// Latin letters with no canonical decomposition.
fn fold_letter(c: char) -> Option<&'static str> {
    let base = match c {
        'Ø' => "O",
        'ø' => "o",
        'Æ' => "AE",
        'æ' => "ae",
        'Œ' => "OE",
        'œ' => "oe",
        'ß' => "ss",
        'ẞ' => "SS",
        'Đ' | 'Ð' => "D",
        'đ' | 'ð' => "d",
        'Ł' | 'Ŀ' => "L",
        'ł' | 'ŀ' => "l",
        'Ħ' => "H",
        'ħ' => "h",
        'ı' => "i",
        'Ŧ' => "T",
        'ŧ' => "t",
        'Þ' => "TH",
        'þ' => "th",
        'Ŋ' => "N",
        'ŋ' => "n",
        _ => return None,
    };
    Some(base)
}

/// Type-ahead matcher: `1` if `value` starts with `search_text`, else `-1`.
///
/// Comparison ignores case and diacritics. An empty search always matches.
pub fn default_type_ahead_matcher<V: SearchText + ?Sized>(value: &V, search_text: &str) -> i32 {
    let value = strip_diacritics(value.search_text()).to_lowercase();
    let search = strip_diacritics(search_text).to_lowercase();
    if value.starts_with(&search) {
        1
    } else {
        -1
    }
}

/// Containment matcher: character position of `search_text` inside `value`,
/// or `-1`.
///
/// The position counts `char`s of the folded, upper-cased value, not bytes
/// or UTF-16 units. Comparison ignores case and diacritics. An empty search
/// matches at `0`.
pub fn default_matcher<V: SearchText + ?Sized>(value: &V, search_text: &str) -> i32 {
    let value = strip_diacritics(value.search_text()).to_uppercase();
    let search = strip_diacritics(search_text).to_uppercase();
    match value.find(&search) {
        Some(byte_offset) => {
            i32::try_from(value[..byte_offset].chars().count()).unwrap_or(i32::MAX)
        }
        None => -1,
    }
}
