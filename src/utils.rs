//! Utility functions for string processing.

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::UnicodeNormalization;

/// Normalize a string for indexing: lowercase, strip diacritics, and collapse whitespace.
///
/// - "Café" → "cafe"
/// - "  Newtonsoft.Json  " → "newtonsoft.json"
///
/// # Algorithm (with unicode-normalization feature)
///
/// 1. NFD normalize (decompose characters into base + combining marks)
/// 2. Filter out combining marks
/// 3. Lowercase
/// 4. Collapse whitespace
#[cfg(feature = "unicode-normalization")]
pub fn normalize(value: &str) -> String {
    value
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Lowercases and collapses whitespace. Assumes input is ASCII or pre-normalized.
#[cfg(not(feature = "unicode-normalization"))]
pub fn normalize(value: &str) -> String {
    value
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(feature = "unicode-normalization")]
fn is_combining_mark(c: char) -> bool {
    matches!(c,
        '\u{0300}'..='\u{036F}' |  // Combining Diacritical Marks
        '\u{1DC0}'..='\u{1DFF}' |  // Combining Diacritical Marks Supplement
        '\u{20D0}'..='\u{20FF}' |  // Combining Diacritical Marks for Symbols
        '\u{FE20}'..='\u{FE2F}'    // Combining Half Marks
    )
}

/// Word boundary detection: anything that isn't a letter or digit.
fn is_word_boundary(c: char) -> bool {
    !c.is_alphanumeric()
}

/// Split text into normalized tokens.
///
/// Dots, dashes and other punctuation separate tokens, so
/// "Newtonsoft.Json 13.0.3" yields `newtonsoft`, `json`, `13`, `0`, `3`.
/// Duplicates are kept; callers that need a set dedupe themselves.
pub fn tokenize(text: &str) -> Vec<String> {
    normalize(text)
        .split(is_word_boundary)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}
