//! Canonical word forms.
//!
//! A token is a lowercase ASCII-alphabetic string of at least two letters.
//! Everything else a raw surface form may carry (possessive suffix,
//! punctuation, digits, accented or non-Latin letters) is stripped, and
//! forms that do not survive the stripping are rejected outright.

const MIN_LEN: usize = 2;

/// Canonical form of `raw`, or `None` when it cannot be a word token
pub fn normalize(raw: &str) -> Option<String> {
    if raw.chars().count() < MIN_LEN || is_numeric(raw) {
        return None;
    }

    let stem = raw
        .strip_suffix("'s")
        .or_else(|| raw.strip_suffix("\u{2019}s"))
        .unwrap_or(raw);

    let cleaned: String = stem
        .chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_lowercase())
        .collect();

    (cleaned.len() >= MIN_LEN).then_some(cleaned)
}

fn is_numeric(raw: &str) -> bool {
    !raw.is_empty() && raw.chars().all(char::is_numeric)
}
