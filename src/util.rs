//! Small string helpers used by the matcher.

/// Comparison form of an answer: trimmed and lowercased.
pub fn normalize(s: &str) -> String {
  s.trim().to_lowercase()
}

/// Key for exact matching. Like `normalize`, but also ignores trailing sentence
/// punctuation so "ich lerne deutsch" equals "Ich lerne Deutsch.".
pub fn exact_key(s: &str) -> String {
  normalize(s)
    .trim_end_matches(|c: char| matches!(c, '.' | '?' | '!') || c.is_whitespace())
    .to_string()
}
