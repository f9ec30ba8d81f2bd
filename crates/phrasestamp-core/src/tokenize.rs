//! Token normalization for phrases and transcript words.
//!
//! A token keeps only ASCII letters and digits, lowercased. Anything that
//! normalizes to an empty string is dropped by the callers here.

use crate::model::{Token, WordSpan};

/// Normalize a raw word: lowercase, then keep `[a-z0-9]` only.
///
/// Total and pure; returns an empty string when nothing survives.
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect()
}

/// Split a phrase on whitespace and hyphens and normalize each fragment.
#[must_use]
pub fn phrase_tokens(phrase: &str) -> Vec<String> {
    phrase
        .split(|c: char| c.is_whitespace() || c == '-')
        .map(normalize)
        .filter(|token| !token.is_empty())
        .collect()
}

/// Normalize every span's text, keeping the position of each survivor.
#[must_use]
pub fn source_tokens(spans: &[WordSpan]) -> Vec<Token> {
    spans
        .iter()
        .enumerate()
        .filter_map(|(index, span)| {
            let text = normalize(&span.text);
            (!text.is_empty()).then(|| Token::new(text, index))
        })
        .collect()
}
