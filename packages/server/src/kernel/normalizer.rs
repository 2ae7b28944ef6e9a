//! Token-level normalization of rewritten content.
//!
//! Splits text into word and punctuation tokens and rejoins them with single
//! spaces. The pass flattens newlines and intra-tag spacing, so it is gated
//! behind `Config::normalize_content` rather than always applied.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // A token is either a run of word characters or a single piece of
    // punctuation; whitespace is dropped entirely.
    static ref TOKEN_REGEX: Regex =
        Regex::new(r"\w+|[^\w\s]").expect("token pattern is valid");
}

/// Rejoin the text's word and punctuation tokens with single spaces.
pub fn normalize(text: &str) -> String {
    TOKEN_REGEX
        .find_iter(text)
        .map(|m| m.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}
