//! Lexical-match scoring between column names and signal labels.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;

// Anything that is not a letter or digit separates words.
static SEPARATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\p{L}\p{N}]+").unwrap());

/// Words too common to count as shared meaning.
const STOP_WORDS: &[&str] = &[
    "a", "an", "and", "by", "for", "in", "of", "on", "or", "per", "the", "to", "with",
];

/// Split an identifier or phrase into lowercase tokens.
///
/// Splits on separators, lower-to-upper case changes (`netRevenue`),
/// acronym boundaries (`NPSScore`) and letter/digit changes (`q3sales`).
/// Stop words are dropped.
pub fn tokenize(text: &str) -> Vec<String> {
    SEPARATOR
        .split(text)
        .filter(|word| !word.is_empty())
        .flat_map(split_word)
        .map(|token| token.to_lowercase())
        .filter(|token| !STOP_WORDS.contains(&token.as_str()))
        .collect()
}

/// Tokenize into a set, the form used for overlap scoring.
pub fn token_set(text: &str) -> BTreeSet<String> {
    tokenize(text).into_iter().collect()
}

/// Token-overlap ratio (Jaccard index) of two phrases, in [0, 1].
pub fn lexical_score(left: &str, right: &str) -> f64 {
    overlap_ratio(&token_set(left), &token_set(right))
}

/// Shared tokens divided by the union of tokens. Empty union scores 0.
pub(crate) fn overlap_ratio(left: &BTreeSet<String>, right: &BTreeSet<String>) -> f64 {
    let union = left.union(right).count();
    if union == 0 {
        return 0.0;
    }
    let shared = left.intersection(right).count();
    shared as f64 / union as f64
}

/// Split one separator-free word on case and digit boundaries.
fn split_word(word: &str) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    let mut parts = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if i > 0 && is_boundary(chars[i - 1], c, chars.get(i + 1).copied()) {
            parts.push(std::mem::take(&mut current));
        }
        current.push(c);
    }
    if !current.is_empty() {
        parts.push(current);
    }
    parts
}

fn is_boundary(prev: char, c: char, next: Option<char>) -> bool {
    let camel = (prev.is_lowercase() || prev.is_numeric()) && c.is_uppercase();
    let acronym_end =
        prev.is_uppercase() && c.is_uppercase() && next.is_some_and(|n| n.is_lowercase());
    let digit_change = prev.is_numeric() != c.is_numeric() && !camel;
    camel || acronym_end || digit_change
}
