//! Whole-word and whole-phrase text search.
//!
//! Terms match case-insensitively at word boundaries, so "Java" never
//! matches inside "JavaScript". A `\b` anchor is only valid next to a word
//! character, so it is applied per edge: "Node.js" and "C++" keep their
//! punctuation and still match adjacent to spaces or line ends. Whitespace
//! inside a phrase matches any whitespace run.

use regex::Regex;

/// Compiles the search pattern for a term. Returns `None` for terms that
/// are empty after trimming.
fn term_pattern(term: &str) -> Option<Regex> {
    let term = term.trim();
    if term.is_empty() {
        return None;
    }

    let escaped = regex::escape(&term.to_lowercase());
    // Collapse phrase whitespace so "react native" matches across newlines.
    let body = escaped
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(r"\s+");

    let leading = if term.chars().next().is_some_and(is_word_char) {
        r"\b"
    } else {
        ""
    };
    let trailing = if term.chars().last().is_some_and(is_word_char) {
        r"\b"
    } else {
        ""
    };

    Regex::new(&format!("(?i){leading}{body}{trailing}")).ok()
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Counts whole-word/phrase occurrences of `term` in `text`.
pub fn count_occurrences(text: &str, term: &str) -> usize {
    match term_pattern(term) {
        Some(pattern) => pattern.find_iter(text).count(),
        None => 0,
    }
}

/// Whether `text` contains `term` as a whole word or phrase.
pub fn contains_term(text: &str, term: &str) -> bool {
    count_occurrences(text, term) > 0
}
