// src/tokenizer.rs
//! Word tokenizer: ASCII alphanumeric runs, optionally joined by one internal
//! apostrophe so contractions like "don't" stay a single token.
//!
//! Case policy: tokens keep their original case in the output stream; all
//! classification (stop words, frequencies) uses the lowercase form.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static WORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Za-z0-9]+(?:'[A-Za-z0-9]+)?").expect("tokenizer regex"));

/// A single token of the request text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub text: String,
    #[serde(skip)]
    pub lower: String,
    pub is_stop: bool,
}

impl Token {
    /// Build a token from its surface text; `is_stop` is computed once here.
    pub fn classify(text: &str, is_stop: impl FnOnce(&str) -> bool) -> Self {
        let lower = text.to_lowercase();
        let is_stop = is_stop(&lower);
        Self {
            text: text.to_string(),
            lower,
            is_stop,
        }
    }
}

/// Extract word tokens in order. No matches yields an empty vector.
pub fn tokenize(input: &str) -> Vec<&str> {
    WORD_RE.find_iter(input).map(|m| m.as_str()).collect()
}
