// src/frequency.rs
//! Content-word frequency table and lexical diversity.

use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrequencyEntry {
    pub word: String,
    pub count: usize,
}

/// Count words, most frequent first. Equal counts keep first-occurrence order.
/// `top_n == 0` returns the full distribution.
pub fn count_frequencies<'a>(
    words: impl IntoIterator<Item = &'a str>,
    top_n: usize,
) -> Vec<FrequencyEntry> {
    let mut slot: HashMap<&'a str, usize> = HashMap::new();
    let mut out: Vec<FrequencyEntry> = Vec::new();

    for w in words {
        match slot.get(w) {
            Some(&i) => out[i].count += 1,
            None => {
                slot.insert(w, out.len());
                out.push(FrequencyEntry {
                    word: w.to_string(),
                    count: 1,
                });
            }
        }
    }

    // sort_by is stable
    out.sort_by(|a, b| b.count.cmp(&a.count));
    if top_n > 0 {
        out.truncate(top_n);
    }
    out
}

/// |distinct| / |total|, or 0.0 when there are no words.
pub fn lexical_diversity(content_words: &[&str]) -> f64 {
    if content_words.is_empty() {
        return 0.0;
    }
    let distinct = content_words
        .iter()
        .collect::<std::collections::HashSet<_>>()
        .len();
    distinct as f64 / content_words.len() as f64
}

/// Round to two decimal places for reporting.
#[inline]
pub fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
