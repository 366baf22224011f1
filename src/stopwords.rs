// src/stopwords.rs
//! Fixed English stop-word set. Loaded once, never mutated.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::AnalyzerError;

const ASSET: &str = "stop-word list";

/// Bundled copy of the standard English list (one word per line).
const BUNDLED_ENGLISH: &str = include_str!("../assets/stopwords/english");

#[derive(Debug, Clone)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// The bundled English list.
    pub fn english() -> Result<Self, AnalyzerError> {
        Self::from_list_str(BUNDLED_ENGLISH)
    }

    /// Read a one-word-per-line list from disk.
    pub fn from_file(path: &Path) -> Result<Self, AnalyzerError> {
        let raw = fs::read_to_string(path).map_err(|e| AnalyzerError::DataUnavailable {
            asset: ASSET,
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Self::from_list_str(&raw)
    }

    /// Parse a list: trimmed, lowercased; blank lines and `#` comments skipped.
    /// An empty result is rejected.
    pub fn from_list_str(raw: &str) -> Result<Self, AnalyzerError> {
        let words: HashSet<String> = raw
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty() && !l.starts_with('#'))
            .map(str::to_lowercase)
            .collect();

        if words.is_empty() {
            return Err(AnalyzerError::InvalidData {
                asset: ASSET,
                line: 0,
                reason: "no stop words found".into(),
            });
        }
        Ok(Self { words })
    }

    /// Membership test on an already-lowercased token.
    #[inline]
    pub fn contains(&self, lower: &str) -> bool {
        self.words.contains(lower)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
