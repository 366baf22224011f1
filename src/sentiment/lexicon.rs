// src/sentiment/lexicon.rs
//! Valence lexicon in the VADER tab-separated layout:
//! `token<TAB>mean<TAB>std<TAB>[ratings]`. Only the first two columns are used.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::AnalyzerError;

const ASSET: &str = "sentiment lexicon";

#[derive(Debug, Clone)]
pub struct Lexicon {
    valence: HashMap<String, f64>,
}

impl Lexicon {
    pub fn from_file(path: &Path) -> Result<Self, AnalyzerError> {
        let raw = fs::read_to_string(path).map_err(|e| AnalyzerError::DataUnavailable {
            asset: ASSET,
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Self::from_tsv_str(&raw)
    }

    /// Parse lexicon text. Blank lines are skipped; a malformed line is an error
    /// (a half-loaded lexicon would skew every score).
    pub fn from_tsv_str(raw: &str) -> Result<Self, AnalyzerError> {
        let mut valence = HashMap::new();

        for (idx, line) in raw.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let mut cols = line.split('\t');
            let token = cols.next().unwrap_or_default().trim();
            let mean = cols.next().map(str::trim).ok_or_else(|| AnalyzerError::InvalidData {
                asset: ASSET,
                line: idx + 1,
                reason: "missing valence column".into(),
            })?;
            if token.is_empty() {
                return Err(AnalyzerError::InvalidData {
                    asset: ASSET,
                    line: idx + 1,
                    reason: "empty token".into(),
                });
            }
            let v: f64 = mean.parse().map_err(|_| AnalyzerError::InvalidData {
                asset: ASSET,
                line: idx + 1,
                reason: format!("valence `{mean}` is not a number"),
            })?;
            valence.insert(token.to_lowercase(), v);
        }

        if valence.is_empty() {
            return Err(AnalyzerError::InvalidData {
                asset: ASSET,
                line: 0,
                reason: "no entries".into(),
            });
        }
        Ok(Self { valence })
    }

    /// Valence for an already-lowercased word.
    #[inline]
    pub fn get(&self, lower: &str) -> Option<f64> {
        self.valence.get(lower).copied()
    }

    #[inline]
    pub fn contains(&self, lower: &str) -> bool {
        self.valence.contains_key(lower)
    }

    pub fn len(&self) -> usize {
        self.valence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.valence.is_empty()
    }
}
