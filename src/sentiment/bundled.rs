// src/sentiment/bundled.rs
//! Default scorer: VADER with its complete published lexicon, as shipped by
//! the `vader_sentiment` crate.

use vader_sentiment::SentimentIntensityAnalyzer;

use super::{PolarityScores, SentimentScorer};

pub struct BundledVader {
    inner: SentimentIntensityAnalyzer<'static>,
}

impl BundledVader {
    pub fn new() -> Self {
        Self {
            inner: SentimentIntensityAnalyzer::new(),
        }
    }

    /// Number of lexicon entries the scorer reads from.
    pub fn lexicon_entries(&self) -> usize {
        vader_sentiment::LEXICON.len()
    }
}

impl Default for BundledVader {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentScorer for BundledVader {
    fn polarity_scores(&self, text: &str) -> PolarityScores {
        let raw = self.inner.polarity_scores(text);
        let get = |k: &str| raw.get(k).copied().unwrap_or(0.0);
        PolarityScores {
            neg: get("neg"),
            neu: get("neu"),
            pos: get("pos"),
            compound: get("compound"),
        }
    }

    fn name(&self) -> &'static str {
        "vader"
    }
}
