// src/sentiment/mod.rs
//! Sentiment scoring seam + label/confidence policy.
//!
//! The scorer itself is a collaborator behind `SentimentScorer`; this module
//! owns only the mapping from its scores to a label and a confidence.
//!
//! Policy:
//! - compound >= 0.05  -> POSITIVE
//! - compound <= -0.05 -> NEGATIVE
//! - otherwise         -> NEUTRAL
//! - confidence = round(|compound| * 100), clamped to 0..=100

pub mod bundled;
pub mod lexicon;
pub mod vader;

use serde::Serialize;

pub use bundled::BundledVader;
pub use lexicon::Lexicon;
pub use vader::VaderScorer;

pub const POSITIVE_THRESHOLD: f64 = 0.05;
pub const NEGATIVE_THRESHOLD: f64 = -0.05;

/// Raw scores from a lexicon-based scorer. `compound` is in [-1, 1].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct PolarityScores {
    pub neg: f64,
    pub neu: f64,
    pub pos: f64,
    pub compound: f64,
}

/// Anything that maps full text to polarity scores.
pub trait SentimentScorer: Send + Sync {
    fn polarity_scores(&self, text: &str) -> PolarityScores;
    /// Scorer name for diagnostics.
    fn name(&self) -> &'static str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    pub fn from_compound(compound: f64) -> Self {
        if compound >= POSITIVE_THRESHOLD {
            SentimentLabel::Positive
        } else if compound <= NEGATIVE_THRESHOLD {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "POSITIVE",
            SentimentLabel::Negative => "NEGATIVE",
            SentimentLabel::Neutral => "NEUTRAL",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SentimentResult {
    pub label: SentimentLabel,
    /// Integer percentage, 0..=100.
    pub confidence: u8,
}

impl SentimentResult {
    pub fn from_scores(scores: &PolarityScores) -> Self {
        let compound = if scores.compound.is_finite() {
            scores.compound
        } else {
            0.0
        };
        let confidence = (compound.abs() * 100.0).round().clamp(0.0, 100.0) as u8;
        Self {
            label: SentimentLabel::from_compound(compound),
            confidence,
        }
    }
}
