// src/engine.rs
//! Analysis pipeline: trim → validate → tokenize → classify → count →
//! diversity → sentiment → assemble.
//!
//! One call is one pass; nothing is kept between requests except the shared,
//! read-only `LanguageData`.

use std::time::Instant;

use serde::Serialize;
use tracing::debug;

use crate::config::AnalyzerConfig;
use crate::error::AnalyzerError;
use crate::frequency::{count_frequencies, lexical_diversity, round2, FrequencyEntry};
use crate::language_data::LanguageData;
use crate::logging::anon_hash;
use crate::sentiment::{SentimentLabel, SentimentResult};
use crate::tokenizer::{tokenize, Token};

/// Response body for a successful analysis.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResponse {
    pub freq_data: Vec<FrequencyEntry>,
    pub token_stream: Vec<Token>,
    pub stats: Stats,
}

#[derive(Debug, Clone, Serialize)]
pub struct Stats {
    /// Wall-clock pipeline time, e.g. `"3ms"`.
    pub processing_time: String,
    /// distinct / total content words, two decimals.
    pub lexical_diversity: f64,
    pub sentiment: SentimentLabel,
    /// Integer percentage, e.g. `"83%"`.
    pub confidence: String,
    pub word_count: usize,
    /// Characters (Unicode scalar values) of the trimmed text.
    pub char_count: usize,
}

#[derive(Debug, Clone)]
pub struct Analyzer {
    data: LanguageData,
    top_n: usize,
}

impl Analyzer {
    /// `top_n == 0` returns the full frequency distribution.
    pub fn new(data: LanguageData, top_n: usize) -> Self {
        Self { data, top_n }
    }

    /// Load language data per config. Fails if data is configured but unusable.
    pub fn from_config(cfg: &AnalyzerConfig) -> Result<Self, AnalyzerError> {
        let data = LanguageData::load(&cfg.data)?;
        Ok(Self::new(data, cfg.frequency.top_n))
    }

    pub fn data(&self) -> &LanguageData {
        &self.data
    }

    pub fn top_n(&self) -> usize {
        self.top_n
    }

    /// Run the whole pipeline. `None` and whitespace-only text are `EmptyInput`.
    pub fn analyze(&self, raw: Option<&str>) -> Result<AnalysisResponse, AnalyzerError> {
        let started = Instant::now();
        let text = validate(raw)?;

        let stop_words = &self.data.stop_words;
        let token_stream: Vec<Token> = tokenize(text)
            .into_iter()
            .map(|t| Token::classify(t, |lower| stop_words.contains(lower)))
            .collect();

        let content_words: Vec<&str> = token_stream
            .iter()
            .filter(|t| !t.is_stop)
            .map(|t| t.lower.as_str())
            .collect();

        let freq_data = count_frequencies(content_words.iter().copied(), self.top_n);
        let diversity = lexical_diversity(&content_words);

        let scores = self.data.scorer.polarity_scores(text);
        let sentiment = SentimentResult::from_scores(&scores);

        let elapsed_ms = started.elapsed().as_millis();
        debug!(
            id = %anon_hash(text),
            tokens = token_stream.len(),
            content_words = content_words.len(),
            compound = scores.compound,
            sentiment = sentiment.label.as_str(),
            elapsed_ms = elapsed_ms as u64,
            "analyzed"
        );

        Ok(AnalysisResponse {
            stats: Stats {
                processing_time: format!("{elapsed_ms}ms"),
                lexical_diversity: round2(diversity),
                sentiment: sentiment.label,
                confidence: format!("{}%", sentiment.confidence),
                word_count: token_stream.len(),
                char_count: text.chars().count(),
            },
            freq_data,
            token_stream,
        })
    }
}

/// Trimmed text, or `EmptyInput` before any tokenizing happens.
pub fn validate(raw: Option<&str>) -> Result<&str, AnalyzerError> {
    let text = raw.unwrap_or_default().trim();
    if text.is_empty() {
        return Err(AnalyzerError::EmptyInput);
    }
    Ok(text)
}
