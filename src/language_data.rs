// src/language_data.rs
//! Process-wide language data: the stop-word set and the sentiment scorer.
//! Built once at startup, shared by `Arc`, never mutated afterwards.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::info;

use crate::config::DataSection;
use crate::error::AnalyzerError;
use crate::sentiment::{BundledVader, Lexicon, SentimentScorer, VaderScorer};
use crate::stopwords::StopWords;

/// Layout of a language-data directory.
pub const STOPWORDS_RELATIVE_PATH: &str = "stopwords/english";
pub const LEXICON_RELATIVE_PATH: &str = "vader_lexicon.txt";

#[derive(Clone)]
pub struct LanguageData {
    pub stop_words: Arc<StopWords>,
    pub scorer: Arc<dyn SentimentScorer>,
    /// Lexicon size, kept for diagnostics.
    pub lexicon_entries: usize,
}

impl std::fmt::Debug for LanguageData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LanguageData")
            .field("stop_words", &self.stop_words.len())
            .field("scorer", &self.scorer.name())
            .field("lexicon_entries", &self.lexicon_entries)
            .finish()
    }
}

impl LanguageData {
    /// Resolve data per config: bundled copies when no dir is set, otherwise
    /// both files must be present under the dir.
    pub fn load(data: &DataSection) -> Result<Self, AnalyzerError> {
        let loaded = match &data.dir {
            None => Self::bundled()?,
            Some(dir) => Self::from_dir(dir)?,
        };
        let source = match &data.dir {
            None => "bundled".to_string(),
            Some(d) => d.display().to_string(),
        };
        info!(
            %source,
            stop_words = loaded.stop_words.len(),
            lexicon_entries = loaded.lexicon_entries,
            scorer = loaded.scorer.name(),
            "language data loaded"
        );
        Ok(loaded)
    }

    /// Data compiled into the binary: NLTK's English stop words and VADER
    /// with its complete lexicon.
    pub fn bundled() -> Result<Self, AnalyzerError> {
        let stop_words = StopWords::english()?;
        let scorer = BundledVader::new();
        Ok(Self {
            stop_words: Arc::new(stop_words),
            lexicon_entries: scorer.lexicon_entries(),
            scorer: Arc::new(scorer),
        })
    }

    /// Read `<dir>/stopwords/english` and `<dir>/vader_lexicon.txt`.
    pub fn from_dir(dir: &Path) -> Result<Self, AnalyzerError> {
        let stop_words = StopWords::from_file(&stopwords_path(dir))?;
        let lexicon = Lexicon::from_file(&lexicon_path(dir))?;
        Ok(Self::from_parts(stop_words, lexicon))
    }

    fn from_parts(stop_words: StopWords, lexicon: Lexicon) -> Self {
        let lexicon_entries = lexicon.len();
        Self {
            stop_words: Arc::new(stop_words),
            scorer: Arc::new(VaderScorer::new(lexicon)),
            lexicon_entries,
        }
    }

    /// Swap in a different scorer (e.g. a fixed-score stub in tests).
    pub fn with_scorer(mut self, scorer: Arc<dyn SentimentScorer>) -> Self {
        self.scorer = scorer;
        self
    }
}

pub fn stopwords_path(dir: &Path) -> PathBuf {
    dir.join(STOPWORDS_RELATIVE_PATH)
}

pub fn lexicon_path(dir: &Path) -> PathBuf {
    dir.join(LEXICON_RELATIVE_PATH)
}
