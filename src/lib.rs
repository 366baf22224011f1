// src/lib.rs
// Public library surface for the binaries and integration tests.

pub mod api;
pub mod config;
pub mod engine;
pub mod error;
pub mod frequency;
pub mod language_data;
pub mod logging;
pub mod metrics;
pub mod sentiment;
pub mod stopwords;
pub mod tokenizer;

// ---- Re-exports for stable public API ----
pub use crate::api::{router, AppState};
pub use crate::config::AnalyzerConfig;
pub use crate::engine::{AnalysisResponse, Analyzer, Stats};
pub use crate::error::AnalyzerError;

/// Build the full in-process app from config (env + optional TOML).
/// Language data is loaded eagerly; a load failure is returned, never deferred
/// to the first request.
pub fn app() -> anyhow::Result<axum::Router> {
    let cfg = AnalyzerConfig::load()?;
    let state = AppState::from_config(&cfg)?;
    Ok(router(state))
}
