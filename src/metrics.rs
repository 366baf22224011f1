// src/metrics.rs
use axum::{routing::get, Router};
use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use once_cell::sync::OnceCell;
use tracing::warn;

use crate::language_data::LanguageData;

pub const ANALYZE_REQUESTS: &str = "analyze_requests_total";
pub const ANALYZE_EMPTY: &str = "analyze_empty_total";
pub const ANALYZE_TOKENS: &str = "analyze_tokens_total";
pub const ANALYZE_DURATION_MS: &str = "analyze_duration_ms";
pub const DATA_STOP_WORDS: &str = "language_data_stop_words";
pub const DATA_LEXICON_ENTRIES: &str = "language_data_lexicon_entries";

static GLOBAL: OnceCell<Metrics> = OnceCell::new();

pub struct Metrics {
    pub handle: PrometheusHandle,
}

impl Metrics {
    /// Install the Prometheus recorder once per process and return it.
    /// Returns `None` (and logs) if another recorder already owns the process.
    pub fn global() -> Option<&'static Metrics> {
        GLOBAL
            .get_or_try_init(|| {
                PrometheusBuilder::new()
                    .install_recorder()
                    .map(|handle| Metrics { handle })
            })
            .map_err(|e| warn!(error = %e, "prometheus: recorder not installed"))
            .ok()
    }

    /// Returns a router exposing `/metrics` in the Prometheus exposition format.
    pub fn router(&self) -> Router {
        let handle = self.handle.clone();
        Router::new().route(
            "/metrics",
            get(move || {
                let h = handle.clone();
                async move { h.render() }
            }),
        )
    }
}

/// Static gauges describing the loaded language data.
pub fn record_language_data(data: &LanguageData) {
    gauge!(DATA_STOP_WORDS).set(data.stop_words.len() as f64);
    gauge!(DATA_LEXICON_ENTRIES).set(data.lexicon_entries as f64);
}

pub fn record_analyzed(tokens: usize, elapsed_ms: f64) {
    counter!(ANALYZE_REQUESTS).increment(1);
    counter!(ANALYZE_TOKENS).increment(tokens as u64);
    histogram!(ANALYZE_DURATION_MS).record(elapsed_ms);
}

pub fn record_empty() {
    counter!(ANALYZE_REQUESTS).increment(1);
    counter!(ANALYZE_EMPTY).increment(1);
}
