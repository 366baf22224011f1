// src/api.rs
use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::config::AnalyzerConfig;
use crate::engine::Analyzer;
use crate::error::AnalyzerError;
use crate::metrics::{self, Metrics};

/// Shared, read-only state for handlers.
#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<Analyzer>,
}

impl AppState {
    pub fn new(analyzer: Analyzer) -> Self {
        Self {
            analyzer: Arc::new(analyzer),
        }
    }

    /// Build state from config; language data is loaded here, once.
    pub fn from_config(cfg: &AnalyzerConfig) -> Result<Self, AnalyzerError> {
        let analyzer = Analyzer::from_config(cfg)?;
        info!(top_n = analyzer.top_n(), "analyzer ready");
        Ok(Self::new(analyzer))
    }
}

/// Full application router: `/health`, `/analyze`, `/metrics`, permissive CORS.
pub fn router(state: AppState) -> Router {
    let mut app = Router::new()
        .route("/health", get(|| async { "OK" }))
        .route("/analyze", post(analyze))
        .with_state(state.clone());

    if let Some(m) = Metrics::global() {
        metrics::record_language_data(state.analyzer.data());
        app = app.merge(m.router());
    }

    // Development posture: any origin, method and header.
    app.layer(CorsLayer::very_permissive())
}

#[derive(Debug, Default, serde::Deserialize)]
struct AnalyzeReq {
    #[serde(default)]
    text: Option<String>,
}

async fn analyze(State(state): State<AppState>, Json(body): Json<AnalyzeReq>) -> Response {
    let started = Instant::now();
    match state.analyzer.analyze(body.text.as_deref()) {
        Ok(resp) => {
            metrics::record_analyzed(
                resp.stats.word_count,
                started.elapsed().as_secs_f64() * 1000.0,
            );
            Json(resp).into_response()
        }
        // Language data is loaded before the router exists, so empty text
        // is the only failure left at request time.
        Err(e) => {
            metrics::record_empty();
            e.into_response()
        }
    }
}
