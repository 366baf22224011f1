//! Text Analyzer — Binary Entrypoint
//! Boots the Axum HTTP server: config, language data, routes, CORS.

use anyhow::Context;
use shuttle_axum::ShuttleAxum;
use text_analyzer::{logging, router, AnalyzerConfig, AppState};
use tracing::info;

#[shuttle_runtime::main]
async fn axum() -> ShuttleAxum {
    // Load .env in local/dev; no-op in prod environments.
    let _ = dotenvy::dotenv();

    logging::init_tracing();

    let cfg = AnalyzerConfig::load().context("loading analyzer config")?;

    // Language data is built exactly once, before the first request.
    let state = AppState::from_config(&cfg).context("loading language data")?;
    info!(
        data_dir = ?cfg.data.dir,
        top_n = cfg.frequency.top_n,
        "text analyzer starting"
    );

    Ok(router(state).into())
}
