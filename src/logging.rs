// src/logging.rs
//! Tracing setup and log-safe helpers.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub const ENV_LOG_FORMAT: &str = "ANALYZER_LOG_FORMAT";
const DEFAULT_FILTER: &str = "text_analyzer=info,warn";

/// Install a global subscriber: `RUST_LOG` filter (default `text_analyzer=info,warn`),
/// compact output, or JSON when `ANALYZER_LOG_FORMAT=json`.
///
/// Uses `try_init`, so an already-installed subscriber (e.g. the Shuttle
/// runtime's, or a second call in tests) is left in place.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let json = std::env::var(ENV_LOG_FORMAT)
        .map(|v| v.trim().eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let res = if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json())
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().compact())
            .try_init()
    };
    if res.is_err() {
        tracing::debug!("tracing subscriber already installed; keeping it");
    }
}

/// Short anonymized id for a text (first 6 bytes of SHA-256, hex).
/// Request text is never logged raw; this id lets log lines be correlated.
pub fn anon_hash(text: &str) -> String {
    use sha2::{Digest, Sha256};
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    let digest = hasher.finalize();
    let mut out = String::with_capacity(12);
    for b in digest.iter().take(6) {
        use std::fmt::Write as _;
        let _ = write!(&mut out, "{:02x}", b);
    }
    out
}
