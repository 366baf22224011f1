// src/error.rs
//! Error taxonomy for the analysis pipeline and its language data.

use std::path::PathBuf;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Message returned to clients for missing or whitespace-only text.
pub const EMPTY_TEXT_MESSAGE: &str = "Empty text";

#[derive(Debug, thiserror::Error)]
pub enum AnalyzerError {
    /// Text is missing or trims to nothing. Recovered locally by the API layer.
    #[error("Empty text")]
    EmptyInput,

    /// A language-data asset could not be read at all.
    #[error("{asset} unavailable at {}: {reason}", .path.display())]
    DataUnavailable {
        asset: &'static str,
        path: PathBuf,
        reason: String,
    },

    /// A language-data asset was read but its content is unusable.
    #[error("{asset} invalid (line {line}): {reason}")]
    InvalidData {
        asset: &'static str,
        line: usize,
        reason: String,
    },
}

impl IntoResponse for AnalyzerError {
    fn into_response(self) -> Response {
        match self {
            // The front-end checks for an `error` key, not the status code.
            AnalyzerError::EmptyInput => {
                (StatusCode::OK, Json(json!({ "error": EMPTY_TEXT_MESSAGE }))).into_response()
            }
            other => (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({ "error": other.to_string() })),
            )
                .into_response(),
        }
    }
}
