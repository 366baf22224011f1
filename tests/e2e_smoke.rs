// tests/e2e_smoke.rs
//
// End-to-end through `text_analyzer::app()`: config + env resolution,
// language data loaded from a directory, then a real /analyze call.

use std::{env, fs, path::Path};

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt; // for `oneshot` (tower 0.5 with features=["util"])

use text_analyzer::config::analyzer::{
    ENV_ANALYZER_CONFIG_PATH, ENV_ANALYZER_DATA_DIR, ENV_ANALYZER_FREQ_TOP_N,
};
use text_analyzer::language_data::{lexicon_path, stopwords_path};

fn clear_env() {
    env::remove_var(ENV_ANALYZER_CONFIG_PATH);
    env::remove_var(ENV_ANALYZER_DATA_DIR);
    env::remove_var(ENV_ANALYZER_FREQ_TOP_N);
}

fn write_data_dir(dir: &Path, stop: &str, lexicon: &str) {
    let sw = stopwords_path(dir);
    fs::create_dir_all(sw.parent().unwrap()).unwrap();
    fs::write(sw, stop).unwrap();
    fs::write(lexicon_path(dir), lexicon).unwrap();
}

async fn analyze(app: Router, text: &str) -> Value {
    let req = Request::builder()
        .method("POST")
        .uri("/analyze")
        .header("content-type", "application/json")
        .body(Body::from(serde_json::json!({ "text": text }).to_string()))
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[serial_test::serial]
#[tokio::test]
async fn smoke_bundled_defaults() {
    clear_env();
    let app = text_analyzer::app().expect("app() with bundled data");

    let v = analyze(app, "The release was terrible and the docs were awful.").await;
    assert_eq!(v["stats"]["sentiment"], "NEGATIVE", "body: {v}");
    let words: Vec<&str> = v["freq_data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["word"].as_str().unwrap())
        .collect();
    assert_eq!(words, vec!["release", "terrible", "docs", "awful"]);
}

#[serial_test::serial]
#[tokio::test]
async fn smoke_data_dir_and_top_n_from_env() {
    clear_env();
    let tmp = tempfile::tempdir().unwrap();
    // Tiny custom data: only "the" is a stop word, only "zesty" carries valence
    write_data_dir(tmp.path(), "the\n", "zesty\t2.0\t0.5\n");
    env::set_var(ENV_ANALYZER_DATA_DIR, tmp.path());
    env::set_var(ENV_ANALYZER_FREQ_TOP_N, "2");

    let app = text_analyzer::app().expect("app() with custom data dir");
    let v = analyze(app, "the zesty lime is zesty and the lime is zesty").await;

    // "is" and "and" are content words under the custom list
    assert_eq!(
        v["freq_data"],
        serde_json::json!([{ "word": "zesty", "count": 3 }, { "word": "lime", "count": 2 }])
    );
    assert_eq!(v["stats"]["sentiment"], "POSITIVE");
    assert_eq!(v["stats"]["word_count"], 10);
    clear_env();
}

#[serial_test::serial]
#[tokio::test]
async fn smoke_missing_data_fails_at_startup() {
    clear_env();
    let tmp = tempfile::tempdir().unwrap();
    env::set_var(ENV_ANALYZER_DATA_DIR, tmp.path());

    let err = text_analyzer::app().expect_err("empty data dir must not start");
    let msg = format!("{err:#}");
    assert!(msg.contains("stop-word list"), "error: {msg}");
    clear_env();
}
