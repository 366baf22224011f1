//! Run the analysis pipeline offline and print the response JSON.
//!
//! Text comes from the arguments (joined by spaces) or, when none are given,
//! from stdin. Uses the same config/env resolution as the service.

use std::io::Read;

use anyhow::Context;
use text_analyzer::error::EMPTY_TEXT_MESSAGE;
use text_analyzer::{logging, Analyzer, AnalyzerConfig, AnalyzerError};

fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    logging::init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let text = if args.is_empty() {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("reading text from stdin")?;
        buf
    } else {
        args.join(" ")
    };

    let cfg = AnalyzerConfig::load().context("loading analyzer config")?;
    let analyzer = Analyzer::from_config(&cfg).context("loading language data")?;

    let out = match analyzer.analyze(Some(&text)) {
        Ok(resp) => serde_json::to_string_pretty(&resp)?,
        Err(AnalyzerError::EmptyInput) => {
            serde_json::to_string_pretty(&serde_json::json!({ "error": EMPTY_TEXT_MESSAGE }))?
        }
        Err(e) => return Err(e.into()),
    };
    println!("{out}");
    Ok(())
}
