// src/config/analyzer.rs
use anyhow::{anyhow, Context};
use serde::Deserialize;
use std::{env, fs, path::PathBuf};
use tracing::warn;

// --- env defaults & names ---
pub const DEFAULT_ANALYZER_CONFIG_PATH: &str = "config/analyzer.toml";

pub const ENV_ANALYZER_CONFIG_PATH: &str = "ANALYZER_CONFIG_PATH";
pub const ENV_ANALYZER_DATA_DIR: &str = "ANALYZER_DATA_DIR";
pub const ENV_ANALYZER_FREQ_TOP_N: &str = "ANALYZER_FREQ_TOP_N";

/// Service configuration (from TOML, then env overrides).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalyzerConfig {
    #[serde(default)]
    pub data: DataSection,
    #[serde(default)]
    pub frequency: FrequencySection,
}

/// Where the stop-word list and sentiment lexicon come from.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DataSection {
    /// `None` means the copies bundled into the binary.
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FrequencySection {
    /// Cap on `freq_data` length; 0 returns the full distribution.
    #[serde(default)]
    pub top_n: usize,
}

impl AnalyzerConfig {
    /// Load from `$ANALYZER_CONFIG_PATH` or `config/analyzer.toml`, then apply env overrides.
    ///
    /// A missing default file is not an error (defaults are used); an explicitly
    /// configured path that does not exist is.
    pub fn load() -> anyhow::Result<Self> {
        let mut cfg = match env::var(ENV_ANALYZER_CONFIG_PATH) {
            Ok(p) if !p.trim().is_empty() => {
                let path = PathBuf::from(p.trim());
                if !path.exists() {
                    return Err(anyhow!(
                        "{} points to non-existent path {}",
                        ENV_ANALYZER_CONFIG_PATH,
                        path.display()
                    ));
                }
                Self::from_path(&path)?
            }
            _ => {
                let path = PathBuf::from(DEFAULT_ANALYZER_CONFIG_PATH);
                if path.exists() {
                    Self::from_path(&path)?
                } else {
                    Self::default()
                }
            }
        };
        cfg.apply_env_overrides();
        Ok(cfg)
    }

    fn from_path(path: &std::path::Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading analyzer config from {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("parsing analyzer config at {}", path.display()))
    }

    /// Load from a TOML string (no env overrides).
    pub fn from_toml_str(toml_str: &str) -> anyhow::Result<Self> {
        let mut cfg: AnalyzerConfig = toml::from_str(toml_str)?;
        // An empty dir string in TOML means "use bundled data".
        if cfg
            .data
            .dir
            .as_ref()
            .is_some_and(|d| d.as_os_str().is_empty())
        {
            cfg.data.dir = None;
        }
        Ok(cfg)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(dir) = env::var(ENV_ANALYZER_DATA_DIR) {
            let dir = dir.trim();
            if !dir.is_empty() {
                self.data.dir = Some(PathBuf::from(dir));
            }
        }
        if let Some(n) = parse_top_n_env(env::var(ENV_ANALYZER_FREQ_TOP_N).ok()) {
            self.frequency.top_n = n;
        }
    }
}

// parse optional usize env; garbage is logged and ignored
fn parse_top_n_env(raw: Option<String>) -> Option<usize> {
    let raw = raw?;
    match raw.trim().parse::<usize>() {
        Ok(n) => Some(n),
        Err(_) => {
            warn!(
                value = %raw,
                "{} is not a non-negative integer; ignored",
                ENV_ANALYZER_FREQ_TOP_N
            );
            None
        }
    }
}
