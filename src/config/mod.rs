pub mod analyzer;

pub use analyzer::{AnalyzerConfig, DataSection, FrequencySection};
