use anyhow::{Context, Result};
use serde::Deserialize;

/// Rendering options for the results table.
///
/// Stored as a JSON object on disk, every field optional:
/// ```json
/// {
///   "placeholder": "-",
///   "summary": true,
///   "precision": 2
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Cell text for tasks a student has no score for.
    pub placeholder: String,
    /// Adds total and mark columns plus an average row.
    pub summary: bool,
    /// Decimals shown for averages.
    pub precision: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            placeholder: "-".to_string(),
            summary: false,
            precision: 2,
        }
    }
}

impl ReportConfig {
    /// Loads the config from a JSON file at `path`.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read config file '{path}'"))?;
        serde_json::from_str(&content).with_context(|| format!("invalid config file '{path}'"))
    }

    /// Loads `path` when given, defaults otherwise.
    pub fn load_or_default(path: Option<&str>) -> Result<Self> {
        path.map_or_else(|| Ok(Self::default()), Self::load)
    }
}
