use crate::canny::HysteresisParams;
use crate::detector::Operator;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct EdgeToolConfig {
    pub input: PathBuf,
    /// Operators to run, in order. Defaults to all three.
    #[serde(default = "all_operators")]
    pub operators: Vec<Operator>,
    #[serde(default)]
    pub canny: HysteresisParams,
    pub output: EdgeOutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct EdgeOutputConfig {
    /// Directory receiving one `<operator>.png` per run.
    pub dir: PathBuf,
    #[serde(default)]
    pub report_json: Option<PathBuf>,
}

fn all_operators() -> Vec<Operator> {
    Operator::ALL.to_vec()
}

pub fn parse_config(data: &str) -> Result<EdgeToolConfig, String> {
    serde_json::from_str(data).map_err(|e| format!("Failed to parse config: {e}"))
}

pub fn load_config(path: &Path) -> Result<EdgeToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    parse_config(&data).map_err(|e| format!("{e} ({})", path.display()))
}
