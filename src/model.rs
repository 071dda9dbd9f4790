use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("failed to read card data: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid card data: {0}")]
    Json(#[from] serde_json::Error),
}

/// One slice of a stacked bar. Percent is a share of the full track width;
/// values are taken as supplied, the renderer does no aggregation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub percent: f64,
    #[serde(default)]
    pub color: Option<String>,
}

/// One horizontal track: a label above, a display value to the right, and an
/// ordered list of segments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarRow {
    pub label: String,
    pub value: String,
    pub segments: Vec<Segment>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendEntry {
    pub label: String,
    #[serde(default)]
    pub color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardData {
    pub header: String,
    pub subheader: String,
    #[serde(default)]
    pub rows: Vec<BarRow>,
    #[serde(default)]
    pub legend: Vec<LegendEntry>,
}

impl CardData {
    pub fn from_json(input: &str) -> Result<Self, ModelError> {
        Ok(serde_json::from_str(input)?)
    }

    pub fn from_file(path: &Path) -> Result<Self, ModelError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }
}
