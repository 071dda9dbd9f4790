use serde::{Deserialize, Serialize};

/// Card palette. The defaults are the canonical card colors; consumers that
/// snapshot rendered output rely on them staying stable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub card_stroke: String,
    pub card_fill: String,
    pub content_fill: String,
    pub content_debug_fill: String,
    pub track_fill: String,
    pub default_segment_color: String,
}

impl Theme {
    pub fn card_default() -> Self {
        Self {
            card_stroke: "#e4e2e2".to_string(),
            card_fill: "#fffefe".to_string(),
            content_fill: "#fff".to_string(),
            content_debug_fill: "#eee".to_string(),
            track_fill: "#ddd".to_string(),
            default_segment_color: "#858585".to_string(),
        }
    }

    /// Segments and legend entries without an explicit color fall back to the
    /// theme-wide default.
    pub fn resolve<'a>(&'a self, color: &'a Option<String>) -> &'a str {
        color.as_deref().unwrap_or(&self.default_segment_color)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::card_default()
    }
}
