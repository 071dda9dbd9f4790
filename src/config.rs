use crate::theme::Theme;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Card geometry knobs. Everything here is a plain parameter of the
/// composition; there is no hidden global state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardConfig {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
    pub animate: bool,
    pub debug: bool,
    pub bar_width: f64,
    pub bar_section_padding: f64,
    pub legend_columns: usize,
    pub legend_section_padding: f64,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            width: 300.0,
            height: 285.0,
            padding: 25.0,
            animate: true,
            debug: false,
            bar_width: 210.0,
            bar_section_padding: 45.0,
            legend_columns: 2,
            legend_section_padding: 80.0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub card: CardConfig,
    pub theme: Theme,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigFile {
    width: Option<f64>,
    height: Option<f64>,
    padding: Option<f64>,
    animate: Option<bool>,
    debug: Option<bool>,
    bar_width: Option<f64>,
    bar_section_padding: Option<f64>,
    legend_columns: Option<usize>,
    legend_section_padding: Option<f64>,
    theme_variables: Option<ThemeFile>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ThemeFile {
    card_stroke: Option<String>,
    card_fill: Option<String>,
    content_fill: Option<String>,
    content_debug_fill: Option<String>,
    track_fill: Option<String>,
    default_segment_color: Option<String>,
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let Some(path) = path else {
        return Ok(Config::default());
    };
    let contents = std::fs::read_to_string(path)?;
    parse_config(&contents)
}

/// Overlays a JSON config fragment onto the defaults; absent fields keep
/// their default values.
pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let mut config = Config::default();
    let parsed: ConfigFile = serde_json::from_str(contents)?;

    if let Some(v) = parsed.width {
        config.card.width = v;
    }
    if let Some(v) = parsed.height {
        config.card.height = v;
    }
    if let Some(v) = parsed.padding {
        config.card.padding = v;
    }
    if let Some(v) = parsed.animate {
        config.card.animate = v;
    }
    if let Some(v) = parsed.debug {
        config.card.debug = v;
    }
    if let Some(v) = parsed.bar_width {
        config.card.bar_width = v;
    }
    if let Some(v) = parsed.bar_section_padding {
        config.card.bar_section_padding = v;
    }
    if let Some(v) = parsed.legend_columns {
        config.card.legend_columns = v;
    }
    if let Some(v) = parsed.legend_section_padding {
        config.card.legend_section_padding = v;
    }

    if let Some(vars) = parsed.theme_variables {
        if let Some(v) = vars.card_stroke {
            config.theme.card_stroke = v;
        }
        if let Some(v) = vars.card_fill {
            config.theme.card_fill = v;
        }
        if let Some(v) = vars.content_fill {
            config.theme.content_fill = v;
        }
        if let Some(v) = vars.content_debug_fill {
            config.theme.content_debug_fill = v;
        }
        if let Some(v) = vars.track_fill {
            config.theme.track_fill = v;
        }
        if let Some(v) = vars.default_segment_color {
            config.theme.default_segment_color = v;
        }
    }

    Ok(config)
}
