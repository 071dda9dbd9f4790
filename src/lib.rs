pub mod card;
pub mod chart;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod format;
pub mod model;
pub mod style;
pub mod svg;
pub mod theme;

pub use card::{compose, render_card};
pub use chart::{bar_section, legend_section};
pub use config::{CardConfig, Config, load_config, parse_config};
pub use format::format_lines;
pub use model::{BarRow, CardData, LegendEntry, ModelError, Segment};
pub use svg::{Document, Group, Node, render_svg, write_output_svg};
pub use theme::Theme;

#[cfg(feature = "cli")]
pub use cli::run;
